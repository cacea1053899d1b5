//! Strength rating of accepted passwords.

use crate::sections::{count_systematic_chars, count_unique_chars};

/// Character composition of a password.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub length: usize,
    pub lower: usize,
    pub upper: usize,
    pub digits: usize,
    pub symbols: usize,
    pub repeats: usize,
    pub systematic: usize,
}

impl Composition {
    /// Classifies every code point of `password`.
    ///
    /// Letters that are not uppercase count as lowercase; numeric characters
    /// of any script count as digits; everything else is a symbol.
    pub fn of(password: &str) -> Self {
        let mut comp = Self {
            systematic: count_systematic_chars(password),
            ..Self::default()
        };

        for c in password.chars() {
            comp.length += 1;
            if c.is_alphabetic() {
                if c.is_uppercase() {
                    comp.upper += 1;
                } else {
                    comp.lower += 1;
                }
            } else if c.is_numeric() {
                comp.digits += 1;
            } else {
                comp.symbols += 1;
            }
        }
        comp.repeats = comp.length - count_unique_chars(password);

        comp
    }

    /// Score in `[0, 100]`.
    pub fn score(&self) -> u8 {
        let l = self.length as i64;
        let lower = self.lower as i64;
        let upper = self.upper as i64;
        let digits = self.digits as i64;
        let symbols = self.symbols as i64;

        let mut n = l * 4;
        if upper > 0 {
            n += (l - upper) * 2;
        }
        if lower > 0 {
            n += (l - lower) * 2;
        }
        n += digits * 4;
        n += symbols * 6;

        // letters only
        if l == lower + upper {
            n -= lower + upper;
        }
        // digits only
        if l == digits {
            n -= digits * 4;
        }
        n -= self.repeats as i64 * 4;
        n -= self.systematic as i64 * 3;

        n.clamp(0, 100) as u8
    }
}

/// Rates a password from 0 (weak) to 100 (strong).
///
/// Only meaningful for passwords that already passed validation; use
/// [`Validator::rate`](crate::Validator::rate) to get both.
pub fn rate(password: &str) -> u8 {
    Composition::of(password).score()
}
