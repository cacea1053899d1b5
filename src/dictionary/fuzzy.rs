//! Fuzzy dictionary matching by edit distance.

/// Levenshtein distance between `a` and `b`, counted in code points.
///
/// Insertions, deletions and substitutions each cost one.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Levenshtein distance between `a` and `b` if it is at most `max`.
///
/// Returns `None` as soon as the distance is known to exceed `max`: either
/// the length difference alone is larger, or every cell of a row is.
pub fn bounded_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    Rows::default().bounded_distance(a, b, max)
}

/// DP rows reused across distance computations.
#[derive(Debug, Default)]
struct Rows {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Rows {
    fn bounded_distance(&mut self, a: &[char], b: &[char], max: usize) -> Option<usize> {
        if a.len().abs_diff(b.len()) > max {
            return None;
        }

        self.prev.clear();
        self.prev.extend(0..=b.len());
        self.curr.clear();
        self.curr.resize(b.len() + 1, 0);

        for i in 1..=a.len() {
            self.curr[0] = i;
            let mut row_min = i;
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                self.curr[j] = (self.prev[j] + 1)
                    .min(self.curr[j - 1] + 1)
                    .min(self.prev[j - 1] + cost);
                row_min = row_min.min(self.curr[j]);
            }
            // Row minima never decrease, so no later cell can come back under max.
            if row_min > max {
                return None;
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        let dist = self.prev[b.len()];
        (dist <= max).then_some(dist)
    }
}

/// A dictionary word close enough to the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch<'a> {
    pub word: &'a str,
    pub distance: usize,
}

/// Finds a word within `threshold` edits of `pw` or of its reversal.
///
/// `words` yields each word with its code points. Words whose length alone
/// puts them out of reach are skipped without running the distance.
/// Returns the first qualifying word in iteration order. Callers must not
/// rely on which word is reported when several qualify.
pub fn find_mangled<'a, I>(words: I, pw: &str, revpw: &str, threshold: usize) -> Option<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = (&'a str, &'a [char])>,
{
    let pw: Vec<char> = pw.chars().collect();
    let revpw: Vec<char> = revpw.chars().collect();
    let mut rows = Rows::default();

    for (word, chars) in words {
        if chars.len().abs_diff(pw.len()) > threshold {
            continue;
        }
        let found = rows
            .bounded_distance(chars, &pw, threshold)
            .or_else(|| rows.bounded_distance(chars, &revpw, threshold));
        if let Some(distance) = found {
            return Some(FuzzyMatch { word, distance });
        }
    }

    None
}
