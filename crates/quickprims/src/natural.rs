//! Natural ("human") ordering of strings with embedded numbers.
//!
//! Each string is split into alternating runs, always starting and ending
//! with a text run that may be empty: `"img12.png"` becomes
//! `["img", "12", ".png"]` and `"7"` becomes `["", "7", ""]`. Runs are then
//! compared pairwise:
//!
//! - a string that runs out of runs first sorts first;
//! - a run with no significant characters (empty text, or digits that are
//!   all `0`) sorts before one that has some, and two such runs are equal;
//! - digit runs compare by significant digit count, then by their full text,
//!   so `"2" < "10"` and, on a tie, `"02" < "2"`;
//! - text runs compare case-insensitively first; on a tie, lowercase sorts
//!   before uppercase at the first position where the case differs.
//!
//! ```rust
//! use core::cmp::Ordering;
//! use quickprims::natural;
//!
//! assert_eq!(natural::compare("img2", "img10"), Ordering::Less);
//! assert_eq!(natural::compare("img02", "img2"), Ordering::Less);
//! assert_eq!(natural::compare("alpha", "Zeta"), Ordering::Less);
//!
//! let mut files = vec!["x10", "x9", "x100", "x09"];
//! files.sort_by(|a, b| natural::compare(a, b));
//! assert_eq!(files, ["x09", "x9", "x10", "x100"]);
//! ```
use core::cmp::Ordering;

/// Compares two strings in natural order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut a_runs = Runs::new(a);
    let mut b_runs = Runs::new(b);

    loop {
        let (a_run, b_run) = match (a_runs.next(), b_runs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_run), Some(b_run)) => (a_run, b_run),
        };

        // Runs alternate from the same starting kind, so both sides always
        // hold the same kind at the same position.
        debug_assert_eq!(a_run.is_digits, b_run.is_digits);

        let a_len = a_run.significant_len();
        let b_len = b_run.significant_len();
        let ordering = match (a_len, b_len) {
            (0, 0) => continue,
            (0, _) => Ordering::Less,
            (_, 0) => Ordering::Greater,
            _ if a_run.is_digits => a_len.cmp(&b_len).then_with(|| a_run.text.cmp(b_run.text)),
            _ => compare_text(a_run.text, b_run.text),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Case-insensitive order, then lowercase before uppercase.
///
/// Both stages are lexicographic over `char`s, so the result is a total order
/// and only identical strings compare equal.
fn compare_text(a: &str, b: &str) -> Ordering {
    let case_key = |c: char| (!c.is_lowercase(), c);

    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
}

/// Natural-order comparator, for APIs that take a comparator value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl NaturalOrder {
    /// Same as [`compare`].
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        compare(a, b)
    }
}

/// A string slice ordered by [`compare`].
///
/// Equality follows the ordering, so `NaturalStr("a0") == NaturalStr("a00")`.
#[derive(Debug, Clone, Copy)]
pub struct NaturalStr<'a>(pub &'a str);

impl PartialEq for NaturalStr<'_> {
    fn eq(&self, other: &Self) -> bool {
        compare(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for NaturalStr<'_> {}

impl PartialOrd for NaturalStr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalStr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0, other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run<'a> {
    pub(crate) text: &'a str,
    pub(crate) is_digits: bool,
}

impl Run<'_> {
    fn significant_len(&self) -> usize {
        if self.is_digits {
            self.text.trim_start_matches('0').len()
        } else {
            self.text.len()
        }
    }
}

/// Alternating text/digit runs of a string.
#[derive(Debug, Clone)]
pub(crate) struct Runs<'a> {
    rest: &'a str,
    next_is_digits: bool,
    done: bool,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            next_is_digits: false,
            done: false,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        if self.done {
            return None;
        }

        let is_digits = self.next_is_digits;
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != is_digits)
            .unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        self.next_is_digits = !is_digits;

        // A text run that reaches the end of input is the last run.
        if !is_digits && rest.is_empty() {
            self.done = true;
        }

        Some(Run { text, is_digits })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    fn runs(text: &str) -> Vec<&str> {
        Runs::new(text).map(|run| run.text).collect()
    }

    #[rstest]
    #[case("", &[""])]
    #[case("abc", &["abc"])]
    #[case("7", &["", "7", ""])]
    #[case("img12.png", &["img", "12", ".png"])]
    #[case("a1b22", &["a", "1", "b", "22", ""])]
    #[case("007x", &["", "007", "x"])]
    fn splits_into_alternating_runs(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(runs(text), expected);
    }

    #[rstest]
    #[case("img2", "img10", Ordering::Less)]
    #[case("img10", "img2", Ordering::Greater)]
    #[case("a", "a", Ordering::Equal)]
    #[case("", "", Ordering::Equal)]
    #[case("", "a", Ordering::Less)]
    #[case("a", "", Ordering::Greater)]
    #[case("img02", "img2", Ordering::Less)]
    #[case("img2", "img02", Ordering::Greater)]
    #[case("img0", "img00", Ordering::Equal)]
    #[case("img0", "img1", Ordering::Less)]
    #[case("img", "img1", Ordering::Less)]
    #[case("img1", "img1a", Ordering::Less)]
    #[case("9", "a", Ordering::Less)]
    #[case("abc", "abd", Ordering::Less)]
    #[case("B", "a", Ordering::Greater)]
    #[case("a", "A", Ordering::Less)]
    #[case("Zeta", "alpha", Ordering::Greater)]
    #[case("track10", "Track3", Ordering::Less)]
    #[case("readme", "README", Ordering::Less)]
    #[case("aB", "Ab", Ordering::Less)]
    #[case("img.png", "IMG3.png", Ordering::Greater)]
    #[case("file99999999999999999999999", "file100000000000000000000000", Ordering::Less)]
    #[case("v1.10.2", "v1.9.12", Ordering::Greater)]
    fn orders(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare(a, b), expected);
        assert_eq!(compare(b, a), expected.reverse());
    }

    #[test]
    fn sorts_file_names() {
        let mut names = [
            "track10.mp3",
            "track2.mp3",
            "track1.mp3",
            "Track3.mp3",
            "track01.mp3",
        ];
        names.sort_by(|a, b| NaturalOrder.compare(a, b));
        assert_eq!(
            names,
            [
                "track01.mp3",
                "track1.mp3",
                "track2.mp3",
                "track10.mp3",
                "Track3.mp3"
            ]
        );
    }

    #[test]
    fn natural_str_follows_comparator() {
        let mut keys: Vec<NaturalStr<'_>> = ["a10", "a2", "a1"].map(NaturalStr).into();
        keys.sort();
        assert_eq!(keys.iter().map(|k| k.0).collect::<Vec<_>>(), ["a1", "a2", "a10"]);
        assert_eq!(NaturalStr("a0"), NaturalStr("a00"));
        assert_ne!(NaturalStr("a01"), NaturalStr("a1"));
    }
}
