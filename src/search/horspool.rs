//! Boyer-Moore-Horspool substring search with a good-suffix table.
//!
//! The pattern is compared right-to-left against each alignment. Two tables
//! decide how far to slide after a mismatch:
//!
//! - **Bad character**: last index of every byte value in the pattern, or -1.
//!   Lives on the stack.
//! - **Good suffix**: `m + 1` shifts computed with the classic two-pass border
//!   scan, realigning an already-matched suffix with its previous occurrence
//!   in the pattern (or with the longest border when there is none).
//!
//! After a full match the scan advances by `good_suffix[0]`, the pattern's
//! period, so overlapping occurrences are reported.

use crate::error::BufError;
use crate::util::{try_filled, try_push};

/// Prepared Boyer-Moore-Horspool searcher for a single pattern.
#[derive(Debug, Clone)]
pub(crate) struct Horspool<'p> {
    pattern: &'p [u8],
    bad_char: [isize; 256],
    good_suffix: Vec<usize>,
}

impl<'p> Horspool<'p> {
    /// Builds both shift tables for `pattern`.
    ///
    /// `pattern` must be non-empty.
    pub(crate) fn new(pattern: &'p [u8]) -> Result<Self, BufError> {
        debug_assert!(!pattern.is_empty());

        Ok(Self {
            pattern,
            bad_char: bad_char_table(pattern),
            good_suffix: good_suffix_table(pattern)?,
        })
    }

    /// Returns the first match starting at or after `from`.
    pub(crate) fn find_at(&self, haystack: &[u8], from: usize) -> Option<usize> {
        let mut i = from;
        while let Some(step) = self.probe(haystack, i) {
            match step {
                Probe::Match => return Some(i),
                Probe::Shift(shift) => i += shift,
            }
        }
        None
    }

    /// Returns every match, overlapping ones included, in ascending order.
    pub(crate) fn find_all(&self, haystack: &[u8]) -> Result<Vec<usize>, BufError> {
        let mut matches = Vec::new();
        let mut i = 0;
        while let Some(step) = self.probe(haystack, i) {
            match step {
                Probe::Match => {
                    try_push(&mut matches, i)?;
                    i += self.good_suffix[0];
                }
                Probe::Shift(shift) => i += shift,
            }
        }
        Ok(matches)
    }

    /// Compares the pattern against alignment `i`.
    ///
    /// Returns `None` once the pattern no longer fits in the haystack.
    fn probe(&self, haystack: &[u8], i: usize) -> Option<Probe> {
        let m = self.pattern.len();
        if i > haystack.len() || haystack.len() - i < m {
            return None;
        }

        let mut j = m;
        while j > 0 && self.pattern[j - 1] == haystack[i + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(Probe::Match);
        }

        let j = j - 1;
        let bad = j as isize - self.bad_char[haystack[i + j] as usize];
        let shift = (self.good_suffix[j + 1] as isize).max(bad);
        Some(Probe::Shift(shift as usize))
    }

    #[cfg(test)]
    fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }
}

/// Outcome of comparing the pattern at one alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Match,
    Shift(usize),
}

fn bad_char_table(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &byte) in pattern.iter().enumerate() {
        table[byte as usize] = i as isize;
    }
    table
}

fn good_suffix_table(pattern: &[u8]) -> Result<Vec<usize>, BufError> {
    let m = pattern.len();
    let mut shift = try_filled(m + 1, 0usize)?;
    let mut border = try_filled(m + 1, 0usize)?;

    // Pass 1: widest borders of every suffix; fills shifts for suffixes that
    // reoccur inside the pattern preceded by a different byte.
    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Pass 2: remaining positions fall back to the widest border of the
    // whole pattern that still fits.
    let mut j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    Ok(shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_char_table() {
        let table = bad_char_table(b"abcab");
        assert_eq!(table[b'a' as usize], 3);
        assert_eq!(table[b'b' as usize], 4);
        assert_eq!(table[b'c' as usize], 2);
        assert_eq!(table[b'z' as usize], -1);
    }

    #[test]
    fn test_good_suffix_shifts_positive() {
        for pattern in [&b"a"[..], b"aaaa", b"abab", b"abcab", b"issi", b"Mississippi"] {
            let searcher = Horspool::new(pattern).unwrap();
            assert_eq!(searcher.good_suffix().len(), pattern.len() + 1);
            assert!(searcher.good_suffix().iter().all(|&s| s >= 1));
        }
    }

    #[test]
    fn test_good_suffix_period() {
        // good_suffix[0] is the smallest period of the pattern.
        assert_eq!(Horspool::new(b"aaaa").unwrap().good_suffix()[0], 1);
        assert_eq!(Horspool::new(b"abab").unwrap().good_suffix()[0], 2);
        assert_eq!(Horspool::new(b"abc").unwrap().good_suffix()[0], 3);
        assert_eq!(Horspool::new(b"issi").unwrap().good_suffix()[0], 3);
    }

    #[test]
    fn test_find_all_mississippi() {
        let hay = b"Mississippi";
        assert_eq!(Horspool::new(b"i").unwrap().find_all(hay).unwrap(), vec![1, 4, 7, 10]);
        assert_eq!(Horspool::new(b"iss").unwrap().find_all(hay).unwrap(), vec![1, 4]);
        assert_eq!(Horspool::new(b"issi").unwrap().find_all(hay).unwrap(), vec![1, 4]);
        assert_eq!(Horspool::new(hay).unwrap().find_all(hay).unwrap(), vec![0]);
    }

    #[test]
    fn test_find_all_overlapping() {
        assert_eq!(Horspool::new(b"aa").unwrap().find_all(b"aaa").unwrap(), vec![0, 1]);
        assert_eq!(
            Horspool::new(b"aba").unwrap().find_all(b"ababababa").unwrap(),
            vec![0, 2, 4, 6]
        );
    }

    #[test]
    fn test_find_at() {
        let searcher = Horspool::new(b"ss").unwrap();
        let hay = b"Mississippi";
        assert_eq!(searcher.find_at(hay, 0), Some(2));
        assert_eq!(searcher.find_at(hay, 3), Some(5));
        assert_eq!(searcher.find_at(hay, 6), None);
        assert_eq!(searcher.find_at(hay, 100), None);
    }

    #[test]
    fn test_pattern_longer_than_haystack() {
        let searcher = Horspool::new(b"longer").unwrap();
        assert!(searcher.find_all(b"short").unwrap().is_empty());
    }
}
