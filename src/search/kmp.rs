//! Knuth-Morris-Pratt substring search.
//!
//! The pattern is preprocessed into a failure table (`lps`): `lps[i]` is the
//! length of the longest proper prefix of `pattern[..=i]` that is also a
//! suffix of it. On a mismatch the scan falls back through this table instead
//! of re-reading haystack bytes, so a search is `O(n + m)`.

use crate::error::BufError;
use crate::util::{try_filled, try_push};

/// Prepared KMP searcher for a single pattern.
///
/// Borrowing the pattern ties the table's lifetime to the caller's search;
/// nothing is cached beyond it.
#[derive(Debug, Clone)]
pub(crate) struct Kmp<'p> {
    pattern: &'p [u8],
    lps: Vec<usize>,
}

impl<'p> Kmp<'p> {
    /// Builds the failure table for `pattern`.
    ///
    /// `pattern` must be non-empty.
    pub(crate) fn new(pattern: &'p [u8]) -> Result<Self, BufError> {
        debug_assert!(!pattern.is_empty());

        let mut lps = try_filled(pattern.len(), 0usize)?;
        let mut left = 0;
        let mut right = 1;

        while right < pattern.len() {
            if pattern[right] == pattern[left] {
                lps[right] = left + 1;
                left += 1;
                right += 1;
            } else if left != 0 {
                left = lps[left - 1];
            } else {
                lps[right] = 0;
                right += 1;
            }
        }

        Ok(Self { pattern, lps })
    }

    /// Returns the first match starting at or after `from`.
    pub(crate) fn find_at(&self, haystack: &[u8], from: usize) -> Option<usize> {
        let m = self.pattern.len();
        let mut str_index = from;
        let mut pat_index = 0;

        while str_index < haystack.len() {
            // Not enough bytes left to complete a match.
            if haystack.len() - str_index < m - pat_index {
                return None;
            }
            if haystack[str_index] == self.pattern[pat_index] {
                str_index += 1;
                pat_index += 1;
                if pat_index == m {
                    return Some(str_index - m);
                }
            } else if pat_index != 0 {
                pat_index = self.lps[pat_index - 1];
            } else {
                str_index += 1;
            }
        }

        None
    }

    /// Returns every match, overlapping ones included, in ascending order.
    pub(crate) fn find_all(&self, haystack: &[u8]) -> Result<Vec<usize>, BufError> {
        let m = self.pattern.len();
        let mut matches = Vec::new();
        let mut str_index = 0;
        let mut pat_index = 0;

        while str_index < haystack.len() {
            if haystack[str_index] == self.pattern[pat_index] {
                str_index += 1;
                pat_index += 1;
                if pat_index == m {
                    try_push(&mut matches, str_index - m)?;
                    // Resume from the matched border so overlaps are seen.
                    pat_index = self.lps[m - 1];
                }
            } else if pat_index != 0 {
                pat_index = self.lps[pat_index - 1];
            } else {
                str_index += 1;
            }
        }

        Ok(matches)
    }

    #[cfg(test)]
    fn table(&self) -> &[usize] {
        &self.lps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lps_table() {
        assert_eq!(Kmp::new(b"a").unwrap().table(), &[0]);
        assert_eq!(Kmp::new(b"aaaa").unwrap().table(), &[0, 1, 2, 3]);
        assert_eq!(Kmp::new(b"abab").unwrap().table(), &[0, 0, 1, 2]);
        assert_eq!(Kmp::new(b"aabaaab").unwrap().table(), &[0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(Kmp::new(b"issi").unwrap().table(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_find_all_mississippi() {
        let hay = b"Mississippi";
        assert_eq!(Kmp::new(b"i").unwrap().find_all(hay).unwrap(), vec![1, 4, 7, 10]);
        assert_eq!(Kmp::new(b"iss").unwrap().find_all(hay).unwrap(), vec![1, 4]);
        assert_eq!(Kmp::new(b"issi").unwrap().find_all(hay).unwrap(), vec![1, 4]);
        assert_eq!(Kmp::new(hay).unwrap().find_all(hay).unwrap(), vec![0]);
    }

    #[test]
    fn test_find_all_overlapping() {
        assert_eq!(Kmp::new(b"aa").unwrap().find_all(b"aaa").unwrap(), vec![0, 1]);
        assert_eq!(
            Kmp::new(b"aba").unwrap().find_all(b"ababababa").unwrap(),
            vec![0, 2, 4, 6]
        );
    }

    #[test]
    fn test_find_at() {
        let kmp = Kmp::new(b"ss").unwrap();
        let hay = b"Mississippi";
        assert_eq!(kmp.find_at(hay, 0), Some(2));
        assert_eq!(kmp.find_at(hay, 3), Some(5));
        assert_eq!(kmp.find_at(hay, 6), None);
        assert_eq!(kmp.find_at(hay, 100), None);
    }

    #[test]
    fn test_no_match() {
        let kmp = Kmp::new(b"xyz").unwrap();
        assert!(kmp.find_all(b"Mississippi").unwrap().is_empty());
        assert_eq!(kmp.find_at(b"Mississippi", 0), None);
    }
}
