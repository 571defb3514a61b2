//! Substring search engine.
//!
//! Two interchangeable algorithms report every (possibly overlapping)
//! occurrence of a pattern in a haystack:
//!
//! - [`Algorithm::KnuthMorrisPratt`] - failure-table scan, linear worst case
//! - [`Algorithm::BoyerMooreHorspool`] - right-to-left scan with bad-character
//!   and good-suffix shifts, sublinear on typical text
//!
//! Both produce identical offsets for every input. Working tables are built
//! per call and dropped before the call returns.
//!
//! # Example
//!
//! ```
//! use strbuf::{find_all, Algorithm};
//!
//! let hits = find_all(b"Mississippi", b"iss", Algorithm::BoyerMooreHorspool)?;
//! assert_eq!(hits, vec![1, 4]);
//! # Ok::<(), strbuf::BufError>(())
//! ```

mod horspool;
mod kmp;

use std::fmt;
use std::str::FromStr;

use crate::error::BufError;

use horspool::Horspool;
use kmp::Kmp;

/// Substring search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Knuth-Morris-Pratt.
    #[default]
    KnuthMorrisPratt,

    /// Boyer-Moore-Horspool with a good-suffix table.
    BoyerMooreHorspool,
}

impl Algorithm {
    /// Both algorithms, in declaration order.
    pub const ALL: [Algorithm; 2] = [Algorithm::KnuthMorrisPratt, Algorithm::BoyerMooreHorspool];

    /// Short lowercase name (`"kmp"` or `"bmh"`).
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::KnuthMorrisPratt => "kmp",
            Algorithm::BoyerMooreHorspool => "bmh",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BufError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" | "knuth-morris-pratt" => Ok(Algorithm::KnuthMorrisPratt),
            "bmh" | "horspool" | "boyer-moore-horspool" => Ok(Algorithm::BoyerMooreHorspool),
            _ => Err(BufError::InvalidConfig {
                message: "unknown search algorithm (expected kmp or bmh)",
            }),
        }
    }
}

/// A pattern with its algorithm tables built, valid for one operation.
#[derive(Debug, Clone)]
pub(crate) enum Matcher<'p> {
    Kmp(Kmp<'p>),
    Horspool(Horspool<'p>),
}

impl<'p> Matcher<'p> {
    /// Prepares `pattern` for searching.
    ///
    /// Returns `Ok(None)` for an empty pattern, which never matches.
    pub(crate) fn new(pattern: &'p [u8], algorithm: Algorithm) -> Result<Option<Self>, BufError> {
        if pattern.is_empty() {
            return Ok(None);
        }
        let matcher = match algorithm {
            Algorithm::KnuthMorrisPratt => Matcher::Kmp(Kmp::new(pattern)?),
            Algorithm::BoyerMooreHorspool => Matcher::Horspool(Horspool::new(pattern)?),
        };
        Ok(Some(matcher))
    }

    pub(crate) fn find_at(&self, haystack: &[u8], from: usize) -> Option<usize> {
        match self {
            Matcher::Kmp(kmp) => kmp.find_at(haystack, from),
            Matcher::Horspool(bmh) => bmh.find_at(haystack, from),
        }
    }

    pub(crate) fn find_all(&self, haystack: &[u8]) -> Result<Vec<usize>, BufError> {
        match self {
            Matcher::Kmp(kmp) => kmp.find_all(haystack),
            Matcher::Horspool(bmh) => bmh.find_all(haystack),
        }
    }
}

/// Returns `true` when no match can exist, so no tables need building.
fn is_degenerate(haystack: &[u8], pattern: &[u8]) -> bool {
    haystack.is_empty() || pattern.is_empty() || pattern.len() > haystack.len()
}

/// Finds every occurrence of `pattern` in `haystack`.
///
/// Offsets are strictly ascending and overlapping occurrences are included.
/// An empty haystack, an empty pattern, or a pattern longer than the haystack
/// yields an empty vector.
///
/// # Errors
///
/// Returns [`BufError::Alloc`] if the search tables or the result vector
/// cannot be allocated.
///
/// # Example
///
/// ```
/// use strbuf::{find_all, Algorithm};
///
/// assert_eq!(find_all(b"aaa", b"aa", Algorithm::KnuthMorrisPratt)?, vec![0, 1]);
/// # Ok::<(), strbuf::BufError>(())
/// ```
pub fn find_all(
    haystack: &[u8],
    pattern: &[u8],
    algorithm: Algorithm,
) -> Result<Vec<usize>, BufError> {
    if is_degenerate(haystack, pattern) {
        return Ok(Vec::new());
    }

    let matches = match Matcher::new(pattern, algorithm)? {
        Some(matcher) => matcher.find_all(haystack)?,
        None => Vec::new(),
    };

    log::trace!(
        "find_all: algorithm={} haystack={}B pattern={}B matches={}",
        algorithm,
        haystack.len(),
        pattern.len(),
        matches.len()
    );

    Ok(matches)
}

/// Finds the first occurrence of `pattern` in `haystack`.
///
/// Follows the same degenerate-input policy as [`find_all`].
///
/// # Errors
///
/// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
pub fn find_first(
    haystack: &[u8],
    pattern: &[u8],
    algorithm: Algorithm,
) -> Result<Option<usize>, BufError> {
    if is_degenerate(haystack, pattern) {
        return Ok(None);
    }

    Ok(Matcher::new(pattern, algorithm)?.and_then(|m| m.find_at(haystack, 0)))
}
