//! Configuration for buffer behavior.
//!
//! - [`BufConfig`] - Search algorithm and initial capacity

use crate::search::Algorithm;

/// Default initial capacity (in content bytes, sentinel excluded).
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Configuration for a [`StrBuf`](crate::StrBuf).
///
/// The algorithm is used for every pattern lookup the buffer performs
/// (`contains`, `count`, `find_all`, `replace`, `split`).
///
/// # Example
///
/// ```
/// use strbuf::{Algorithm, BufConfig, StrBuf};
///
/// let config = BufConfig::default()
///     .with_algorithm(Algorithm::BoyerMooreHorspool)
///     .with_initial_capacity(64);
///
/// let buf = StrBuf::with_config(config)?;
/// assert!(buf.capacity() >= 64);
/// # Ok::<(), strbuf::BufError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufConfig {
    algorithm: Algorithm,
    initial_capacity: usize,
}

impl BufConfig {
    /// Creates a configuration using `algorithm` and no preallocation.
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Sets the search algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the number of content bytes reserved at construction.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the search algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the initial capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for BufConfig {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buf_config_default() {
        let config = BufConfig::default();
        assert_eq!(config.algorithm(), Algorithm::KnuthMorrisPratt);
        assert_eq!(config.initial_capacity(), DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_buf_config_builder() {
        let config = BufConfig::default()
            .with_algorithm(Algorithm::BoyerMooreHorspool)
            .with_initial_capacity(128);
        assert_eq!(config.algorithm(), Algorithm::BoyerMooreHorspool);
        assert_eq!(config.initial_capacity(), 128);
    }

    #[test]
    fn test_buf_config_new() {
        let config = BufConfig::new(Algorithm::BoyerMooreHorspool);
        assert_eq!(config.algorithm(), Algorithm::BoyerMooreHorspool);
        assert_eq!(config.initial_capacity(), 0);
    }
}
