//! Error types for strbuf.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur during buffer and search operations.
///
/// Degenerate inputs (empty pattern, pattern longer than the haystack, empty
/// cut-set) are never errors. Buffer and search operations fail only when
/// memory for buffer growth, scratch storage, or search tables runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufError {
    /// Storage for buffer growth, a rebuild, or a search table could not be
    /// obtained.
    Alloc(TryReserveError),

    /// Invalid configuration value (only produced while parsing settings).
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufError::Alloc(e) => write!(f, "allocation failed: {}", e),
            BufError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BufError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufError::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for BufError {
    fn from(e: TryReserveError) -> Self {
        BufError::Alloc(e)
    }
}
