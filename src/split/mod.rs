//! Delimiter-separated field iteration.
//!
//! - [`Split`] - Lazy iterator over the fields of a byte string

mod iter;

pub use iter::Split;
