//! Owned byte string buffer.
//!
//! - [`StrBuf`] - Growable byte string with a hidden NUL sentinel
//! - Structural edits, queries and case folding live in `strbuf`
//! - Length-changing rewrites (replace, trim) live in `rewrite`

mod rewrite;
mod strbuf;

pub use rewrite::ASCII_WHITESPACE;
pub use strbuf::StrBuf;
