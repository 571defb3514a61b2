//! strbuf
//!
//! Growable byte strings with a built-in substring search engine.
//!
//! `strbuf` provides [`StrBuf`], an owned, mutable byte string that keeps a
//! hidden trailing NUL byte, plus the search engine its pattern operations
//! run on. The engine implements two interchangeable algorithms that report
//! every occurrence of a pattern, overlapping ones included:
//!
//! - Knuth-Morris-Pratt
//! - Boyer-Moore-Horspool with bad-character and good-suffix tables
//!
//! The crate intentionally:
//! - does NOT interpret text as Unicode (matching and case folding are byte/ASCII)
//! - does NOT synchronize access (one owner per buffer)
//! - does NOT cache search tables between calls
//!
//! Every operation is synchronous and either completes or reports an
//! allocation failure without leaving a half-modified buffer behind.
//!
//! # Buffer
//!
//! ```
//! use strbuf::{StrBuf, BufError};
//!
//! fn main() -> Result<(), BufError> {
//!     let mut buf = StrBuf::from("  Mississippi ");
//!     buf.trim(b" ");
//!
//!     assert_eq!(buf.count(b"i")?, 4);
//!     assert!(buf.contains(b"sip")?);
//!
//!     buf.replace(b"iss", b"")?;
//!     assert_eq!(buf, "Mippi");
//!     Ok(())
//! }
//! ```
//!
//! # Search
//!
//! ```
//! use strbuf::{find_all, Algorithm};
//!
//! let hay = "的中对不起我的中文不好".as_bytes();
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(find_all(hay, "的中".as_bytes(), algorithm)?, vec![0, 18]);
//! }
//! # Ok::<(), strbuf::BufError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod search;
mod split;

mod util; // internal fallible-allocation helpers

//
// Public surface (intentionally tiny)
//

pub use buffer::{ASCII_WHITESPACE, StrBuf};
pub use config::{BufConfig, DEFAULT_INITIAL_CAPACITY};
pub use error::BufError;
pub use search::{Algorithm, find_all, find_first};
pub use split::Split;
