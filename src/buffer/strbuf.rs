//! The StrBuf type - an owned, growable byte string with a NUL sentinel.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

use crate::config::BufConfig;
use crate::error::BufError;
use crate::search::{self, Algorithm};
use crate::split::Split;
use crate::util::try_copy_with_nul;

/// A growable, mutable byte string.
///
/// `StrBuf` owns its storage exclusively and always keeps one trailing zero
/// byte after the content. That sentinel is never counted in [`len`] and is
/// never part of [`as_bytes`]; it only shows up through
/// [`as_bytes_with_nul`] for handing the content to C-string consumers.
///
/// Pattern lookups (`contains`, `count`, `find_all`, `replace`, `split`) go
/// through the crate's search engine using the algorithm from the buffer's
/// [`BufConfig`].
///
/// # Invariants
///
/// - `capacity() >= len()`, with one extra byte always held for the sentinel
/// - the byte at index `len()` of the storage is `0`
/// - operations that may fail leave the buffer untouched on error
///
/// # Example
///
/// ```
/// use strbuf::StrBuf;
///
/// let mut buf = StrBuf::from("Mississippi");
/// assert_eq!(buf.count(b"i")?, 4);
///
/// buf.replace(b"iss", b"issi")?;
/// assert_eq!(buf, "Missiissiippi");
///
/// buf.to_upper();
/// assert_eq!(buf.as_bytes_with_nul(), b"MISSIISSIIPPI\0");
/// # Ok::<(), strbuf::BufError>(())
/// ```
///
/// [`len`]: StrBuf::len
/// [`as_bytes`]: StrBuf::as_bytes
/// [`as_bytes_with_nul`]: StrBuf::as_bytes_with_nul
#[derive(Clone)]
pub struct StrBuf {
    /// Content followed by exactly one sentinel byte.
    pub(super) data: Vec<u8>,
    pub(super) config: BufConfig,
}

impl StrBuf {
    /// Creates an empty buffer with the default configuration.
    pub fn new() -> Self {
        Self {
            data: vec![0],
            config: BufConfig::default(),
        }
    }

    /// Creates an empty buffer with the given configuration, reserving its
    /// initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the initial capacity cannot be reserved.
    pub fn with_config(config: BufConfig) -> Result<Self, BufError> {
        let mut data = Vec::new();
        data.try_reserve_exact(config.initial_capacity().saturating_add(1))?;
        data.push(0);
        Ok(Self { data, config })
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the storage cannot be allocated.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, BufError> {
        Ok(Self {
            data: try_copy_with_nul(bytes)?,
            config: BufConfig::default(),
        })
    }

    /// Replaces this buffer's configuration.
    ///
    /// Content and capacity are unchanged.
    pub fn set_config(&mut self, config: BufConfig) {
        self.config = config;
    }

    /// Returns the buffer's configuration.
    pub fn config(&self) -> &BufConfig {
        &self.config
    }

    /// Returns the search algorithm used for pattern lookups.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm()
    }

    /// Returns the number of content bytes (sentinel excluded).
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns true if the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many content bytes fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity() - 1
    }

    /// Returns the content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Returns the content followed by the trailing NUL sentinel.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// Returns the content as `&str` if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Appends `bytes` to the end of the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the buffer cannot grow; the content is
    /// unchanged in that case.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), BufError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.data.try_reserve(bytes.len())?;
        self.data.pop();
        self.data.extend_from_slice(bytes);
        self.data.push(0);
        Ok(())
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the buffer cannot grow.
    pub fn push(&mut self, byte: u8) -> Result<(), BufError> {
        self.append(&[byte])
    }

    /// Shortens the content to `new_len` bytes.
    ///
    /// Does nothing if `new_len >= len()`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }
        self.data.truncate(new_len + 1);
        self.data[new_len] = 0;
    }

    /// Removes all content, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Reverses the content byte by byte.
    ///
    /// Multi-byte UTF-8 sequences are reversed as bytes too.
    pub fn reverse(&mut self) {
        let len = self.len();
        self.data[..len].reverse();
    }

    /// Converts ASCII letters to lowercase in place; other bytes are untouched.
    pub fn to_lower(&mut self) {
        let len = self.len();
        self.data[..len].make_ascii_lowercase();
    }

    /// Converts ASCII letters to uppercase in place; other bytes are untouched.
    pub fn to_upper(&mut self) {
        let len = self.len();
        self.data[..len].make_ascii_uppercase();
    }

    /// Returns true if the content begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(prefix)
    }

    /// Returns true if the content ends with `suffix`.
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.as_bytes().ends_with(suffix)
    }

    /// Returns the offsets of every occurrence of `pattern`, overlapping ones
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    pub fn find_all(&self, pattern: &[u8]) -> Result<Vec<usize>, BufError> {
        search::find_all(self.as_bytes(), pattern, self.algorithm())
    }

    /// Returns the offset of the first occurrence of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    pub fn find(&self, pattern: &[u8]) -> Result<Option<usize>, BufError> {
        search::find_first(self.as_bytes(), pattern, self.algorithm())
    }

    /// Returns true if `pattern` occurs in the content.
    ///
    /// An empty pattern never matches.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    pub fn contains(&self, pattern: &[u8]) -> Result<bool, BufError> {
        Ok(self.find(pattern)?.is_some())
    }

    /// Counts occurrences of `pattern`, overlapping ones included.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    pub fn count(&self, pattern: &[u8]) -> Result<usize, BufError> {
        Ok(self.find_all(pattern)?.len())
    }

    /// Returns a lazy iterator over the fields between occurrences of
    /// `delimiter`.
    ///
    /// See [`Split`] for the exact field rules.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use strbuf::StrBuf;
    ///
    /// let buf = StrBuf::from(",a,,b,");
    /// let fields: Vec<&[u8]> = buf.split(b",")?.collect();
    /// assert_eq!(fields, vec![&b""[..], b"a", b"", b"b", b""]);
    /// # Ok::<(), strbuf::BufError>(())
    /// ```
    pub fn split<'a>(&'a self, delimiter: &'a [u8]) -> Result<Split<'a>, BufError> {
        Split::new(self.as_bytes(), delimiter, self.algorithm())
    }

    /// Consumes the buffer and returns its content (without the sentinel) as
    /// [`Bytes`].
    pub fn freeze(self) -> Bytes {
        let mut data = self.data;
        data.pop();
        Bytes::from(data)
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for StrBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for StrBuf {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for StrBuf {
    fn from(bytes: &[u8]) -> Self {
        let mut data = Vec::with_capacity(bytes.len() + 1);
        data.extend_from_slice(bytes);
        data.push(0);
        Self {
            data,
            config: BufConfig::default(),
        }
    }
}

impl From<&str> for StrBuf {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<Vec<u8>> for StrBuf {
    fn from(mut data: Vec<u8>) -> Self {
        data.push(0);
        Self {
            data,
            config: BufConfig::default(),
        }
    }
}

impl From<Bytes> for StrBuf {
    fn from(bytes: Bytes) -> Self {
        Self::from(bytes.as_ref())
    }
}

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}

impl PartialEq<[u8]> for StrBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for StrBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for StrBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StrBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf")
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .field("len", &self.len())
            .field("algorithm", &self.algorithm())
            .finish()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
