//! Split iterator over delimiter-separated fields.

use std::iter::FusedIterator;

use crate::error::BufError;
use crate::search::{Algorithm, Matcher};

/// An iterator over the fields of a byte string separated by a delimiter.
///
/// Created by [`StrBuf::split`](crate::StrBuf::split). Fields are the byte
/// spans between successive non-overlapping delimiter occurrences:
///
/// - content starting or ending with the delimiter yields an empty leading or
///   trailing field
/// - content equal to the delimiter yields two empty fields
/// - empty content yields a single empty field
/// - an empty delimiter yields the whole content as one field
///
/// The iterator is lazy: each call to `next` searches only as far as the
/// following delimiter. It is `Clone`, so a copy restarts from the same
/// position, and the search tables live only as long as the iterator.
///
/// # Example
///
/// ```
/// use strbuf::StrBuf;
///
/// let buf = StrBuf::from("a::b::c");
/// let mut fields = buf.split(b"::")?;
///
/// assert_eq!(fields.next(), Some(&b"a"[..]));
/// assert_eq!(fields.next(), Some(&b"b"[..]));
/// assert_eq!(fields.next(), Some(&b"c"[..]));
/// assert_eq!(fields.next(), None);
/// # Ok::<(), strbuf::BufError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Split<'a> {
    haystack: &'a [u8],
    delimiter_len: usize,
    matcher: Option<Matcher<'a>>,
    position: usize,
    finished: bool,
}

impl<'a> Split<'a> {
    pub(crate) fn new(
        haystack: &'a [u8],
        delimiter: &'a [u8],
        algorithm: Algorithm,
    ) -> Result<Self, BufError> {
        // A delimiter that cannot fit never matches; skip building tables.
        let matcher = if delimiter.len() <= haystack.len() {
            Matcher::new(delimiter, algorithm)?
        } else {
            None
        };

        Ok(Self {
            haystack,
            delimiter_len: delimiter.len(),
            matcher,
            position: 0,
            finished: false,
        })
    }

    /// Returns the not-yet-yielded tail of the content.
    pub fn remainder(&self) -> Option<&'a [u8]> {
        if self.finished {
            None
        } else {
            Some(&self.haystack[self.position..])
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let found = self
            .matcher
            .as_ref()
            .and_then(|m| m.find_at(self.haystack, self.position));

        match found {
            Some(at) => {
                let field = &self.haystack[self.position..at];
                self.position = at + self.delimiter_len;
                Some(field)
            }
            None => {
                self.finished = true;
                Some(&self.haystack[self.position..])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.haystack.len() - self.position + 1))
        }
    }
}

impl FusedIterator for Split<'_> {}
