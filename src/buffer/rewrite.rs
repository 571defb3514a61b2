//! Whole-content rewrites: replace and trim.
//!
//! Rewrites that change the content length are built into fresh storage and
//! then moved into the buffer, so a failed allocation leaves the original
//! content untouched. Trims only shrink, so they work in place.

use crate::error::BufError;
use crate::util::try_copy_with_nul;

use super::StrBuf;

/// ASCII whitespace as recognized by [`StrBuf::trim_whitespace`].
pub const ASCII_WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";

/// Which ends a trim strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrimSide {
    Left,
    Right,
    Both,
}

impl StrBuf {
    /// Replaces the whole content with a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the new storage cannot be allocated;
    /// the previous content is kept in that case.
    pub fn replace_contents(&mut self, bytes: &[u8]) -> Result<(), BufError> {
        let scratch = try_copy_with_nul(bytes)?;
        self.install(scratch);
        Ok(())
    }

    /// Replaces every occurrence of `old` with `new`.
    ///
    /// Occurrences are taken left to right; one that starts inside an
    /// occurrence already replaced is skipped. `new` may be shorter, equal to,
    /// or longer than `old`. Does nothing if the buffer is empty, `old` is
    /// empty, or `old` does not occur.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables or the rebuilt content
    /// cannot be allocated; the buffer is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use strbuf::StrBuf;
    ///
    /// let mut buf = StrBuf::from("Mississippi");
    /// buf.replace(b"iss", b"")?;
    /// assert_eq!(buf, "Mippi");
    /// # Ok::<(), strbuf::BufError>(())
    /// ```
    pub fn replace(&mut self, old: &[u8], new: &[u8]) -> Result<(), BufError> {
        if self.is_empty() || old.is_empty() {
            return Ok(());
        }

        let matches = self.find_all(old)?;
        if matches.is_empty() {
            return Ok(());
        }

        let content = self.as_bytes();
        let applied = non_overlapping(&matches, old.len()).count();
        let kept = content.len() - applied * old.len();
        let total = kept
            .saturating_add(applied.saturating_mul(new.len()))
            .saturating_add(1);

        let mut scratch = Vec::new();
        scratch.try_reserve_exact(total)?;

        let mut cursor = 0;
        for at in non_overlapping(&matches, old.len()) {
            scratch.extend_from_slice(&content[cursor..at]);
            scratch.extend_from_slice(new);
            cursor = at + old.len();
        }
        scratch.extend_from_slice(&content[cursor..]);
        scratch.push(0);

        self.install(scratch);
        Ok(())
    }

    /// Replaces every occurrence of `old` with `new` without reallocating.
    ///
    /// Produces the same result as [`StrBuf::replace`].
    ///
    /// # Panics
    ///
    /// Panics if `old` and `new` differ in length.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the search tables cannot be allocated.
    pub fn replace_same_len(&mut self, old: &[u8], new: &[u8]) -> Result<(), BufError> {
        assert_eq!(
            old.len(),
            new.len(),
            "replace_same_len: old and new must have equal length"
        );
        if self.is_empty() || old.is_empty() {
            return Ok(());
        }

        let matches = self.find_all(old)?;
        for at in non_overlapping(&matches, old.len()) {
            self.data[at..at + new.len()].copy_from_slice(new);
        }
        Ok(())
    }

    /// Strips leading and trailing bytes contained in `cut_set`.
    ///
    /// An empty `cut_set` leaves the buffer unchanged. Trimming is idempotent.
    ///
    /// Trimming only shrinks the content in place and never allocates, so
    /// this and the other `trim*` methods cannot fail.
    ///
    /// # Example
    ///
    /// ```
    /// use strbuf::StrBuf;
    ///
    /// let mut buf = StrBuf::from("--==value==--");
    /// buf.trim(b"-=");
    /// assert_eq!(buf, "value");
    /// ```
    pub fn trim(&mut self, cut_set: &[u8]) {
        self.set_trimmed(cut_set, TrimSide::Both);
    }

    /// Strips leading bytes contained in `cut_set`.
    pub fn trim_left(&mut self, cut_set: &[u8]) {
        self.set_trimmed(cut_set, TrimSide::Left);
    }

    /// Strips trailing bytes contained in `cut_set`.
    pub fn trim_right(&mut self, cut_set: &[u8]) {
        self.set_trimmed(cut_set, TrimSide::Right);
    }

    /// Strips leading and trailing [`ASCII_WHITESPACE`].
    pub fn trim_whitespace(&mut self) {
        self.trim(ASCII_WHITESPACE);
    }

    fn set_trimmed(&mut self, cut_set: &[u8], side: TrimSide) {
        if cut_set.is_empty() || self.is_empty() {
            return;
        }

        let mut in_set = [false; 256];
        for &byte in cut_set {
            in_set[byte as usize] = true;
        }
        let keep = |byte: &u8| !in_set[*byte as usize];

        let content = self.as_bytes();
        let start = match side {
            TrimSide::Right => 0,
            _ => content.iter().position(keep).unwrap_or(content.len()),
        };
        let end = match side {
            TrimSide::Left => content.len(),
            _ => content.iter().rposition(keep).map_or(start, |i| i + 1),
        };

        if start > 0 {
            self.data.copy_within(start..end, 0);
        }
        self.truncate(end - start);
    }

    /// Moves `data` (content plus sentinel) into the buffer.
    fn install(&mut self, data: Vec<u8>) {
        debug_assert_eq!(data.last(), Some(&0));
        log::debug!("rewrite: {}B -> {}B", self.len(), data.len() - 1);
        self.data = data;
    }
}

/// Match offsets with any occurrence overlapping an earlier one dropped.
fn non_overlapping(matches: &[usize], width: usize) -> impl Iterator<Item = usize> + '_ {
    let mut next_free = 0;
    matches.iter().copied().filter(move |&at| {
        if at < next_free {
            return false;
        }
        next_free = at + width;
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, BufConfig};

    fn both(content: &str) -> [StrBuf; 2] {
        Algorithm::ALL.map(|algorithm| {
            let mut buf = StrBuf::from(content);
            buf.set_config(BufConfig::new(algorithm));
            buf
        })
    }

    #[test]
    fn test_replace_contents() {
        let mut buf = StrBuf::from("old content");
        buf.replace_contents(b"new").unwrap();
        assert_eq!(buf, "new");
        assert_eq!(buf.as_bytes_with_nul(), b"new\0");
    }

    #[test]
    fn test_replace_grow() {
        for mut buf in both("Mississippi") {
            buf.replace(b"iss", b"issi").unwrap();
            assert_eq!(buf, "Missiissiippi");
        }
    }

    #[test]
    fn test_replace_shrink() {
        for mut buf in both("Mississippi") {
            buf.replace(b"iss", b"").unwrap();
            assert_eq!(buf, "Mippi");
        }
    }

    #[test]
    fn test_replace_same_size() {
        for mut buf in both("Mississippi") {
            buf.replace(b"ss", b"SS").unwrap();
            assert_eq!(buf, "MiSSiSSippi");
        }
    }

    #[test]
    fn test_replace_whole_content() {
        for mut buf in both("Mississippi") {
            buf.replace(b"Mississippi", b"Missouri").unwrap();
            assert_eq!(buf, "Missouri");
            assert_eq!(buf.as_bytes_with_nul(), b"Missouri\0");
        }
    }

    #[test]
    fn test_replace_overlapping_left_to_right() {
        for mut buf in both("aaa") {
            buf.replace(b"aa", b"b").unwrap();
            assert_eq!(buf, "ba");
        }
    }

    #[test]
    fn test_replace_noops() {
        let mut buf = StrBuf::from("Mississippi");
        buf.replace(b"", b"x").unwrap();
        buf.replace(b"xyz", b"q").unwrap();
        assert_eq!(buf, "Mississippi");

        let mut empty = StrBuf::new();
        empty.replace(b"a", b"b").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_replace_multibyte() {
        let mut buf = StrBuf::from("的中对不起我的中文不好");
        buf.replace("的中".as_bytes(), b"--").unwrap();
        assert_eq!(buf, "--对不起我--文不好");
    }

    #[test]
    fn test_replace_same_len_matches_replace() {
        for content in ["Mississippi", "aaaa", "abababa", ""] {
            let mut a = StrBuf::from(content);
            let mut b = StrBuf::from(content);
            a.replace(b"aba", b"xyz").unwrap();
            b.replace_same_len(b"aba", b"xyz").unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_replace_same_len_rejects_mismatch() {
        let mut buf = StrBuf::from("abc");
        let _ = buf.replace_same_len(b"ab", b"abc");
    }

    #[test]
    fn test_trim() {
        let mut buf = StrBuf::from("  \thello world\n ");
        buf.trim_whitespace();
        assert_eq!(buf, "hello world");
        assert_eq!(buf.as_bytes_with_nul(), b"hello world\0");
    }

    #[test]
    fn test_trim_left_right() {
        let mut left = StrBuf::from("xxabcxx");
        left.trim_left(b"x");
        assert_eq!(left, "abcxx");

        let mut right = StrBuf::from("xxabcxx");
        right.trim_right(b"x");
        assert_eq!(right, "xxabc");
    }

    #[test]
    fn test_trim_everything() {
        for side in [TrimSide::Left, TrimSide::Right, TrimSide::Both] {
            let mut buf = StrBuf::from("aaaa");
            buf.set_trimmed(b"a", side);
            assert!(buf.is_empty());
            assert_eq!(buf.as_bytes_with_nul(), b"\0");
        }
    }

    #[test]
    fn test_trim_empty_cut_set() {
        let mut buf = StrBuf::from("  padded  ");
        buf.trim(b"");
        assert_eq!(buf, "  padded  ");
    }

    #[test]
    fn test_trim_idempotent() {
        let mut once = StrBuf::from("..,a.b,..");
        once.trim(b".,");
        let mut twice = once.clone();
        twice.trim(b".,");
        assert_eq!(once, "a.b");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_reuses_storage() {
        let mut buf = StrBuf::from("  \t padded value \n ");
        let capacity = buf.capacity();
        let storage = buf.as_bytes_with_nul().as_ptr();

        buf.trim_whitespace();
        buf.trim_left(b"p");
        buf.trim_right(b"e");

        assert_eq!(buf, "added valu");
        assert_eq!(buf.capacity(), capacity);
        assert_eq!(buf.as_bytes_with_nul().as_ptr(), storage);
    }

    #[test]
    fn test_non_overlapping() {
        let kept: Vec<_> = non_overlapping(&[0, 1, 2, 3, 5], 2).collect();
        assert_eq!(kept, vec![0, 2, 5]);
    }
}
