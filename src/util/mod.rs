//! Internal utility functions and helpers.
//!
//! Fallible allocation helpers shared by the search tables and the buffer
//! rewrites. Not part of the public API.

use crate::error::BufError;

/// Allocates a table of `len` copies of `value`, reporting failure instead of
/// aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, BufError> {
    let mut table = Vec::new();
    table.try_reserve_exact(len)?;
    table.resize(len, value);
    Ok(table)
}

/// Pushes onto `vec`, reserving fallibly first.
pub(crate) fn try_push<T>(vec: &mut Vec<T>, value: T) -> Result<(), BufError> {
    vec.try_reserve(1)?;
    vec.push(value);
    Ok(())
}

/// Copies `data` followed by a NUL sentinel into fresh storage.
pub(crate) fn try_copy_with_nul(data: &[u8]) -> Result<Vec<u8>, BufError> {
    let mut out = Vec::new();
    out.try_reserve_exact(data.len() + 1)?;
    out.extend_from_slice(data);
    out.push(0);
    Ok(out)
}
