//! Key-path handling for document navigation.
//!
//! A key path is a dot-delimited string such as `first.second.third`. Each
//! segment is an exact mapping key; there is no escape mechanism, so a
//! mapping key that itself contains a literal `.` is not addressable, and
//! sequences cannot be indexed into.

use super::error::Error;

/// Split a key path into its segments.
///
/// An empty path is rejected with [`Error::EmptyKey`]. Consecutive or
/// leading/trailing dots yield empty-string segments, which match only
/// empty-string mapping keys.
pub fn split_key(key: &str) -> Result<Vec<&str>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    Ok(key.split('.').collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
