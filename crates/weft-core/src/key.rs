//! Strongly-typed pattern keys and the [`State`] alias.

use std::fmt;

/// A single cell state.
///
/// States are small unsigned integers in `0..k` for an alphabet of size
/// `k`; the bound itself lives in [`Neighborhood`](crate::Neighborhood).
pub type State = u8;

/// Canonical integer encoding of a neighborhood window.
///
/// For a fixed geometry `(r, k)` the key is the window read as a base-`k`
/// numeral with the leftmost cell as the most-significant digit. Keys are
/// dense (they range over `0..pattern_count`), which makes them usable as
/// direct indices into rule tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(pub u64);

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PatternKey {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
