//! Neighborhood geometry and the pattern codec.
//!
//! A [`Neighborhood`] fixes the two parameters of a rule space: the radius
//! `r` (cells considered on each side of a cell) and the alphabet size `k`.
//! It owns the bijection between neighborhood windows and [`PatternKey`]s:
//! a window is read as a base-`k` numeral, leftmost cell most significant.
//! Keys are collision-free for any alphabet size, unlike digit-string
//! concatenation, which goes ambiguous from `k = 10` onward.

use crate::error::{NeighborhoodError, PatternError};
use crate::key::{PatternKey, State};
use smallvec::SmallVec;

/// A neighborhood window: `2r+1` cell states, leftmost first.
///
/// Order is significant: `[0, 1, 0]` and `[1, 0, 0]` are distinct patterns.
pub type Pattern = SmallVec<[State; 8]>;

/// Neighborhood geometry: radius and alphabet size, fixed per engine
/// instance.
///
/// # Examples
///
/// ```
/// use weft_core::Neighborhood;
///
/// let hood = Neighborhood::new(1, 2).unwrap();
/// assert_eq!(hood.span(), 3);
/// assert_eq!(hood.pattern_count(), 8);
///
/// // `encode` and `decode` are mutual inverses.
/// let key = hood.encode(&[1, 0, 1]).unwrap();
/// assert_eq!(key.0, 5);
/// assert_eq!(hood.decode(key).unwrap().as_slice(), &[1, 0, 1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    radius: u32,
    states: u8,
    count: u64,
}

impl Neighborhood {
    /// Create a geometry with the given radius and alphabet size.
    ///
    /// # Errors
    ///
    /// Returns [`NeighborhoodError::ZeroRadius`] if `radius == 0`,
    /// [`NeighborhoodError::AlphabetTooSmall`] if `states < 2`, and
    /// [`NeighborhoodError::PatternCountOverflow`] if `states^(2*radius+1)`
    /// does not fit in `u64` (such a geometry admits no materializable rule
    /// table).
    pub fn new(radius: u32, states: u8) -> Result<Self, NeighborhoodError> {
        if radius == 0 {
            return Err(NeighborhoodError::ZeroRadius);
        }
        if states < 2 {
            return Err(NeighborhoodError::AlphabetTooSmall { states });
        }
        let span = 2 * radius as u64 + 1;
        let mut count: u64 = 1;
        for _ in 0..span {
            count = count
                .checked_mul(states as u64)
                .ok_or(NeighborhoodError::PatternCountOverflow { radius, states })?;
        }
        Ok(Self {
            radius,
            states,
            count,
        })
    }

    /// The elementary geometry: radius 1 over a binary alphabet.
    ///
    /// Rule indices over this geometry are the classical 8-bit Wolfram
    /// codes.
    pub fn elementary() -> Self {
        Self {
            radius: 1,
            states: 2,
            count: 8,
        }
    }

    /// Number of neighbor cells on each side of a cell.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Alphabet size: valid states are `0..states()`.
    pub fn states(&self) -> u8 {
        self.states
    }

    /// Window length `2r+1`.
    pub fn span(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// Number of distinct patterns, `k^(2r+1)`.
    pub fn pattern_count(&self) -> u64 {
        self.count
    }

    /// Encode a window as its canonical base-`k` pattern key.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::LengthMismatch`] if `window.len() != span`,
    /// or [`PatternError::StateOutOfRange`] if any cell is outside the
    /// alphabet.
    pub fn encode(&self, window: &[State]) -> Result<PatternKey, PatternError> {
        if window.len() != self.span() {
            return Err(PatternError::LengthMismatch {
                expected: self.span(),
                got: window.len(),
            });
        }
        let mut key: u64 = 0;
        for &state in window {
            if state >= self.states {
                return Err(PatternError::StateOutOfRange {
                    state,
                    states: self.states,
                });
            }
            key = key * self.states as u64 + state as u64;
        }
        Ok(PatternKey(key))
    }

    /// Decode a pattern key back into its window.
    ///
    /// Mutual inverse of [`encode`](Self::encode) for this geometry.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::KeyOutOfRange`] if `key` is at or above
    /// [`pattern_count`](Self::pattern_count).
    pub fn decode(&self, key: PatternKey) -> Result<Pattern, PatternError> {
        if key.0 >= self.count {
            return Err(PatternError::KeyOutOfRange {
                key: key.0,
                count: self.count,
            });
        }
        let mut pattern = Pattern::from_elem(0, self.span());
        let mut rest = key.0;
        for slot in pattern.iter_mut().rev() {
            *slot = (rest % self.states as u64) as State;
            rest /= self.states as u64;
        }
        Ok(pattern)
    }

    /// The `2r+1` cells of `row` centered at `center`, positions taken
    /// modulo `row.len()` (toroidal wraparound).
    ///
    /// Both the simulator and the identifier build windows through this
    /// geometry, so the boundary convention cannot drift between them.
    /// `row` must be at least `span` cells wide and `center` within it;
    /// callers validate both before entering their scan loops.
    pub fn window(&self, row: &[State], center: usize) -> Pattern {
        debug_assert!(row.len() >= self.span());
        debug_assert!(center < row.len());
        let len = row.len();
        let radius = self.radius as usize;
        let mut pattern = Pattern::with_capacity(self.span());
        for offset in 0..self.span() {
            pattern.push(row[(center + len - radius + offset) % len]);
        }
        pattern
    }

    /// Pattern key of the window centered at `center`, without
    /// materializing the window.
    ///
    /// Hot-loop variant of `encode(window(row, center))`. The row must
    /// already be alphabet-validated; both scan loops in the simulator and
    /// the identifier check their input once up front.
    pub fn window_key(&self, row: &[State], center: usize) -> PatternKey {
        debug_assert!(row.len() >= self.span());
        debug_assert!(center < row.len());
        let len = row.len();
        let radius = self.radius as usize;
        let mut key: u64 = 0;
        for offset in 0..self.span() {
            let state = row[(center + len - radius + offset) % len];
            debug_assert!(state < self.states);
            key = key * self.states as u64 + state as u64;
        }
        PatternKey(key)
    }

    /// All pattern keys in canonical ascending order.
    pub fn keys(&self) -> impl Iterator<Item = PatternKey> {
        (0..self.count).map(PatternKey)
    }
}
