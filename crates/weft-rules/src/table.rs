//! Immutable rule tables.

use crate::error::RuleError;
use num_bigint::BigUint;
use num_traits::Zero;
use weft_core::{Neighborhood, PatternKey, State};

/// A total mapping from every pattern key of a neighborhood to a next
/// state.
///
/// Tables are immutable once constructed, so they can be shared read-only
/// across threads or simulation runs. They are created by
/// [`RuleSpace`](crate::RuleSpace) (from a rule index or a random source),
/// recovered by identification, or decoded from persistence; all three
/// paths funnel through [`from_states`](Self::from_states)-equivalent
/// validation.
///
/// # Examples
///
/// ```
/// use weft_rules::RuleSpace;
///
/// // Wolfram's Rule 110 as a table, and back to its index.
/// let space = RuleSpace::elementary();
/// let table = space.table_at(&110u64.into()).unwrap();
/// assert_eq!(table.index(), 110u64.into());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    hood: Neighborhood,
    next: Box<[State]>,
}

impl RuleTable {
    /// Build a table from next-states listed in canonical key order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::LengthMismatch`] if `next.len()` differs from
    /// the geometry's pattern count, or [`RuleError::StateOutOfRange`] if
    /// any entry lies outside the alphabet.
    pub fn from_states(hood: Neighborhood, next: Vec<State>) -> Result<Self, RuleError> {
        if next.len() as u64 != hood.pattern_count() {
            return Err(RuleError::LengthMismatch {
                expected: hood.pattern_count(),
                got: next.len(),
            });
        }
        for (position, &state) in next.iter().enumerate() {
            if state >= hood.states() {
                return Err(RuleError::StateOutOfRange {
                    key: PatternKey(position as u64),
                    state,
                    states: hood.states(),
                });
            }
        }
        Ok(Self {
            hood,
            next: next.into_boxed_slice(),
        })
    }

    /// Internal constructor for states already known to be valid.
    pub(crate) fn from_states_unchecked(hood: Neighborhood, next: Vec<State>) -> Self {
        debug_assert_eq!(next.len() as u64, hood.pattern_count());
        debug_assert!(next.iter().all(|&s| s < hood.states()));
        Self {
            hood,
            next: next.into_boxed_slice(),
        }
    }

    /// The geometry this table is total over.
    pub fn neighborhood(&self) -> Neighborhood {
        self.hood
    }

    /// Number of entries, `k^(2r+1)`.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Always `false`: every geometry has at least `2^3` patterns.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Next state assigned to `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a valid pattern key for this table's
    /// geometry. Keys produced by the same [`Neighborhood`] are always
    /// valid.
    pub fn next_state(&self, key: PatternKey) -> State {
        self.next[key.0 as usize]
    }

    /// Next state assigned to `key`, or `None` for a foreign key.
    pub fn get(&self, key: PatternKey) -> Option<State> {
        self.next.get(key.0 as usize).copied()
    }

    /// Next-states in canonical key order.
    pub fn states(&self) -> &[State] {
        &self.next
    }

    /// Iterator over `(key, next state)` pairs in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternKey, State)> + '_ {
        self.next
            .iter()
            .enumerate()
            .map(|(position, &state)| (PatternKey(position as u64), state))
    }

    /// The table's rule index: the mixed-radix recomposition
    /// `Σ next[p] · k^p` over all pattern keys `p`.
    ///
    /// Inverse of [`RuleSpace::table_at`](crate::RuleSpace::table_at). For
    /// the elementary geometry this is the classical Wolfram code.
    pub fn index(&self) -> BigUint {
        let base = BigUint::from(self.hood.states());
        let mut index = BigUint::zero();
        for &state in self.next.iter().rev() {
            index = index * &base + BigUint::from(state);
        }
        index
    }
}
