//! Error types for rule tables and rule-space indexing.

use num_bigint::BigUint;
use std::fmt;
use weft_core::{PatternKey, State};

/// Errors from rule-table construction or rule-space indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rule index at or above the rule-space size.
    ///
    /// Indices are unsigned big integers, so the lower bound needs no
    /// checking: a negative index is unrepresentable.
    IndexOutOfRange {
        /// The offending index.
        index: BigUint,
        /// The rule-space size `k^(k^(2r+1))`.
        size: BigUint,
    },
    /// A next-state list whose length differs from the pattern count.
    LengthMismatch {
        /// The pattern count of the geometry.
        expected: u64,
        /// The length of the offending list.
        got: usize,
    },
    /// A next-state outside the alphabet.
    StateOutOfRange {
        /// The pattern key the state was assigned to.
        key: PatternKey,
        /// The offending state.
        state: State,
        /// The alphabet size.
        states: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "rule index {index} outside 0..{size}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "rule table has {got} entries, geometry needs {expected}")
            }
            Self::StateOutOfRange { key, state, states } => {
                write!(
                    f,
                    "next state {state} for pattern {key} outside alphabet 0..{states}"
                )
            }
        }
    }
}

impl std::error::Error for RuleError {}
