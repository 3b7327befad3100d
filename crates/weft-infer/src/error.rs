//! Error types for rule identification.

use crate::identify::Conflict;
use std::fmt;
use weft_core::{PatternKey, State};
use weft_rules::RuleError;

/// Errors from identification.
///
/// The lenient [`identify`](crate::identify()) fails only on malformed
/// input; the `RuleConflict` and `IncompleteObservation` variants are
/// produced by the strict path, which turns reported data back into
/// failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InferError {
    /// The trajectory is narrower than the neighborhood span.
    TooNarrow {
        /// Width of the trajectory.
        width: usize,
        /// The neighborhood span `2r+1`.
        span: usize,
    },
    /// The trajectory has no transitions to observe.
    TooFewRows {
        /// Number of rows in the trajectory.
        steps: usize,
    },
    /// A trajectory cell lies outside the alphabet.
    CellOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The offending state.
        state: State,
        /// The alphabet size.
        states: u8,
    },
    /// Strict mode: some pattern was observed mapping to two or more
    /// distinct next states.
    RuleConflict {
        /// Every conflicting pattern, with all disagreeing states.
        conflicts: Vec<Conflict>,
    },
    /// Strict mode: some patterns were never observed, so their next
    /// states are undetermined.
    IncompleteObservation {
        /// The unobserved pattern keys, ascending.
        missing: Vec<PatternKey>,
    },
    /// The recovered states were rejected at table construction.
    Rule(RuleError),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooNarrow { width, span } => {
                write!(
                    f,
                    "trajectory of width {width} narrower than neighborhood span {span}"
                )
            }
            Self::TooFewRows { steps } => {
                write!(f, "trajectory of {steps} row(s) has no transitions")
            }
            Self::CellOutOfRange {
                row,
                col,
                state,
                states,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) holds state {state} outside alphabet 0..{states}"
                )
            }
            Self::RuleConflict { conflicts } => {
                write!(f, "observations conflict for {} pattern(s)", conflicts.len())
            }
            Self::IncompleteObservation { missing } => {
                write!(f, "{} pattern(s) were never observed", missing.len())
            }
            Self::Rule(e) => write!(f, "recovered table rejected: {e}"),
        }
    }
}

impl std::error::Error for InferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for InferError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
