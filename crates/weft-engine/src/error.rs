//! Error types for trajectory evolution.

use std::fmt;
use weft_core::State;

/// Errors from [`evolve`](crate::evolve()) input validation.
///
/// Evolution fails fast: the initial row is checked once, before any row
/// is computed, and the simulation itself cannot fail afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolveError {
    /// A trajectory must contain at least its initial row.
    ZeroSteps,
    /// The ring must be at least as wide as the neighborhood span, or the
    /// cyclic window around a cell is not well-defined.
    RowTooShort {
        /// Width of the offending row.
        len: usize,
        /// The neighborhood span `2r+1`.
        span: usize,
    },
    /// An initial-row cell lies outside the rule's alphabet.
    StateOutOfRange {
        /// Position of the offending cell.
        position: usize,
        /// The offending state.
        state: State,
        /// The alphabet size.
        states: u8,
    },
}

impl fmt::Display for EvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "trajectory needs at least one step"),
            Self::RowTooShort { len, span } => {
                write!(f, "row of {len} cells narrower than neighborhood span {span}")
            }
            Self::StateOutOfRange {
                position,
                state,
                states,
            } => {
                write!(
                    f,
                    "cell {position} holds state {state} outside alphabet 0..{states}"
                )
            }
        }
    }
}

impl std::error::Error for EvolveError {}
