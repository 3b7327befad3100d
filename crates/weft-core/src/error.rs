//! Error types for geometry, pattern, and trajectory construction.
//!
//! One enum per subsystem. All variants carry enough context to report the
//! offending value without re-deriving it at the call site.

use crate::key::State;
use std::fmt;

/// Errors from [`Neighborhood`](crate::Neighborhood) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborhoodError {
    /// The radius must be at least 1; a radius-0 cell has no neighbors.
    ZeroRadius,
    /// The alphabet must have at least two states.
    AlphabetTooSmall {
        /// The offending alphabet size.
        states: u8,
    },
    /// `k^(2r+1)` does not fit in `u64`, so a dense rule table over this
    /// geometry could never be materialized.
    PatternCountOverflow {
        /// The requested radius.
        radius: u32,
        /// The requested alphabet size.
        states: u8,
    },
}

impl fmt::Display for NeighborhoodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRadius => write!(f, "neighborhood radius must be at least 1"),
            Self::AlphabetTooSmall { states } => {
                write!(f, "alphabet must have at least 2 states, got {states}")
            }
            Self::PatternCountOverflow { radius, states } => {
                write!(
                    f,
                    "pattern count {states}^(2*{radius}+1) does not fit in u64"
                )
            }
        }
    }
}

impl std::error::Error for NeighborhoodError {}

/// Errors from encoding or decoding neighborhood patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The window length differs from the neighborhood span `2r+1`.
    LengthMismatch {
        /// The span required by the geometry.
        expected: usize,
        /// The length of the offending window.
        got: usize,
    },
    /// A cell state lies outside the alphabet `0..states`.
    StateOutOfRange {
        /// The offending state.
        state: State,
        /// The alphabet size.
        states: u8,
    },
    /// A key has no pattern: it is at or above the pattern count for this
    /// geometry.
    KeyOutOfRange {
        /// The offending key value.
        key: u64,
        /// The number of valid keys.
        count: u64,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "window has {got} cells, neighborhood span is {expected}")
            }
            Self::StateOutOfRange { state, states } => {
                write!(f, "state {state} outside alphabet 0..{states}")
            }
            Self::KeyOutOfRange { key, count } => {
                write!(f, "pattern key {key} outside 0..{count}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Errors from [`Trajectory`](crate::Trajectory) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrajectoryError {
    /// A trajectory must contain at least one row.
    Empty,
    /// Rows must contain at least one cell.
    ZeroWidth,
    /// A row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
    /// A flat buffer's length is not a multiple of the declared width.
    NotRectangular {
        /// Length of the flat buffer.
        len: usize,
        /// The declared width.
        width: usize,
    },
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "trajectory must contain at least one row"),
            Self::ZeroWidth => write!(f, "trajectory rows must contain at least one cell"),
            Self::Ragged { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::NotRectangular { len, width } => {
                write!(f, "buffer of {len} cells is not a multiple of width {width}")
            }
        }
    }
}

impl std::error::Error for TrajectoryError {}
