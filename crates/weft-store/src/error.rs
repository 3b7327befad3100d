//! Error types for persistence.

use std::fmt;
use std::io;
use weft_core::TrajectoryError;
use weft_rules::RuleError;

/// Errors from encoding, decoding, or store access.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error during read or write.
    Io(io::Error),
    /// The record does not start with the `b"WEFT"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the record.
        found: u8,
    },
    /// The record tag does not match the expected record kind.
    WrongRecordKind {
        /// The tag expected for this decode call.
        expected: u8,
        /// The tag found in the record.
        found: u8,
    },
    /// Truncated or structurally corrupt record data.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The decoded states do not form a valid rule table.
    Rule(RuleError),
    /// The decoded cells do not form a valid trajectory.
    Trajectory(TrajectoryError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"WEFT\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::WrongRecordKind { expected, found } => {
                write!(f, "record tag {found}, expected {expected}")
            }
            Self::Malformed { detail } => write!(f, "malformed record: {detail}"),
            Self::Rule(e) => write!(f, "decoded rule table invalid: {e}"),
            Self::Trajectory(e) => write!(f, "decoded trajectory invalid: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Rule(e) => Some(e),
            Self::Trajectory(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<RuleError> for StoreError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<TrajectoryError> for StoreError {
    fn from(e: TrajectoryError) -> Self {
        Self::Trajectory(e)
    }
}
