//! Rule identification from observed trajectories.
//!
//! [`identify()`] scans a trajectory once, recording the first next-state
//! observed for every neighborhood pattern and collecting every later
//! disagreement as a [`Conflict`]. Conflicts and unobserved patterns are
//! data, not failures: a trajectory from a noisy or non-deterministic
//! source still deserves a full report. [`identify_strict`] layers the
//! fail-fast policy on top for round-trip verification against a known
//! ground truth.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod identify;

pub use error::InferError;
pub use identify::{identify, identify_strict, Conflict, Identification};
