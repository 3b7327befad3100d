//! Core types for the Weft rule-space engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! neighborhood geometry and pattern codec shared by the simulator and the
//! identifier, the immutable space-time [`Trajectory`], and the core error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod key;
pub mod neighborhood;
pub mod trajectory;

pub use error::{NeighborhoodError, PatternError, TrajectoryError};
pub use key::{PatternKey, State};
pub use neighborhood::{Neighborhood, Pattern};
pub use trajectory::Trajectory;
