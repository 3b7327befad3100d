//! Weft: a rule-space engine for one-dimensional cellular automata.
//!
//! Weft explores the space of deterministic, memoryless 1-D cellular
//! automata. It enumerates local update rules for any neighborhood radius
//! and alphabet size, evolves a ring of cells under a rule with toroidal
//! boundary conditions, and identifies which rule produced an observed
//! space-time trajectory.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // Pick Wolfram's Rule 30 out of the elementary rule space.
//! let space = RuleSpace::elementary();
//! let table = space.table_at(&30u64.into()).unwrap();
//!
//! // Evolve a single seed on a 64-cell ring for 32 steps.
//! let mut initial = vec![0u8; 64];
//! initial[32] = 1;
//! let trajectory = evolve(&table, &initial, 32).unwrap();
//! assert_eq!(trajectory.steps(), 32);
//!
//! // Identify the rule back from a fully covered trajectory.
//! let hood = space.neighborhood();
//! let complete = evolve(&table, &covering_row(hood), 2).unwrap();
//! let recovered = identify_strict(&complete, hood).unwrap();
//! assert_eq!(recovered.index(), 30u64.into());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Geometry, pattern codec, trajectories, core errors |
//! | [`rules`] | `weft-rules` | Rule tables and the rule-space enumerator |
//! | [`engine`] | `weft-engine` | Synchronous evolution and row generators |
//! | [`infer`] | `weft-infer` | Rule identification from trajectories |
//! | [`store`] | `weft-store` | Binary persistence and artifact ids |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry, pattern codec, trajectories, and core errors (`weft-core`).
pub use weft_core as types;

/// Rule tables and the rule-space enumerator (`weft-rules`).
///
/// [`rules::RuleSpace`] maps arbitrary-precision rule indices to concrete
/// [`rules::RuleTable`]s and back.
pub use weft_rules as rules;

/// Synchronous evolution and initial-row generators (`weft-engine`).
pub use weft_engine as engine;

/// Rule identification from observed trajectories (`weft-infer`).
///
/// Lenient [`infer::identify()`] reports conflicts and gaps as data;
/// [`infer::identify_strict`] demands a total, conflict-free table.
pub use weft_infer as infer;

/// Binary persistence and artifact ids (`weft-store`).
pub use weft_store as store;

/// Common imports for typical Weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
pub mod prelude {
    // Geometry and trajectories
    pub use weft_core::{Neighborhood, Pattern, PatternKey, State, Trajectory};

    // Errors
    pub use weft_core::{NeighborhoodError, PatternError, TrajectoryError};
    pub use weft_engine::EvolveError;
    pub use weft_infer::InferError;
    pub use weft_rules::RuleError;
    pub use weft_store::StoreError;

    // Rules
    pub use weft_rules::{RuleSpace, RuleTable};

    // Engine
    pub use weft_engine::{bernoulli_row, covering_row, evolve, random_row};

    // Identification
    pub use weft_infer::{identify, identify_strict, Conflict, Identification};

    // Persistence
    pub use weft_store::{artifact_id, Store};
}
