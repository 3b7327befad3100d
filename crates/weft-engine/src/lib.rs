//! Deterministic trajectory evolution.
//!
//! [`evolve()`] advances a ring of cells under a rule table with toroidal
//! boundary conditions: every cell of a row is computed from the frozen
//! previous row, so the update is synchronous by construction. The engine
//! holds no random state of its own; the row generators in [`init`] take
//! their random source as an argument, making every run reproducible from
//! `(rule, initial row)` or `(rule, seed)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod evolve;
pub mod init;

pub use error::EvolveError;
pub use evolve::evolve;
pub use init::{bernoulli_row, covering_row, random_row};
