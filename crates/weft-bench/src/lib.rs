//! Benchmark profiles for the Weft rule-space engine.
//!
//! Pre-built geometries, tables, and rows shared by the criterion
//! benches, all seeded for run-to-run comparability.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use weft_core::{Neighborhood, State};
use weft_engine::random_row;
use weft_rules::{RuleSpace, RuleTable};
use weft_test_utils::rng;

/// Reference geometry: radius 2 over three states, 243 patterns.
pub fn reference_geometry() -> Neighborhood {
    Neighborhood::new(2, 3).expect("static geometry")
}

/// A seeded random table over the reference geometry.
pub fn reference_table(seed: u64) -> RuleTable {
    RuleSpace::new(reference_geometry()).random_table(&mut rng(seed))
}

/// A seeded random row of `width` cells over the reference geometry.
pub fn reference_row(width: usize, seed: u64) -> Vec<State> {
    random_row(reference_geometry(), width, &mut rng(seed))
}
