//! Reusable fixtures: seeded RNGs and classical elementary-CA tables.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weft_core::Neighborhood;
use weft_rules::{RuleSpace, RuleTable};

/// Historical Wolfram codes with well-known trajectories, used to pin the
/// digit order of the generalized indexer against the classical scheme.
pub const CLASSIC_WOLFRAM_CODES: [u64; 5] = [4, 85, 120, 173, 252];

/// A deterministic RNG for tests. Distinct seeds give independent
/// streams; equal seeds give identical ones.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The elementary (radius 1, binary) rule table for a classical Wolfram
/// code.
///
/// # Panics
///
/// Panics if `code > 255`.
pub fn elementary_table(code: u64) -> RuleTable {
    RuleSpace::elementary()
        .table_at(&code.into())
        .expect("elementary codes are 0..=255")
}

/// Build an elementary table from the classical 8-entry form, where
/// `bits[0]` is the next state for window `111` and `bits[7]` for `000`.
///
/// The historical notation lists entries in descending window order; this
/// converts into canonical ascending key order for comparison against the
/// generalized indexer.
pub fn elementary_table_from_bits(bits: [u8; 8]) -> RuleTable {
    let mut next = vec![0; 8];
    for (position, &bit) in bits.iter().enumerate() {
        next[7 - position] = bit;
    }
    RuleTable::from_states(Neighborhood::elementary(), next).expect("binary entries")
}
