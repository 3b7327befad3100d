//! Generate a random rule, simulate it, and identify it back.
//!
//! Run with:
//!   cargo run --example identify_roundtrip

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weft_core::Neighborhood;
use weft_engine::{covering_row, evolve};
use weft_infer::identify_strict;
use weft_rules::RuleSpace;

fn main() {
    let hood = Neighborhood::new(2, 3).expect("valid geometry");
    let space = RuleSpace::new(hood);
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);

    let truth = space.random_table(&mut rng);
    println!("drew rule {} from a space of {} tables", truth.index(), space.size());

    // A covering row observes the whole table in a single transition.
    let trajectory = evolve(&truth, &covering_row(hood), 2).expect("valid row");
    let recovered = identify_strict(&trajectory, hood).expect("complete, conflict-free");

    println!("recovered rule {}", recovered.index());
    assert_eq!(recovered, truth);
    println!("round trip exact");
}
