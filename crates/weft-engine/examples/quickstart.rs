//! Weft quickstart: index a rule, evolve it, print the result.
//!
//! Demonstrates:
//!   1. Picking a rule table out of the elementary rule space by index
//!   2. Seeding a ring with a single live cell
//!   3. Evolving it and rendering the space-time diagram as text
//!
//! Run with:
//!   cargo run --example quickstart

use weft_engine::evolve;
use weft_rules::RuleSpace;

const WIDTH: usize = 64;
const STEPS: usize = 32;

fn main() {
    // Rule 110: Turing-complete from a three-cell window.
    let space = RuleSpace::elementary();
    let table = space.table_at(&110u64.into()).expect("110 < 256");

    let mut initial = vec![0u8; WIDTH];
    initial[WIDTH / 2] = 1;

    let trajectory = evolve(&table, &initial, STEPS).expect("valid initial row");

    println!("rule {} of {} tables\n", table.index(), space.size());
    for row in trajectory.rows() {
        let line: String = row.iter().map(|&s| if s == 0 { '.' } else { '#' }).collect();
        println!("{line}");
    }
}
