//! Test fixtures and helpers shared across the Weft workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    elementary_table, elementary_table_from_bits, rng, CLASSIC_WOLFRAM_CODES,
};
