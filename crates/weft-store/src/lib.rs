//! Binary persistence for rule tables and trajectories.
//!
//! The format is intentionally simple: magic bytes, a version byte, a
//! record tag, then little-endian integers with length-prefixed payloads.
//! No compression, no alignment padding, no self-describing schema. The
//! codec is generic over `Read`/`Write`, so tests run against byte
//! buffers and production code against files through [`Store`].
//!
//! Round trips are lossless: a decoded table or trajectory compares equal
//! to what was encoded, including geometry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod id;
pub mod store;

pub use codec::{decode_table, decode_trajectory, encode_table, encode_trajectory};
pub use error::StoreError;
pub use id::artifact_id;
pub use store::Store;

/// File magic for all Weft records.
pub const MAGIC: [u8; 4] = *b"WEFT";

/// Current format version.
pub const FORMAT_VERSION: u8 = 1;
