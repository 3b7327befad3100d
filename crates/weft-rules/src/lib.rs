//! Rule tables and the rule-space enumerator.
//!
//! A rule table is a total function from every neighborhood pattern to a
//! next state. For geometry `(r, k)` there are `k^(2r+1)` patterns and
//! therefore `k^(k^(2r+1))` tables, doubly exponential in the radius.
//! [`RuleSpace`] indexes that space with arbitrary-precision integers and
//! maps an index to its table by direct mixed-radix digit decomposition,
//! without ever enumerating the space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod space;
pub mod table;

pub use error::RuleError;
pub use space::RuleSpace;
pub use table::RuleTable;
