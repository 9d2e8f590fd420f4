//! Single-stranded secondary structure representations.
//!
//!  - `PairList`: the sorted set of base pairs (i, j), 0-based.
//!  - `PairTable`: pairing partner per position.
//!  - `DotBracketVec`: the '(', ')', '.' encoding.
//!
//! Conversions into `PairTable` are checked: anything that is not a
//! nested or disjoint set of pairs is rejected with a `StructureError`.

mod error;
mod dotbracket;
mod pair_table;
mod pair_list;

pub use error::*;
pub use dotbracket::*;
pub use pair_table::*;
pub use pair_list::*;
