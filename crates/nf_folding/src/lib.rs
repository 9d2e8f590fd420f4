//! The nf_folding crate.
//!
//! Predicts the secondary structure of a single RNA strand by maximizing
//! the number of non-crossing base pairs (Nussinov). Provides:
//!  - sequence validation (Base, NucleotideVec),
//!  - the score matrix fill,
//!  - traceback of one optimal pair list,
//!  - the Folding pipeline and its serializable form.
//!

/// Base, NucleotideVec, PairTypeRNA, ....
mod nucleotides;

/// The folding model trait.
mod folding_model;

mod score_matrix;
mod traceback;
mod folding;

pub use nucleotides::*;
pub use folding_model::*;
pub use score_matrix::*;
pub use traceback::*;
pub use folding::*;
