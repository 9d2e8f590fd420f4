//! # nussfold
//!
//! Unified API for base-pair maximization folding of RNA sequences.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod folding_parsers;

pub mod structure {
    pub use ::nf_structure::*;
}

pub mod folding {
    pub use ::nf_folding::*;
}

/// A position ruler for sequences of length `len`: a digit every ten
/// positions (tens, starting at 0), ',' at every fifth and '.' elsewhere.
pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut i = 0;
    while i < len {
        if i % 10 == 0 {
            let mark = (i / 10).to_string();
            // A multi-digit mark covers the following positions.
            let width = mark.len().min(len - i);
            s.push_str(&mark[..width]);
            i += width;
        } else {
            s.push(if i % 10 == 5 { ',' } else { '.' });
            i += 1;
        }
    }
    s
}
