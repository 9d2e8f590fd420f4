use std::fmt;

#[derive(Debug)]
pub enum StructureError {
    UnmatchedOpen(usize),                         // '(' at this position was never closed
    UnmatchedClose(usize),                        // ')' at this position has no matching '('
    InvalidToken(String, String, usize),          // invalid token, source and position
    InvalidPair(usize, usize),                    // pair does not fit the structure length
    ConflictingPair(usize),                       // position paired more than once
    CrossingPair((usize, usize), (usize, usize)), // partially overlapping pairs
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::InvalidPair(i, j) => {
                write!(f, "Invalid base pair ({}, {})", i, j)
            }
            StructureError::ConflictingPair(i) => {
                write!(f, "Position {} is paired more than once", i)
            }
            StructureError::CrossingPair((i, j), (k, l)) => {
                write!(f, "Base pairs ({}, {}) and ({}, {}) are crossing", i, j, k, l)
            }
        }
    }
}

impl std::error::Error for StructureError {}
