//! Pair and PairList definitions.
//!
//! Unlike the 1-based pair lists used for exchange with other tools,
//! these are 0-based: a pair (i, j) indexes directly into the sequence.
//! A PairList does not check for crossing pairs on construction, use
//! `PairList::is_non_crossing` (or convert into a `PairTable`) for that.

use std::ops::Deref;

use crate::PairTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair { i: usize, j: usize }

impl Pair {
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    pub fn i(&self) -> usize {
        self.i
    }

    pub fn j(&self) -> usize {
        self.j
    }

    /// Number of unpaired positions enclosed by this pair.
    pub fn loop_length(&self) -> usize {
        self.j - self.i - 1
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.i, pair.j)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    /// An empty pair list for a sequence of the given length.
    pub fn new(length: usize) -> Self {
        PairList { length, pairs: Vec::new() }
    }

    /// Length of the underlying sequence (not the number of pairs).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn push(&mut self, pair: Pair) {
        assert!(pair.j < self.length, "Pair ({}, {}) exceeds length {}",
            pair.i, pair.j, self.length);
        self.pairs.push(pair);
    }

    /// Sort by first index.
    pub fn sort(&mut self) {
        self.pairs.sort_unstable();
    }

    pub fn is_non_crossing(&self) -> bool {
        PairTable::try_from(self).is_ok()
    }
}

impl Deref for PairList {
    type Target = [Pair];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}

impl From<&PairTable> for PairList {
    fn from(pt: &PairTable) -> Self {
        let pairs = pt.iter().enumerate()
            .filter_map(|(i, &partner)| match partner {
                Some(j) if j > i => Some(Pair::new(i, j)),
                _ => None,
            })
            .collect();
        PairList {
            length: pt.len(),
            pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_list_from_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        let pl = PairList::from(&pt);

        assert_eq!(pl.length(), 6);
        assert_eq!(pl.pairs(), &[Pair::new(0, 5), Pair::new(1, 4)]);
    }

    #[test]
    fn test_sort_by_first_index() {
        let mut pl = PairList::new(10);
        pl.push(Pair::new(5, 9));
        pl.push(Pair::new(0, 3));
        pl.push(Pair::new(1, 2));
        pl.sort();
        let tuples: Vec<(usize, usize)> = pl.iter().map(|&p| <(usize, usize)>::from(p)).collect();
        assert_eq!(tuples, vec![(0, 3), (1, 2), (5, 9)]);
    }

    #[test]
    fn test_loop_length() {
        assert_eq!(Pair::new(2, 3).loop_length(), 0);
        assert_eq!(Pair::new(0, 9).loop_length(), 8);
    }

    #[test]
    fn test_non_crossing() {
        let mut nested = PairList::new(8);
        nested.push(Pair::new(0, 7));
        nested.push(Pair::new(1, 3));
        nested.push(Pair::new(4, 6));
        assert!(nested.is_non_crossing());

        let mut crossing = PairList::new(8);
        crossing.push(Pair::new(0, 4));
        crossing.push(Pair::new(2, 6));
        assert!(!crossing.is_non_crossing());
    }

    #[test]
    #[should_panic(expected = "exceeds length")]
    fn test_push_out_of_bounds() {
        let mut pl = PairList::new(4);
        pl.push(Pair::new(0, 4));
    }
}
