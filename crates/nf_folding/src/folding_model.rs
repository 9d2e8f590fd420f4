use crate::Base;
use crate::PairTypeRNA;

/// Decides which base pairs the score matrix may use.
pub trait FoldingModel {
    fn can_pair(&self, b1: Base, b2: Base) -> bool;

    /// Minimal number of unpaired positions enclosed by a pair.
    fn min_loop_length(&self) -> usize;

    /// Whether positions i < j may close a base pair on this sequence.
    fn allows_pair(&self, sequence: &[Base], i: usize, j: usize) -> bool {
        i < j
            && self.min_loop_length() < j - i
            && self.can_pair(sequence[i], sequence[j])
    }
}

/// Canonical pairs (AU, CG) and GU wobble pairs, each counting one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nussinov {
    min_loop_length: usize,
}

impl Nussinov {
    pub fn new(min_loop_length: usize) -> Self {
        Nussinov { min_loop_length }
    }
}

impl FoldingModel for Nussinov {
    fn can_pair(&self, b1: Base, b2: Base) -> bool {
        PairTypeRNA::from((b1, b2)).can_pair()
    }

    fn min_loop_length(&self) -> usize {
        self.min_loop_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    struct MockFoldingModel;

    impl FoldingModel for MockFoldingModel {
        fn can_pair(&self, b1: Base, b2: Base) -> bool {
            matches!((b1, b2), (A, U) | (U, A) | (C, G) | (G, C))
        }

        fn min_loop_length(&self) -> usize {
            3
        }
    }

    #[test]
    fn test_can_pair() {
        let model = Nussinov::default();
        assert!(model.can_pair(A, U));
        assert!(model.can_pair(U, G));
        assert!(!model.can_pair(A, G));
        assert!(!model.can_pair(C, C));

        let mock = MockFoldingModel;
        assert!(!mock.can_pair(G, U));
    }

    #[test]
    fn test_allows_pair_respects_loop_length() {
        let seq = [G, A, A, A, C, C];
        let model = Nussinov::new(3);
        assert!(!model.allows_pair(&seq, 0, 3)); // G-A
        assert!(model.allows_pair(&seq, 0, 4));  // 3 unpaired in between
        assert!(!Nussinov::new(4).allows_pair(&seq, 0, 4));
        assert!(Nussinov::new(0).allows_pair(&seq, 0, 4));
    }

    #[test]
    fn test_allows_pair_with_huge_loop_length() {
        let seq = [G, A, A, A, C, C];
        assert!(!Nussinov::new(usize::MAX).allows_pair(&seq, 0, 5));
        assert!(!Nussinov::new(usize::MAX - 1).allows_pair(&seq, 1, 5));
        assert!(!Nussinov::new(0).allows_pair(&seq, 4, 4));
    }

    #[test]
    fn test_default_trait_method_on_mock() {
        let seq = [G, A, A, A, U, C];
        let mock = MockFoldingModel;
        assert!(mock.allows_pair(&seq, 0, 5));
        assert!(!mock.allows_pair(&seq, 0, 4)); // G-U is not allowed here
        assert!(!mock.allows_pair(&seq, 1, 4)); // loop too short
    }
}
