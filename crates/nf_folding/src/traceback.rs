use nf_structure::Pair;
use nf_structure::PairList;

use crate::Base;
use crate::FoldingModel;
use crate::ScoreMatrix;

/// Recover one optimal pair list from a filled score matrix.
///
/// Candidates are tested in a fixed order, the first exact match wins:
/// i unpaired, j unpaired, (i, j) paired, then the leftmost bifurcation.
/// Ranges are processed from an explicit stack, so the depth of the
/// structure does not grow the call stack. The returned pairs are
/// sorted by their first index.
pub fn traceback<M: FoldingModel>(
    matrix: &ScoreMatrix,
    sequence: &[Base],
    model: &M,
) -> PairList {
    let n = sequence.len();
    assert_eq!(matrix.len(), n, "Score matrix does not match the sequence");

    let mut pairs = PairList::new(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    if n > 0 {
        stack.push((0, n - 1));
    }

    while let Some((i, j)) = stack.pop() {
        if i >= j {
            continue;
        }
        let score = matrix[(i, j)];

        if matrix[(i + 1, j)] == score {
            stack.push((i + 1, j));
        } else if matrix[(i, j - 1)] == score {
            stack.push((i, j - 1));
        } else if matrix[(i + 1, j - 1)] + model.can_pair(sequence[i], sequence[j]) as i32 == score {
            // A score above (i+1, j) means some pair inside i..=j passed
            // the loop length gate, and none of them is longer than (i, j).
            let pair = Pair::new(i, j);
            debug_assert!(pair.loop_length() >= model.min_loop_length());
            debug_assert!(model.can_pair(sequence[i], sequence[j]));
            pairs.push(pair);
            stack.push((i + 1, j - 1));
        } else {
            let k = (i + 1..j - 1)
                .find(|&k| matrix[(i, k)] + matrix[(k + 1, j)] == score)
                .unwrap_or_else(|| unreachable!("No decomposition of ({}, {}) matches its score", i, j));
            stack.push((k + 1, j));
            stack.push((i, k));
        }
    }

    pairs.sort();
    pairs
}
