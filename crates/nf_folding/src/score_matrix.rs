use std::fmt;
use std::ops::Index;

use log::debug;
use ndarray::Array2;

use crate::Base;
use crate::FoldingModel;

/// Cells below the first sub-diagonal are never read and keep this value.
pub const UNSET: i32 = -1;

/// The Nussinov DP matrix: entry (i, j) is the maximum number of
/// non-crossing base pairs on the subsequence i..=j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix(Array2<i32>);

impl ScoreMatrix {
    /// A matrix with the base cases (i, i) and (i, i-1) set to 0.
    pub fn new(n: usize) -> Self {
        let mut m = Array2::from_elem((n, n), UNSET);
        for i in 0..n {
            m[(i, i)] = 0;
            if i > 0 {
                m[(i, i - 1)] = 0;
            }
        }
        ScoreMatrix(m)
    }

    /// Fill the matrix diagonal by diagonal, so that every subspan is
    /// final before a larger span reads it.
    pub fn fill<M: FoldingModel>(sequence: &[Base], model: &M) -> Self {
        let n = sequence.len();
        let mut matrix = Self::new(n);
        let m = &mut matrix.0;

        for t in 1..n {
            for i in 0..n - t {
                let j = i + t;

                let unpaired_i = m[(i + 1, j)];
                let unpaired_j = m[(i, j - 1)];
                let paired = if model.allows_pair(sequence, i, j) {
                    m[(i + 1, j - 1)] + 1
                } else {
                    0
                };
                let mut bifurcation = 0;
                for k in i..j - 1 {
                    bifurcation = bifurcation.max(m[(i, k)] + m[(k + 1, j)]);
                }

                m[(i, j)] = unpaired_i.max(unpaired_j).max(paired).max(bifurcation);
            }
        }
        debug!("Filled {}x{} score matrix (L = {}): {} base pairs",
            n, n, model.min_loop_length(), matrix.max_pairs());
        matrix
    }

    /// Sequence length.
    pub fn len(&self) -> usize {
        self.0.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The optimal score of the full sequence.
    pub fn max_pairs(&self) -> usize {
        match self.len() {
            0 => 0,
            n => self.0[(0, n - 1)] as usize,
        }
    }

    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.0.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for ScoreMatrix {
    type Output = i32;

    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.0[idx]
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = format!("{}", self.max_pairs()).len().max(2);
        for row in self.0.rows() {
            let cells: Vec<String> = row.iter()
                .map(|&v| if v == UNSET {
                    format!("{:>width$}", "-")
                } else {
                    format!("{:>width$}", v)
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
