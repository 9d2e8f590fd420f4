use log::debug;
use serde::{Serialize, Deserialize};

use nf_structure::DotBracketVec;
use nf_structure::PairList;

use crate::FoldingModel;
use crate::NucleotideVec;
use crate::Nussinov;
use crate::ScoreMatrix;
use crate::SequenceError;
use crate::traceback;

/// The result of folding one sequence. Owns its own matrix and pair
/// list, nothing is shared between foldings.
#[derive(Debug, Clone)]
pub struct Folding {
    sequence: NucleotideVec,
    min_loop_length: usize,
    matrix: ScoreMatrix,
    pairs: PairList,
    structure: DotBracketVec,
}

/// Validate `sequence` and fold it with the Nussinov model.
pub fn fold(sequence: &str, min_loop_length: usize) -> Result<Folding, SequenceError> {
    let sequence = NucleotideVec::try_from(sequence)?;
    Ok(Folding::new(sequence, &Nussinov::new(min_loop_length)))
}

impl Folding {
    pub fn new<M: FoldingModel>(sequence: NucleotideVec, model: &M) -> Self {
        let matrix = ScoreMatrix::fill(&sequence, model);
        let pairs = traceback(&matrix, &sequence, model);
        let structure = DotBracketVec::from(&pairs);
        debug!("{}\n{} ({} bp)", sequence, structure, pairs.len());

        Folding {
            sequence,
            min_loop_length: model.min_loop_length(),
            matrix,
            pairs,
            structure,
        }
    }

    pub fn sequence(&self) -> &NucleotideVec {
        &self.sequence
    }

    pub fn min_loop_length(&self) -> usize {
        self.min_loop_length
    }

    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    pub fn pairs(&self) -> &PairList {
        &self.pairs
    }

    pub fn structure(&self) -> &DotBracketVec {
        &self.structure
    }

    pub fn max_pairs(&self) -> usize {
        self.matrix.max_pairs()
    }

    pub fn to_serializable(&self) -> SerializableFolding {
        SerializableFolding {
            sequence: self.sequence.to_string(),
            structure: self.structure.to_string(),
            min_loop_length: self.min_loop_length,
            max_pairs: self.max_pairs(),
            pairs: self.pairs.iter().map(|&p| <(usize, usize)>::from(p)).collect(),
            matrix: self.matrix.rows(),
        }
    }
}

/// JSON form of a Folding. Pairs are 0-based, the matrix keeps its
/// unset cells as -1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableFolding {
    pub sequence: String,
    pub structure: String,
    pub min_loop_length: usize,
    pub max_pairs: usize,
    pub pairs: Vec<(usize, usize)>,
    pub matrix: Vec<Vec<i32>>,
}
