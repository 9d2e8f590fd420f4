use clap::Args;
use anyhow::Result;
use anyhow::bail;
use log::debug;

use nf_folding::Folding;
use nf_folding::NucleotideVec;
use nf_folding::Nussinov;

use crate::input_parsers::SequenceRecord;

/// Base-pair maximization parameters.
#[derive(Debug, Args)]
pub struct FoldingArguments {
    /// Minimal number of unpaired nucleotides enclosed by a base pair
    #[arg(short = 'l', long, default_value_t = 0)]
    pub min_loop_length: usize,

    /// Reject sequences longer than this (folding takes cubic time)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

impl FoldingArguments {
    pub fn build_model(&self) -> Nussinov {
        debug!("Minimal loop length: {}", self.min_loop_length);
        Nussinov::new(self.min_loop_length)
    }

    /// Validate one record and fold it.
    pub fn fold_record(&self, record: &SequenceRecord, model: &Nussinov) -> Result<Folding> {
        let sequence = NucleotideVec::try_from(record.sequence.as_str())?;
        if let Some(max) = self.max_length {
            if sequence.len() > max {
                bail!("Sequence length {} exceeds the limit of {} nucleotides", sequence.len(), max);
            }
        }
        Ok(Folding::new(sequence, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_folding::SequenceError;

    fn record(seq: &str) -> SequenceRecord {
        SequenceRecord { header: None, sequence: seq.into() }
    }

    #[test]
    fn test_fold_record() {
        let args = FoldingArguments { min_loop_length: 3, max_length: None };
        let model = args.build_model();
        let folding = args.fold_record(&record("GGGAAAUCCC"), &model).unwrap();
        assert_eq!(folding.structure().to_string(), "(((...))).");
    }

    #[test]
    fn test_fold_record_invalid() {
        let args = FoldingArguments { min_loop_length: 0, max_length: None };
        let model = args.build_model();
        let err = args.fold_record(&record("ACGT"), &model).unwrap_err();
        assert!(matches!(err.downcast_ref::<SequenceError>(), Some(SequenceError::InvalidLength(_, 4))));
    }

    #[test]
    fn test_fold_record_rejects_multi_word_line() {
        let args = FoldingArguments { min_loop_length: 0, max_length: None };
        let model = args.build_model();
        let records = crate::input_parsers::read_fasta_records_string("GGGAAA UCCC\n").unwrap();
        let err = args.fold_record(&records[0], &model).unwrap_err();
        assert!(matches!(err.downcast_ref::<SequenceError>(),
            Some(SequenceError::InvalidAlphabet(_, ' ', 6))));
    }

    #[test]
    fn test_fold_record_too_long() {
        let args = FoldingArguments { min_loop_length: 0, max_length: Some(8) };
        let model = args.build_model();
        assert!(args.fold_record(&record("AUAUAUAU"), &model).is_ok());
        let err = args.fold_record(&record("AUAUAUAUA"), &model).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }
}
