use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::Result;
use log::debug;
use paste::paste;

/// One unvalidated input sequence and its optional '>' header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub header: Option<String>,
    pub sequence: String,
}

impl SequenceRecord {
    /// First word of the header without '>', or "anonymous".
    pub fn name(&self) -> &str {
        self.header.as_deref()
            .and_then(|h| h.strip_prefix('>'))
            .and_then(|h| h.split_whitespace().next())
            .unwrap_or("anonymous")
    }
}

// ============================================================
//  FASTA-like parser
// ============================================================

fn is_structure_line(line: &str) -> bool {
    line.starts_with(['.', '(', ')'])
}

/// Read all records from a FASTA-like input.
///
/// A '>' line starts a new record. Trimmed sequence lines are concatenated
/// verbatim until the next header or a blank line, so stray characters are
/// left for validation to report.
/// Dot-bracket lines, as found in sequence/structure files, are skipped.
pub fn read_fasta_records<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    let mut flush = |header: &mut Option<String>, sequence: &mut String| {
        if !sequence.is_empty() {
            records.push(SequenceRecord {
                header: header.take(),
                sequence: std::mem::take(sequence),
            });
        } else if let Some(h) = header.take() {
            // A header without sequence still counts, validation rejects it.
            records.push(SequenceRecord { header: Some(h), sequence: String::new() });
        }
    };

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            flush(&mut header, &mut sequence);
            continue;
        }

        if line.starts_with('>') {
            flush(&mut header, &mut sequence);
            header = Some(line.to_string());
        } else if is_structure_line(line) {
            debug!("Skipping structure line: {}", line);
        } else {
            sequence.push_str(line);
        }
    }
    flush(&mut header, &mut sequence);

    Ok(records)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type RecordsResult = Result<Vec<SequenceRecord>>;

define_input_variants!(read_fasta_records, RecordsResult);
