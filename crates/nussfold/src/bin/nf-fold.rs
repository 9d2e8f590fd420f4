use std::io::Write;
use std::path::PathBuf;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use anyhow::bail;
use rayon::prelude::*;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

use nf_folding::Folding;

use nussfold::ruler;
use nussfold::input_parsers::read_fasta_records_input;
use nussfold::input_parsers::read_fasta_records_string;
use nussfold::folding_parsers::FoldingArguments;


#[derive(Debug, Parser)]
#[command(name = "nf-fold")]
#[command(author, version, about = "RNA secondary structure by base-pair maximization (Nussinov)")]
pub struct Cli {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Fold this sequence instead of reading INPUT
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Print the score matrix of each sequence
    #[arg(short, long)]
    pub matrix: bool,

    /// Write all foldings to this JSON file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub folding: FoldingArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn print_folding(header: Option<&str>, folding: &Folding, show_matrix: bool) {
    if let Some(h) = header {
        println!("{}", h.yellow());
    }
    let sequence = folding.sequence();
    info!("{}", ruler(sequence.len()).magenta());
    println!("{}\n{} {}", sequence, folding.structure(),
        format!("({:>3} bp)", folding.pairs().len()).green());
    info!("{}", ruler(sequence.len()).magenta());

    // 1-based positions, the way they are reported to users.
    let pairs: Vec<String> = folding.pairs().iter()
        .map(|p| format!("({}, {})", p.i() + 1, p.j() + 1))
        .collect();
    info!("{} base pairs: {}", pairs.len(), pairs.join(" "));

    if show_matrix {
        print!("{}", folding.matrix());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let model = cli.folding.build_model();

    let records = match &cli.sequence {
        Some(s) => read_fasta_records_string(s)?,
        None => read_fasta_records_input(&cli.input)?,
    };
    if records.is_empty() {
        bail!("No sequences found in input");
    }
    info!("Folding {} sequence(s) with minimal loop length {}",
        records.len(), cli.folding.min_loop_length);

    let pb = if records.len() > 1 {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<Folding>> = records
        .par_iter()
        .map_init(
            || pb.clone(), // each thread gets a clone
            |pb, record| {
                let result = cli.folding.fold_record(record, &model);
                pb.inc(1);
                result
            },
        ).collect();
    pb.finish_and_clear();

    let mut failures = 0;
    let mut serial = Vec::new();
    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(folding) => {
                print_folding(record.header.as_deref(), &folding, cli.matrix);
                serial.push(folding.to_serializable());
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "ERROR:".red(), record.name(), e);
            }
        }
    }

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&serial)?;
        std::fs::write(path, json)?;
        info!("Wrote {} folding(s) to {}", serial.len(), path.display());
    }

    if failures > 0 {
        bail!("{} of {} sequence(s) could not be folded", failures, records.len());
    }
    Ok(())
}
