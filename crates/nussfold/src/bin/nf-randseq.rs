use clap::Parser;
use anyhow::Result;
use anyhow::bail;
use rand::rng;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::prelude::IndexedRandom;

/// Generate random RNA sequences as FASTA records.
#[derive(Parser, Debug)]
#[command(name = "nf-randseq")]
#[command(author, version, about = "Generate random RNA sequences", long_about = None)]
struct Args {
    /// Alphabet to choose from, comma-separated (e.g., A,C,G,U)
    #[arg(short, long, default_value = "A,C,G,U")]
    alphabet: String,

    /// Length of each generated sequence
    #[arg(short, long, default_value_t = 50)]
    length: usize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_alphabet(alphabet: &str) -> Result<Vec<char>> {
    let letters: Vec<char> = alphabet.split(',')
        .filter_map(|s| s.trim().chars().next())
        .collect();
    if letters.is_empty() {
        bail!("Empty alphabet: '{}'", alphabet);
    }
    Ok(letters)
}

fn random_sequence<R: Rng>(rng: &mut R, alphabet: &[char], length: usize) -> String {
    (0..length)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let alphabet = parse_alphabet(&args.alphabet)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rng()),
    };

    for i in 0..args.num {
        println!(">random_{}\n{}", i + 1, random_sequence(&mut rng, &alphabet, args.length));
    }
    Ok(())
}
