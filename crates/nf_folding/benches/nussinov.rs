use std::hint::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use nf_folding::NucleotideVec;
use nf_folding::Nussinov;
use nf_folding::ScoreMatrix;
use nf_folding::Folding;
use nf_folding::traceback;

fn random_sequences(num: usize, length: usize) -> Vec<NucleotideVec> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..num).map(|_| {
        let seq: String = (0..length)
            .map(|_| ['A', 'C', 'G', 'U'][rng.random_range(0..4)])
            .collect();
        NucleotideVec::try_from(seq.as_str()).expect("random sequence is valid")
    }).collect()
}

fn fill_benchmark(c: &mut Criterion) {
    let model = Nussinov::new(3);
    let mut group = c.benchmark_group("fill");
    for length in [50, 100, 200] {
        let sequences = random_sequences(10, length);
        group.bench_function(format!("fill_l{}", length), |b| {
            b.iter(|| {
                for seq in &sequences {
                    black_box(ScoreMatrix::fill(seq, &model));
                }
            })
        });
    }
    group.finish();
}

fn traceback_benchmark(c: &mut Criterion) {
    let model = Nussinov::new(3);
    let sequences = random_sequences(10, 200);
    let matrices: Vec<ScoreMatrix> = sequences.iter()
        .map(|seq| ScoreMatrix::fill(seq, &model))
        .collect();

    c.bench_function("traceback_l200", |b| {
        b.iter(|| {
            for (seq, matrix) in sequences.iter().zip(&matrices) {
                black_box(traceback(matrix, seq, &model));
            }
        })
    });
}

fn folding_benchmark(c: &mut Criterion) {
    let model = Nussinov::new(3);
    let sequences = random_sequences(10, 100);
    c.bench_function("fold_l100", |b| {
        b.iter(|| {
            for seq in &sequences {
                black_box(Folding::new(seq.clone(), &model));
            }
        })
    });
}

criterion_group!(benches, fill_benchmark, traceback_benchmark, folding_benchmark);
criterion_main!(benches);
