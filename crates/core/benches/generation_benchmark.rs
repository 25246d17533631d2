//! Benchmarks pour la génération de séquences

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastagen_core::{FastaRecord, SequenceGenerator};

fn benchmark_generation(c: &mut Criterion) {
    let sizes = [("1k", 1_000usize), ("10k", 10_000), ("100k", 100_000)];

    let mut group = c.benchmark_group("Generation Performance");
    group.sample_size(20);

    for (name, length) in sizes {
        group.bench_function(format!("generate_{}", name), |b| {
            let mut generator = SequenceGenerator::with_seed(42);
            b.iter(|| {
                let _ = generator.generate(black_box(length));
            });
        });
    }

    group.finish();
}

fn benchmark_fasta_rendering(c: &mut Criterion) {
    let mut generator = SequenceGenerator::with_seed(42);
    let core = generator.generate(100_000).unwrap();
    let record = FastaRecord::new("bench".to_string(), "rendu".to_string(), core.to_string());

    c.bench_function("to_fasta_100k", |b| {
        b.iter(|| black_box(&record).to_fasta());
    });
}

criterion_group!(benches, benchmark_generation, benchmark_fasta_rendering);
criterion_main!(benches);
