use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdfqa_core::retrieve::retrieve;
use pdfqa_core::{Passage, PassageIndex};

fn corpus(n: usize) -> Vec<Passage> {
    (0..n)
        .map(|i| Passage {
            source: format!("doc{}.pdf", i % 20),
            page: (i % 50) as u32 + 1,
            text: format!("passage {i} discusses bond yield {} and tax rules {}", i % 7, i % 13),
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let ps = corpus(5_000);
    c.bench_function("build_index_5k", |b| b.iter(|| PassageIndex::build(black_box(&ps))));
}

fn bench_retrieve(c: &mut Criterion) {
    let ps = corpus(5_000);
    let idx = PassageIndex::build(&ps);
    c.bench_function("retrieve_5k", |b| b.iter(|| retrieve(black_box("bond yield 3 tax"), &ps, &idx, 5)));
}

criterion_group!(benches, bench_build, bench_retrieve);
criterion_main!(benches);
