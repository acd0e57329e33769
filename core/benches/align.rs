use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use align_core::align::DataAligner;
use align_core::fixture::random_fixture;

fn bench_realign(c: &mut Criterion) {
    let mut group = c.benchmark_group("realign");

    for consumers in [1usize, 3, 8] {
        let fixture = random_fixture(64, consumers, 32, 8, 0xBE7C).unwrap();
        let bytes = (fixture.raw_words.len() * fixture.width) as u64;
        group.throughput(Throughput::Bytes(bytes));
        group.bench_function(format!("w64_c{consumers}"), |b| {
            b.iter_batched(
                || fixture.raw_words.clone(),
                |raw| {
                    let mut aligner =
                        DataAligner::new(fixture.width, consumers, fixture.initial_misalignment)
                            .unwrap();
                    aligner.run(raw, &fixture.schedule).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_realign);
criterion_main!(benches);
