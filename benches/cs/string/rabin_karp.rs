use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rabin_karp::{search, PolyHashBuilder, RabinKarp};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabin_karp_search");

    for &size in &[1_000, 100_000, 1_000_000] {
        let text = random_text(size, b"acgt", 42);
        let pattern = text[size / 2..size / 2 + 16].to_vec();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("dna", size), &text, |b, text| {
            b.iter(|| search(black_box(text), black_box(&pattern)))
        });
    }

    // every window is a hash hit, so each one pays for verification
    let text = vec![b'a'; 100_000];
    let pattern = vec![b'a'; 64];
    group.bench_function("all_hits", |b| {
        b.iter(|| search(black_box(&text), black_box(&pattern)))
    });

    group.finish();
}

fn bench_small_modulus(c: &mut Criterion) {
    let text = random_text(100_000, b"abcdefghijklmnopqrstuvwxyz", 7);
    let pattern = b"needle".to_vec();

    let mut group = c.benchmark_group("rabin_karp_modulus");
    for &modulus in &[101u64, 1_000_000_007] {
        let params = PolyHashBuilder::new()
            .with_modulus(modulus)
            .build()
            .expect("prime modulus");
        let searcher = RabinKarp::with_params(params);
        group.bench_with_input(BenchmarkId::from_parameter(modulus), &searcher, |b, s| {
            b.iter(|| s.count(black_box(&text), black_box(&pattern)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_small_modulus);
criterion_main!(benches);
