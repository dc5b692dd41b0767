//! Criterion benchmarks for the trie lexicon.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use triespell::Trie;

/// Deterministic pseudo-words so runs are comparable.
fn generate_words(count: usize) -> Vec<String> {
    let alphabet: Vec<char> = "etaoinshrdlucmfwyp".chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut words = Vec::with_capacity(count);

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = 3 + (state % 8) as usize;
        let word: String = (0..len)
            .map(|i| alphabet[((state >> (i * 4)) % alphabet.len() as u64) as usize])
            .collect();
        words.push(word);
    }

    words
}

fn bench_insert(c: &mut Criterion) {
    let words = generate_words(20_000);
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("20k_words", |b| {
        b.iter(|| {
            let trie: Trie = words.iter().collect();
            black_box(trie.len())
        })
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let words = generate_words(20_000);
    let trie: Trie = words.iter().collect();

    c.bench_function("contains/hit_and_miss", |b| {
        b.iter(|| {
            let hits = words
                .iter()
                .take(1_000)
                .filter(|w| trie.contains(black_box(w)))
                .count();
            black_box(hits + usize::from(trie.contains("zzzzzz")))
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let words = generate_words(20_000);
    let trie: Trie = words.iter().collect();
    let query = &words[42];

    let mut group = c.benchmark_group("suggest_with_budget");
    for budget in [0, 1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| black_box(trie.suggest_with_budget(black_box(query), budget)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_suggest);
criterion_main!(benches);
