use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hifz_core::normalize::{normalize, tokenize};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let word = "ٱلْمَغْضُوبِ";
    let verse = "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ";
    let punctuated = "قُلْ، أَمْ؟ هُوَ۔";

    group.bench_function("single_word", |b| b.iter(|| normalize(black_box(word))));

    group.bench_function("punctuated", |b| {
        b.iter(|| normalize(black_box(punctuated)))
    });

    group.bench_function("tokenize_and_normalize_verse", |b| {
        b.iter(|| {
            tokenize(black_box(verse))
                .into_iter()
                .map(normalize)
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
