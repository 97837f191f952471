use std::hint::black_box;

use countrycanon::{
    CanonTableBuilder, CollapseWhitespace, KeyNormalizer, RemoveDiacritics, ReplaceSeparators,
    Stage, UpperCase, build_country_canon, canon_country,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

// Mix of what registration forms actually send: codes, English, French,
// Arabic, acronyms and junk.
const SAMPLES: &[&str] = &[
    "TN",
    "tunisia",
    "  Saudi   Arabia ",
    "Côte d’Ivoire",
    "Congo-Kinshasa",
    "États-Unis",
    "المملكة العربية السعودية",
    "مصر،",
    "U.S.A.",
    "Wakanda",
    "UNITED KINGDOM",
];

fn bench_build(c: &mut Criterion) {
    c.bench_function("canon_table/build", |b| {
        b.iter(|| black_box(CanonTableBuilder::new().build()))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &text in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, t| {
            b.iter(|| black_box(KeyNormalizer.normalize(black_box(t))))
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage");
    let input = "Côte d’Ivoire  (Abidjan) – São Tomé";
    let stages: [&dyn Stage; 4] = [
        &RemoveDiacritics,
        &UpperCase,
        &ReplaceSeparators,
        &CollapseWhitespace,
    ];
    for stage in stages {
        group.bench_function(stage.name(), |b| {
            b.iter(|| black_box(stage.apply(black_box(input).into())))
        });
    }
    group.finish();
}

fn bench_canon_country(c: &mut Criterion) {
    // keep construction out of the measurement
    black_box(build_country_canon());

    let mut group = c.benchmark_group("canon_country");
    for &text in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, t| {
            b.iter(|| black_box(canon_country(black_box(t))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_normalize,
    bench_stages,
    bench_canon_country
);
criterion_main!(benches);
