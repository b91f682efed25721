use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettycolor::opt::Options;
use prettycolor::{Color, CompatibilityLevel};

const INPUTS: [&str; 8] = [
    "#6495ed",
    "#abc",
    "cornflowerblue",
    "rgb(100, 149, 237)",
    "hsla(219, 79%, 66%, 0.5)",
    "chucknorris",
    "  #abc123   ",
    "123456789ABCDEF123456789ABCDEF123456789ABCDEF123456789ABCDEF123456789ABCDEF",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("strict", |b| {
        b.iter(|| {
            for text in INPUTS {
                black_box(Color::parse_at(CompatibilityLevel::Css3, black_box(text)));
            }
        })
    });

    group.bench_function("legacy", |b| {
        b.iter(|| {
            for text in INPUTS {
                black_box(Color::parse_legacy(black_box(text)));
            }
        })
    });

    let options = Options::with_legacy_fallback();
    group.bench_function("strict-then-legacy", |b| {
        b.iter(|| {
            for text in INPUTS {
                black_box(options.parse(black_box(text)));
            }
        })
    });

    group.finish();

    let long = "f00".repeat(10_000);
    c.bench_function("legacy-long", |b| {
        b.iter(|| Color::parse_legacy(black_box(&long)))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
