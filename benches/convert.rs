//! Performance benchmarks for a3s-cron-text
//!
//! Run with: cargo bench

use a3s_cron_text::{format, humanize, parse, validate, FormatOptions, HumanizeOptions, Locale};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EXPRESSIONS: [&str; 5] = [
    "* * * * *",
    "*/15 * * * *",
    "0 9-17 * * 1-5",
    "0,30 8,12,18 1,15 JAN-JUN MON",
    "@daily",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(validate(black_box(expr), false));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(parse(black_box(expr), false).unwrap());
            }
        });
    });
}

fn bench_format(c: &mut Criterion) {
    let en = FormatOptions::default();
    let es = FormatOptions::default()
        .with_locale(Locale::Es)
        .with_24_hour_format(false);

    c.bench_function("format (en)", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(format(black_box(expr), &en).unwrap());
            }
        });
    });

    c.bench_function("format (es, 12h)", |b| {
        b.iter(|| {
            for expr in EXPRESSIONS {
                black_box(format(black_box(expr), &es).unwrap());
            }
        });
    });
}

fn bench_humanize(c: &mut Criterion) {
    let en = HumanizeOptions::default();
    let es = HumanizeOptions::new(Locale::Es);

    // First match in the table
    c.bench_function("humanize (early match)", |b| {
        b.iter(|| humanize(black_box("every minute"), &en));
    });

    // Falls through most of the table
    c.bench_function("humanize (late match)", |b| {
        b.iter(|| humanize(black_box("fines de semana a las 10am"), &es));
    });

    c.bench_function("humanize (no match)", |b| {
        b.iter(|| humanize(black_box("sometime next week maybe"), &en));
    });
}

criterion_group!(
    benches,
    bench_validate,
    bench_parse,
    bench_format,
    bench_humanize,
);
criterion_main!(benches);
