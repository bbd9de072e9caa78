use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use fakturo::core::*;

fn build_items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|i| {
            LineItem::new(format!("Service item {i}"), dec!(2.5), dec!(119.99)).tax(dec!(19))
        })
        .collect()
}

fn bench_invoice_mode(c: &mut Criterion) {
    let items = build_items(100);
    let config = TaxConfig {
        mode: TaxMode::Invoice,
        invoice_rate: dec!(19),
        ..TaxConfig::default()
    };

    c.bench_function("compute_invoice_mode_100_lines", |b| {
        b.iter(|| compute(black_box(&items), black_box(&config)))
    });
}

fn bench_line_mode_inclusive(c: &mut Criterion) {
    let items = build_items(100);
    let config = TaxConfig {
        mode: TaxMode::Line,
        prices_include_tax: true,
        rounding: RoundingMode::Total,
        ..TaxConfig::default()
    };

    c.bench_function("compute_line_mode_inclusive_100_lines", |b| {
        b.iter(|| compute(black_box(&items), black_box(&config)))
    });
}

criterion_group!(benches, bench_invoice_mode, bench_line_mode_inclusive);
criterion_main!(benches);
