//! Compute and print totals for a small invoice in both tax modes.
//!
//! Run with: `cargo run --example basic_totals --features format`

use fakturo::core::*;
use fakturo::format::{NumberStyle, format_totals};
use rust_decimal_macros::dec;

fn main() {
    let items = vec![
        LineItem::new("Consulting", dec!(10), dec!(150)).tax(dec!(19)),
        LineItem::new("Travel expenses", dec!(1), dec!(240.50)).tax(dec!(7)),
        LineItem::new("Open-source sponsorship", dec!(1), dec!(50)),
    ];

    let invoice_level = TaxConfig {
        mode: TaxMode::Invoice,
        invoice_rate: dec!(19),
        ..TaxConfig::default()
    };
    let per_line = TaxConfig {
        mode: TaxMode::Line,
        ..TaxConfig::default()
    };

    for (label, config) in [("invoice-level tax", invoice_level), ("per-line tax", per_line)] {
        let totals = compute(&items, &config);
        let display = format_totals(&totals, "EUR", NumberStyle::Period);
        println!("{label}:");
        println!("  subtotal {}", display.subtotal);
        if display.show_tax {
            println!("  tax      {}", display.tax);
        }
        println!("  total    {}", display.total);
    }
}
