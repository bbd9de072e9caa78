//! Walk through the invoice editor flow: prefill rows from products and
//! tax definitions, edit, and watch the totals update.
//!
//! Run with: `cargo run --example draft_editing --features "draft format"`

use fakturo::core::*;
use fakturo::draft::*;
use fakturo::format::{NumberStyle, format_totals};
use rust_decimal_macros::dec;

fn main() {
    let definitions = vec![
        TaxDefinition::new("vat19", dec!(19)).code("VAT19").name("Standard rate"),
        TaxDefinition::new("vat7", dec!(7)).code("VAT7").name("Reduced rate"),
    ];
    let products = vec![
        Product::new("p1", "Widget", dec!(9.99)).sku("W-1").tax_definition("vat19"),
        Product::new("p2", "Manual", dec!(24.00)).tax_definition("vat7"),
    ];

    let mut draft = InvoiceDraft::new();
    draft.customer = CustomerChoice::Existing("c-1".into());
    draft.currency = "EUR".into();
    draft.set_tax_mode(TaxMode::Line);

    draft.apply_product(0, &products[0], &definitions).unwrap();
    draft.item_mut(0).unwrap().quantity = "3".into();

    draft.add_item();
    draft.apply_product(1, &products[1], &definitions).unwrap();

    let display = format_totals(&draft.totals(), &draft.currency, NumberStyle::Period);
    println!("subtotal {}  tax {}  total {}", display.subtotal, display.tax, display.total);

    // A manual rate edit turns the row into a custom rate.
    draft.set_item_tax_percent(1, "0").unwrap();
    let display = format_totals(&draft.totals(), &draft.currency, NumberStyle::Period);
    println!("after rate edit: total {}", display.total);

    for error in draft.validate() {
        println!("validation: {error}");
    }
}
