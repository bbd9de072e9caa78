use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// Compute subtotal, tax, and total for a set of line items.
///
/// Pure, total, deterministic; never fails. Items are processed in input
/// order. Tax is either extracted from tax-inclusive amounts (division by
/// `1 + rate/100`) or added on top of tax-exclusive amounts, per line or
/// once on the invoice subtotal depending on [`TaxConfig::mode`]. A rate of
/// exactly 0 always takes the no-tax branch, even for inclusive prices.
///
/// The final `subtotal` and `tax` are rounded half-up at the cent, and
/// `total = round2(subtotal + tax)` — so `total == subtotal + tax` holds
/// for the rounded values. Intermediate extraction is not rounded; the
/// backend's own total remains the authority of record, this result is the
/// reproducible preview.
pub fn compute(items: &[LineItem], config: &TaxConfig) -> Totals {
    let mut subtotal = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let mut line_total = item.quantity * item.unit_price;
        if config.rounding == RoundingMode::Line {
            line_total = round2(line_total);
        }

        let mut line_tax = Decimal::ZERO;
        match config.mode {
            TaxMode::Line => {
                let rate = item.tax_percent;
                if config.prices_include_tax && rate > Decimal::ZERO {
                    let divisor = Decimal::ONE + rate / dec!(100);
                    // Guarded; unreachable for non-negative rates.
                    if divisor > Decimal::ZERO {
                        line_tax = line_total - line_total / divisor;
                        tax += line_tax;
                        subtotal += line_total - line_tax;
                    } else {
                        subtotal += line_total;
                    }
                } else if !config.prices_include_tax && rate > Decimal::ZERO {
                    line_tax = line_total * rate / dec!(100);
                    tax += line_tax;
                    subtotal += line_total;
                } else {
                    subtotal += line_total;
                }
            }
            // Invoice-level tax is applied once, after the loop.
            TaxMode::Invoice => subtotal += line_total,
        }

        lines.push(LineAmounts {
            total: round2(line_total),
            tax: round2(line_tax),
        });
    }

    if config.mode == TaxMode::Invoice {
        let rate = config.invoice_rate;
        if config.prices_include_tax && rate > Decimal::ZERO {
            let divisor = Decimal::ONE + rate / dec!(100);
            if divisor > Decimal::ZERO {
                let extracted = subtotal - subtotal / divisor;
                tax = extracted;
                subtotal -= extracted;
            }
        } else if !config.prices_include_tax && rate > Decimal::ZERO {
            tax = subtotal * rate / dec!(100);
        } else {
            tax = Decimal::ZERO;
        }
    }

    let subtotal = round2(subtotal);
    let tax = round2(tax);
    let total = round2(subtotal + tax);

    Totals {
        subtotal,
        tax,
        total,
        lines,
    }
}

/// Round to 2 decimal places using half-up (commercial rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Decimal, unit_price: Decimal) -> LineItem {
        LineItem::new("Test item", quantity, unit_price)
    }

    #[test]
    fn empty_items_all_zero() {
        let totals = compute(&[], &TaxConfig::default());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
        assert!(totals.lines.is_empty());
    }

    #[test]
    fn zero_rate_means_no_tax_in_either_mode() {
        let items = [item(dec!(3), dec!(9.99)), item(dec!(1), dec!(0.01))];

        for mode in [TaxMode::Invoice, TaxMode::Line] {
            let totals = compute(
                &items,
                &TaxConfig {
                    mode,
                    ..TaxConfig::default()
                },
            );
            assert_eq!(totals.tax, Decimal::ZERO);
            assert_eq!(totals.subtotal, dec!(29.98));
            assert_eq!(totals.total, totals.subtotal);
        }
    }

    #[test]
    fn invoice_mode_exclusive() {
        let items = [item(dec!(2), dec!(50)), item(dec!(1), dec!(25))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Invoice,
                invoice_rate: dec!(10),
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.subtotal, dec!(125.00));
        assert_eq!(totals.tax, dec!(12.50));
        assert_eq!(totals.total, dec!(137.50));
    }

    #[test]
    fn invoice_mode_inclusive_extracts_tax() {
        let items = [item(dec!(2), dec!(50)), item(dec!(1), dec!(25))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Invoice,
                invoice_rate: dec!(10),
                prices_include_tax: true,
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.subtotal, dec!(113.64));
        assert_eq!(totals.tax, dec!(11.36));
        assert_eq!(totals.total, dec!(125.00));
    }

    #[test]
    fn line_mode_mixed_rates() {
        let items = [
            item(dec!(1), dec!(100)).tax(dec!(20)),
            item(dec!(1), dec!(50)),
        ];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Line,
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.subtotal, dec!(150.00));
        assert_eq!(totals.tax, dec!(20.00));
        assert_eq!(totals.total, dec!(170.00));
    }

    #[test]
    fn line_mode_inclusive_extracts_per_line() {
        let items = [item(dec!(1), dec!(119)).tax(dec!(19))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Line,
                prices_include_tax: true,
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.subtotal, dec!(100.00));
        assert_eq!(totals.tax, dec!(19.00));
        assert_eq!(totals.total, dec!(119.00));
    }

    #[test]
    fn rounding_modes_diverge_on_subcent_prices() {
        // 3 × 10.005: per-line rounding gives 3 × 10.01 = 30.03,
        // total rounding gives round2(30.015) = 30.02.
        let items = [
            item(dec!(1), dec!(10.005)),
            item(dec!(1), dec!(10.005)),
            item(dec!(1), dec!(10.005)),
        ];

        let per_line = compute(
            &items,
            &TaxConfig {
                rounding: RoundingMode::Line,
                ..TaxConfig::default()
            },
        );
        let per_total = compute(
            &items,
            &TaxConfig {
                rounding: RoundingMode::Total,
                ..TaxConfig::default()
            },
        );

        assert_eq!(per_line.total, dec!(30.03));
        assert_eq!(per_total.total, dec!(30.02));
        assert_ne!(per_line.total, per_total.total);
    }

    #[test]
    fn negative_amounts_propagate_algebraically() {
        let items = [item(dec!(-2), dec!(50)), item(dec!(1), dec!(25))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Invoice,
                invoice_rate: dec!(10),
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.subtotal, dec!(-75.00));
        assert_eq!(totals.tax, dec!(-7.50));
        assert_eq!(totals.total, dec!(-82.50));
    }

    #[test]
    fn negative_rate_takes_no_tax_branch() {
        let items = [item(dec!(1), dec!(100)).tax(dec!(-5))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Line,
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.subtotal, dec!(100.00));
    }

    #[test]
    fn line_mode_ignores_invoice_rate() {
        let items = [item(dec!(1), dec!(100))];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Line,
                invoice_rate: dec!(19),
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, dec!(100.00));
    }

    #[test]
    fn invoice_mode_ignores_line_rates() {
        let items = [item(dec!(1), dec!(100)).tax(dec!(19))];
        let totals = compute(&items, &TaxConfig::default());
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, dec!(100.00));
    }

    #[test]
    fn per_line_amounts_reported_in_input_order() {
        let items = [
            item(dec!(1), dec!(100)).tax(dec!(20)),
            item(dec!(2), dec!(25)),
        ];
        let totals = compute(
            &items,
            &TaxConfig {
                mode: TaxMode::Line,
                ..TaxConfig::default()
            },
        );
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[0].total, dec!(100.00));
        assert_eq!(totals.lines[0].tax, dec!(20.00));
        assert_eq!(totals.lines[1].total, dec!(50.00));
        assert_eq!(totals.lines[1].tax, Decimal::ZERO);
    }

    #[test]
    fn idempotent() {
        let items = [
            item(dec!(2.5), dec!(19.99)).tax(dec!(7)),
            item(dec!(1), dec!(0.333)).tax(dec!(19)),
        ];
        let config = TaxConfig {
            mode: TaxMode::Line,
            prices_include_tax: true,
            rounding: RoundingMode::Total,
            ..TaxConfig::default()
        };
        assert_eq!(compute(&items, &config), compute(&items, &config));
    }

    #[test]
    fn negligible_tax_threshold() {
        let totals = compute(&[item(dec!(1), dec!(100))], &TaxConfig::default());
        assert!(totals.tax_is_negligible());

        let taxed = compute(
            &[item(dec!(1), dec!(100))],
            &TaxConfig {
                invoice_rate: dec!(1),
                ..TaxConfig::default()
            },
        );
        assert!(!taxed.tax_is_negligible());
    }
}
