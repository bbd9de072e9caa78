//! Currency display formatting.
//!
//! Two grouping styles are supported, matching the application's number
//! format setting: comma style ("1,234.56", symbol prefixed) and period
//! style ("1.234,56", symbol suffixed). Formatting is presentation only and
//! never feeds back into the numeric result.

mod currencies;

pub use currencies::{currency_symbol, is_known_currency_code};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::core::{Totals, round2};

/// Number grouping style for money display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// US style: comma groups, period decimal point ("1,234.56").
    #[default]
    Comma,
    /// European style: period groups, comma decimal point ("1.234,56").
    Period,
}

impl NumberStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Period => "period",
        }
    }

    /// Parse from the settings value. Anything other than `"period"` is
    /// comma style, matching the application default.
    pub fn parse(value: &str) -> Self {
        if value == "period" { Self::Period } else { Self::Comma }
    }
}

/// Format a monetary value for display with 2 fraction digits.
///
/// Known currency symbols are prefixed in comma style (`$1,234.56`) and
/// suffixed in period style (`1.234,56 €`); other codes fall back to the
/// code itself (`XYZ 1,234.56` / `1.234,56 XYZ`). The value is rounded
/// half-up at the cent before formatting.
pub fn format_money(value: Decimal, currency: &str, style: NumberStyle) -> String {
    let rounded = round2(value);
    let negative = rounded < Decimal::ZERO;
    let digits = grouped_digits(rounded.abs(), style);
    let sign = if negative { "-" } else { "" };

    match (currency_symbol(currency), style) {
        (Some(symbol), NumberStyle::Comma) => format!("{sign}{symbol}{digits}"),
        (Some(symbol), NumberStyle::Period) => format!("{sign}{digits} {symbol}"),
        (None, NumberStyle::Comma) => format!("{sign}{currency} {digits}"),
        (None, NumberStyle::Period) => format!("{sign}{digits} {currency}"),
    }
}

/// Totals rendered as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTotals {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    /// False when the tax amount is below half a cent; the tax line is
    /// hidden then.
    pub show_tax: bool,
}

/// Format all three totals with the same currency and style.
pub fn format_totals(totals: &Totals, currency: &str, style: NumberStyle) -> FormattedTotals {
    FormattedTotals {
        subtotal: format_money(totals.subtotal, currency, style),
        tax: format_money(totals.tax, currency, style),
        total: format_money(totals.total, currency, style),
        show_tax: !totals.tax_is_negligible(),
    }
}

/// Render a non-negative, 2-dp value as grouped digits for the style.
fn grouped_digits(value: Decimal, style: NumberStyle) -> String {
    let (group_sep, decimal_sep) = match style {
        NumberStyle::Comma => (',', '.'),
        NumberStyle::Period => ('.', ','),
    };

    // Value is already rounded to 2 places, so this is exact.
    let cents = (value * dec!(100)).to_i128().unwrap_or(0);
    let whole = cents / 100;
    let fraction = cents % 100;

    let raw = whole.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(c);
    }
    grouped.push(decimal_sep);
    grouped.push_str(&format!("{fraction:02}"));
    grouped
}
