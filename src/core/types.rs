use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One billable row on an invoice.
///
/// Only `quantity`, `unit_price`, and (in per-line tax mode) `tax_percent`
/// participate in the calculation; the remaining fields are identity data
/// carried through for display and submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description of the billed item.
    pub description: String,
    /// Invoiced quantity. Malformed form input is normalized to 0 upstream.
    pub quantity: Decimal,
    /// Price per unit, net or gross depending on `prices_include_tax`.
    pub unit_price: Decimal,
    /// Per-line tax rate in percent. Meaningful only in [`TaxMode::Line`];
    /// 0 when absent.
    pub tax_percent: Decimal,
    /// Free-text note shown beneath the line.
    pub notes: Option<String>,
    /// Reference to the tax definition this line's rate was taken from,
    /// if any. Pass-through; not used by the calculation.
    pub tax_definition_id: Option<String>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_percent: Decimal::ZERO,
            notes: None,
            tax_definition_id: None,
        }
    }

    /// Set the per-line tax rate in percent.
    pub fn tax(mut self, percent: Decimal) -> Self {
        self.tax_percent = percent;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn tax_definition(mut self, id: impl Into<String>) -> Self {
        self.tax_definition_id = Some(id.into());
        self
    }
}

/// Whether tax is computed once on the invoice subtotal or per line.
///
/// The two strategies are mutually exclusive: in `Invoice` mode the per-line
/// rates are ignored, in `Line` mode the invoice-level rate is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// A single rate applied once to the aggregated subtotal.
    Invoice,
    /// Each line carries its own rate (e.g. mixed VAT categories).
    Line,
}

impl TaxMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Line => "line",
        }
    }

    /// Parse from the wire value. Anything other than `"line"` is treated
    /// as invoice mode, matching the form's default.
    pub fn parse(value: &str) -> Self {
        if value == "line" { Self::Line } else { Self::Invoice }
    }
}

/// Where monetary rounding to 2 decimal places happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Each line's raw amount is rounded before aggregation, matching
    /// printed per-line amounts.
    Line,
    /// Raw amounts are summed and only the aggregated totals are rounded,
    /// minimizing cumulative rounding error.
    Total,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Total => "total",
        }
    }

    /// Parse from the wire value. Anything other than `"total"` is treated
    /// as line rounding, matching the form's default.
    pub fn parse(value: &str) -> Self {
        if value == "total" { Self::Total } else { Self::Line }
    }
}

/// Tax configuration for a totals computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub mode: TaxMode,
    /// True when entered amounts already contain tax, so tax is extracted
    /// by division instead of added.
    pub prices_include_tax: bool,
    pub rounding: RoundingMode,
    /// Invoice-level tax rate in percent. Used only in [`TaxMode::Invoice`].
    pub invoice_rate: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            mode: TaxMode::Invoice,
            prices_include_tax: false,
            rounding: RoundingMode::Line,
            invoice_rate: Decimal::ZERO,
        }
    }
}

/// Effective amounts for one line, rounded to 2 places for display.
///
/// Aggregation uses the unrounded values; these are a per-line preview only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAmounts {
    /// The line total as used by the calculation (after line rounding, if
    /// that mode is active), including tax when prices are tax-inclusive.
    pub total: Decimal,
    /// This line's tax share. Always 0 in [`TaxMode::Invoice`].
    pub tax: Decimal,
}

/// Result of a totals computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Net subtotal, rounded to 2 places.
    pub subtotal: Decimal,
    /// Tax amount, rounded to 2 places.
    pub tax: Decimal,
    /// `subtotal + tax`, rounded to 2 places.
    pub total: Decimal,
    /// Per-item effective amounts, in input order.
    pub lines: Vec<LineAmounts>,
}

impl Totals {
    /// True when the tax amount is too small to display; the tax line is
    /// hidden below half a cent.
    pub fn tax_is_negligible(&self) -> bool {
        self.tax.abs() < dec!(0.005)
    }
}
