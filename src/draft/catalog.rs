//! Tax-definition and product catalogs backing the editor's dropdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named, reusable tax rate (e.g. "VAT19 — Standard rate (19%)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDefinition {
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    /// Rate in percent.
    pub percent: Decimal,
    pub country_code: Option<String>,
}

impl TaxDefinition {
    pub fn new(id: impl Into<String>, percent: Decimal) -> Self {
        Self {
            id: id.into(),
            code: None,
            name: None,
            percent,
            country_code: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Display label: "CODE — Name (19%)", falling back to whichever of
    /// code and name is present, or the bare rate.
    pub fn label(&self) -> String {
        let code = self.code.as_deref().unwrap_or("").trim();
        let name = self.name.as_deref().unwrap_or("").trim();
        match (code.is_empty(), name.is_empty()) {
            (false, false) => format!("{code} — {name} ({}%)", self.percent),
            (false, true) => format!("{code} ({}%)", self.percent),
            (true, false) => format!("{name} ({}%)", self.percent),
            (true, true) => format!("{}%", self.percent),
        }
    }
}

/// A catalog product that can prefill an invoice row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub sku: Option<String>,
    pub tax_definition_id: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            unit_price,
            sku: None,
            tax_definition_id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn tax_definition(mut self, id: impl Into<String>) -> Self {
        self.tax_definition_id = Some(id.into());
        self
    }

    /// Display label: "Name (SKU)" when an SKU is present.
    pub fn label(&self) -> String {
        match self.sku.as_deref().map(str::trim) {
            Some(sku) if !sku.is_empty() => format!("{} ({sku})", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Look up a tax definition by id.
pub fn find_tax_definition<'a>(
    definitions: &'a [TaxDefinition],
    id: &str,
) -> Option<&'a TaxDefinition> {
    definitions.iter().find(|d| d.id == id)
}

/// Find the definition matching a given rate, used to preselect the
/// invoice-level dropdown when only a rate is stored.
pub fn find_tax_definition_by_rate(
    definitions: &[TaxDefinition],
    percent: Decimal,
) -> Option<&TaxDefinition> {
    definitions.iter().find(|d| d.percent == percent)
}
