//! Editable invoice draft — the state behind an invoice editor form.
//!
//! The draft keeps numeric fields as the raw strings the user typed and
//! parses them lossily on every recomputation, so a half-typed value never
//! produces an error, only a 0. Editing operations mirror the form: rows can
//! be added, removed (the list never becomes empty), and reordered; picking
//! a tax definition or product prefills the row, while manually editing a
//! rate detaches it from its definition again.

mod catalog;

pub use catalog::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    FakturoError, LineItem, RoundingMode, TaxConfig, TaxMode, Totals, ValidationError, compute,
    parse_amount,
};

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

/// One editable invoice row. Numeric fields hold the raw text the user
/// typed; they are parsed lossily when totals are computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub product_id: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub notes: String,
    pub tax_percent: String,
    pub tax_definition_id: String,
}

impl ItemDraft {
    /// A fresh blank row: quantity 1, price 0.
    pub fn blank() -> Self {
        Self {
            quantity: "1".into(),
            unit_price: "0".into(),
            ..Self::default()
        }
    }

    /// Prefill a row from existing invoice data.
    pub fn from_line(line: &LineItem) -> Self {
        Self {
            product_id: String::new(),
            description: line.description.clone(),
            quantity: line.quantity.to_string(),
            unit_price: line.unit_price.to_string(),
            notes: line.notes.clone().unwrap_or_default(),
            tax_percent: if line.tax_percent.is_zero() {
                String::new()
            } else {
                line.tax_percent.to_string()
            },
            tax_definition_id: line.tax_definition_id.clone().unwrap_or_default(),
        }
    }

    /// Parse this row into a calculation input. Description, notes, and the
    /// tax-definition reference pass through untouched.
    pub fn to_line(&self) -> LineItem {
        LineItem {
            description: self.description.clone(),
            quantity: parse_amount(&self.quantity),
            unit_price: parse_amount(&self.unit_price),
            tax_percent: parse_amount(&self.tax_percent),
            notes: non_empty(&self.notes),
            tax_definition_id: non_empty(&self.tax_definition_id),
        }
    }
}

/// Customer selection on the draft: an existing customer by id, or inline
/// details for a customer created together with the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerChoice {
    #[default]
    None,
    Existing(String),
    New(NewCustomer),
}

/// Inline new-customer details entered on the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub tax_id: String,
    pub country_code: String,
}

/// The full editor state for one invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer: CustomerChoice,
    pub invoice_number: String,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub notes: String,
    pub tax_mode: TaxMode,
    /// Invoice-level tax rate as typed. Authoritative only in invoice mode.
    pub invoice_tax_rate: String,
    pub invoice_tax_definition_id: String,
    pub prices_include_tax: bool,
    pub rounding_mode: RoundingMode,
    items: Vec<ItemDraft>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDraft {
    /// An empty draft with a single blank row.
    pub fn new() -> Self {
        Self {
            customer: CustomerChoice::None,
            invoice_number: String::new(),
            currency: "USD".into(),
            status: InvoiceStatus::Draft,
            issue_date: None,
            due_date: None,
            payment_terms: String::new(),
            notes: String::new(),
            tax_mode: TaxMode::Invoice,
            invoice_tax_rate: "0".into(),
            invoice_tax_definition_id: String::new(),
            prices_include_tax: false,
            rounding_mode: RoundingMode::Line,
            items: vec![ItemDraft::blank()],
        }
    }

    /// A draft prefilled from existing invoice data. An empty item set still
    /// yields a single blank row.
    pub fn from_lines(lines: &[LineItem]) -> Self {
        let mut draft = Self::new();
        if !lines.is_empty() {
            draft.items = lines.iter().map(ItemDraft::from_line).collect();
        }
        draft
    }

    pub fn items(&self) -> &[ItemDraft] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut ItemDraft> {
        self.items.get_mut(index)
    }

    /// Append a blank row.
    pub fn add_item(&mut self) {
        self.items.push(ItemDraft::blank());
    }

    /// Remove a row. Removing the last remaining row replaces it with a
    /// fresh blank one; the editor never shows zero rows.
    pub fn remove_item(&mut self, index: usize) -> Result<(), FakturoError> {
        if index >= self.items.len() {
            return Err(FakturoError::Draft(format!("no item at index {index}")));
        }
        if self.items.len() <= 1 {
            self.items = vec![ItemDraft::blank()];
        } else {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Move a row to a new position (drag & drop reordering).
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), FakturoError> {
        if from >= self.items.len() {
            return Err(FakturoError::Draft(format!("no item at index {from}")));
        }
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        Ok(())
    }

    /// Set a row's tax rate by hand. A manual edit means a custom rate, so
    /// the row's tax-definition reference is cleared.
    pub fn set_item_tax_percent(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FakturoError> {
        let item = self.item_mut_or_err(index)?;
        item.tax_percent = value.into();
        item.tax_definition_id.clear();
        Ok(())
    }

    /// Apply a tax definition to a row: sets both the reference and the rate.
    pub fn apply_tax_definition(
        &mut self,
        index: usize,
        definition: &TaxDefinition,
    ) -> Result<(), FakturoError> {
        let item = self.item_mut_or_err(index)?;
        item.tax_definition_id = definition.id.clone();
        item.tax_percent = definition.percent.to_string();
        Ok(())
    }

    /// Fill a row from a product: description (falling back to the product
    /// name), unit price, and the product's tax definition if it resolves
    /// against the catalog.
    pub fn apply_product(
        &mut self,
        index: usize,
        product: &Product,
        definitions: &[TaxDefinition],
    ) -> Result<(), FakturoError> {
        let resolved = product
            .tax_definition_id
            .as_deref()
            .and_then(|id| find_tax_definition(definitions, id));
        let item = self.item_mut_or_err(index)?;
        item.product_id = product.id.clone();
        item.description = product
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| product.name.clone());
        item.unit_price = product.unit_price.to_string();
        item.tax_definition_id = product.tax_definition_id.clone().unwrap_or_default();
        if let Some(def) = resolved {
            item.tax_percent = def.percent.to_string();
        }
        Ok(())
    }

    /// Set the invoice-level tax rate by hand, detaching the invoice-level
    /// tax definition.
    pub fn set_invoice_tax_rate(&mut self, value: impl Into<String>) {
        self.invoice_tax_rate = value.into();
        self.invoice_tax_definition_id.clear();
    }

    /// Apply an invoice-level tax definition: sets rate and reference.
    pub fn apply_invoice_tax_definition(&mut self, definition: &TaxDefinition) {
        self.invoice_tax_definition_id = definition.id.clone();
        self.invoice_tax_rate = definition.percent.to_string();
    }

    /// Switch the tax mode. Moving to per-line tax clears the invoice-level
    /// tax definition selection; the suppressed mode's rate inputs are kept
    /// but no longer authoritative.
    pub fn set_tax_mode(&mut self, mode: TaxMode) {
        self.tax_mode = mode;
        if mode == TaxMode::Line {
            self.invoice_tax_definition_id.clear();
        }
    }

    /// The tax configuration currently in effect.
    pub fn config(&self) -> TaxConfig {
        TaxConfig {
            mode: self.tax_mode,
            prices_include_tax: self.prices_include_tax,
            rounding: self.rounding_mode,
            invoice_rate: parse_amount(&self.invoice_tax_rate),
        }
    }

    /// Parse all rows and compute the current totals. Re-run on every
    /// relevant field change; the computation is cheap and stateless.
    pub fn totals(&self) -> Totals {
        let lines: Vec<LineItem> = self.items.iter().map(ItemDraft::to_line).collect();
        compute(&lines, &self.config())
    }

    /// Validate the draft for submission. Returns all errors found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.items.iter().any(|i| !i.description.trim().is_empty()) {
            errors.push(ValidationError::new(
                "items",
                "at least one item with a description is required",
            ));
        }

        match &self.customer {
            CustomerChoice::None => {
                errors.push(ValidationError::new("customer", "a customer must be selected"));
            }
            CustomerChoice::New(customer) if customer.name.trim().is_empty() => {
                errors.push(ValidationError::new("customer.name", "customer name is required"));
            }
            _ => {}
        }

        errors
    }

    /// Validate and fail with all messages joined, builder-style.
    pub fn validate_strict(&self) -> Result<(), FakturoError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            Err(FakturoError::Validation(msg))
        }
    }

    fn item_mut_or_err(&mut self, index: usize) -> Result<&mut ItemDraft, FakturoError> {
        self.items
            .get_mut(index)
            .ok_or_else(|| FakturoError::Draft(format!("no item at index {index}")))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
