//! Wire types for the create/update invoice request.
//!
//! The payload mirrors what the backend expects: camelCase field names,
//! per-item tax entries only in per-line tax mode, and the invoice-level
//! rate only in invoice mode — the suppressed mode's inputs are not
//! submitted. The backend recomputes the authoritative totals from this
//! payload; nothing derived is sent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{FakturoError, RoundingMode, TaxMode, parse_amount};
use crate::draft::{CustomerChoice, InvoiceDraft, InvoiceStatus, NewCustomer};

/// Per-line tax entry, present only in per-line tax mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTaxPayload {
    pub percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_definition_id: Option<String>,
}

/// One submitted invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<ItemTaxPayload>,
}

/// Inline new-customer details submitted with the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl CustomerPayload {
    fn from_new(customer: &NewCustomer) -> Self {
        Self {
            name: customer.name.trim().to_string(),
            email: non_empty(&customer.email),
            phone: non_empty(&customer.phone),
            address: non_empty(&customer.address),
            city: non_empty(&customer.city),
            postal_code: non_empty(&customer.postal_code),
            tax_id: non_empty(&customer.tax_id),
            country_code: non_empty(&customer.country_code),
        }
    }
}

/// The create/update invoice request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerPayload>,
    pub invoice_number: String,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub tax_mode: TaxMode,
    /// Invoice-level rate; 0 in per-line mode.
    pub tax_rate: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_definition_id: Option<String>,
    pub prices_include_tax: bool,
    pub rounding_mode: RoundingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<ItemPayload>,
}

impl InvoicePayload {
    /// Build the request body from a draft. The draft is validated first;
    /// rows without a description are dropped, and numeric strings are
    /// parsed lossily (malformed input becomes 0, never an error).
    pub fn from_draft(draft: &InvoiceDraft) -> Result<Self, FakturoError> {
        draft.validate_strict()?;

        let per_line_tax = draft.tax_mode == TaxMode::Line;
        let items = draft
            .items()
            .iter()
            .filter(|item| !item.description.trim().is_empty())
            .map(|item| {
                let line = item.to_line();
                ItemPayload {
                    description: line.description,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    notes: line.notes,
                    tax: per_line_tax.then(|| ItemTaxPayload {
                        percent: line.tax_percent,
                        tax_definition_id: line.tax_definition_id,
                    }),
                }
            })
            .collect();

        let (customer_id, customer) = match &draft.customer {
            CustomerChoice::Existing(id) => (Some(id.clone()), None),
            CustomerChoice::New(details) => (None, Some(CustomerPayload::from_new(details))),
            // Unreachable after validation.
            CustomerChoice::None => (None, None),
        };

        Ok(Self {
            customer_id,
            customer,
            invoice_number: draft.invoice_number.clone(),
            currency: draft.currency.clone(),
            status: draft.status,
            issue_date: draft.issue_date,
            due_date: draft.due_date,
            tax_mode: draft.tax_mode,
            tax_rate: if per_line_tax {
                Decimal::ZERO
            } else {
                parse_amount(&draft.invoice_tax_rate)
            },
            tax_definition_id: if per_line_tax {
                None
            } else {
                non_empty(&draft.invoice_tax_definition_id)
            },
            prices_include_tax: draft.prices_include_tax,
            rounding_mode: draft.rounding_mode,
            payment_terms: non_empty(&draft.payment_terms),
            notes: non_empty(&draft.notes),
            items,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
