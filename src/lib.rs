//! # fakturo
//!
//! Invoice totals engine: the calculation core of an invoicing application,
//! covering invoice-level and per-line tax, tax-inclusive (extraction) and
//! tax-exclusive (addition) prices, and per-line vs per-total rounding.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Rounding is commercial half-up at the cent, not banker's rounding.
//!
//! ## Quick Start
//!
//! ```rust
//! use fakturo::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItem::new("Consulting", dec!(2), dec!(50)),
//!     LineItem::new("Support", dec!(1), dec!(25)),
//! ];
//! let config = TaxConfig {
//!     mode: TaxMode::Invoice,
//!     invoice_rate: dec!(10),
//!     ..TaxConfig::default()
//! };
//!
//! let totals = compute(&items, &config);
//! assert_eq!(totals.subtotal, dec!(125.00));
//! assert_eq!(totals.tax, dec!(12.50));
//! assert_eq!(totals.total, dec!(137.50));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, tax configuration, totals engine |
//! | `draft` | Editable invoice draft, tax-definition & product catalogs |
//! | `format` | Currency display formatting (comma/period grouping) |
//! | `submit` | JSON wire payload for create/update invoice requests |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "draft")]
pub mod draft;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "submit")]
pub mod submit;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
