//! Core calculation types and the totals engine.
//!
//! This module provides the foundational types for invoice totals: line
//! items, the tax configuration (mode, inclusive prices, rounding), and the
//! pure [`compute`] function that derives subtotal, tax, and total.

mod compute;
mod error;
mod parse;
mod types;

pub use compute::*;
pub use error::*;
pub use parse::*;
pub use types::*;
