//! # raschet
//!
//! Financial computation core for sale and warehouse documents and for
//! reconciliation statements between two parties.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Loosely-typed API input is normalized at the boundary; the computations
//! themselves never fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use raschet::pricing::{LineItem, aggregate};
//! use raschet::words::amount_to_words;
//! use rust_decimal_macros::dec;
//!
//! let lines = [LineItem::new("Стрижка", dec!(2), dec!(100)).discount(dec!(10))];
//! let totals = aggregate(&lines, dec!(0));
//! assert_eq!(totals.total, dec!(180));
//!
//! assert_eq!(amount_to_words(totals.total, "сом"), "сто восемьдесят сом 00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `pricing` (default) | Discount cascade, document totals, document payloads |
//! | `ledger` (default) | Ledger row normalization, reconciliation statements |
//! | `words` (default) | Amounts in Russian words |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "pricing")]
pub mod pricing;

#[cfg(feature = "ledger")]
pub mod ledger;

#[cfg(feature = "words")]
pub mod words;

// Re-export core types at crate root for convenience
pub use crate::core::*;
