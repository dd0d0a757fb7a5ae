//! Shared building blocks: amount normalization, rounding, display
//! formatting and the crate error type.
//!
//! Everything in here is used by both the pricing and the ledger paths.

pub mod amount;
mod error;
pub mod format;
pub mod lookup;

pub use amount::{
    ToAmount, clamp_percent, normalize_amount, normalize_percent, parse_amount, round_half_up,
};
pub use error::*;
pub use format::{GROUP_SEPARATOR, format_date, format_money};
pub use lookup::{pick_first, pick_text};
