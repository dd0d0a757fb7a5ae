//! Discount cascade and document totals for sale and warehouse documents.
//!
//! Two views of the same lines are computed:
//!
//! - [`aggregate`] sums gross prices, takes line discounts off them and then
//!   the document discount off the remainder (the sale editor's totals);
//! - [`compute_line`] starts from the stored, already discounted unit price
//!   and reconstructs the price before discount for printouts.
//!
//! [`price_document`] runs both and returns one serializable result.

mod cascade;
mod config;
mod document;
mod totals;
mod types;

pub use cascade::*;
pub use config::*;
pub use document::*;
pub use totals::*;
pub use types::*;
