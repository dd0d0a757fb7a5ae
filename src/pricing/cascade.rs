//! Per-line discount cascade.
//!
//! A document line stores its unit price *after* the line discount. Legal
//! printouts need the price before any discount and the combined discount a
//! customer received, so both are reconstructed here from the stored price,
//! the line percent and the document percent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::PricingConfig;
use super::types::LineItem;
use crate::core::amount::MAX_PERCENT;
use crate::core::{clamp_percent, round_half_up};

/// Derived prices of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePricing {
    /// Unit price before any discount, rounded for display.
    pub price_before_discount: Decimal,
    /// `stored unit price × quantity`; never includes the document discount.
    pub line_total: Decimal,
    /// Combined line + document discount, in percent.
    pub effective_discount_percent: Decimal,
}

/// Compute the displayed prices of a line.
///
/// ```
/// use raschet::pricing::compute_line;
/// use rust_decimal_macros::dec;
///
/// let p = compute_line(dec!(2), dec!(90), dec!(10), dec!(0));
/// assert_eq!(p.price_before_discount, dec!(100));
/// assert_eq!(p.line_total, dec!(180));
/// assert_eq!(p.effective_discount_percent, dec!(10));
/// ```
pub fn compute_line(
    quantity: Decimal,
    stored_unit_price: Decimal,
    line_discount_percent: Decimal,
    document_discount_percent: Decimal,
) -> LinePricing {
    compute_line_with_list_price(
        quantity,
        stored_unit_price,
        None,
        line_discount_percent,
        document_discount_percent,
    )
}

/// Like [`compute_line`], but an explicit list price (non-zero and different
/// from the stored price) is used as the price before discount instead of
/// reconstructing it.
pub fn compute_line_with_list_price(
    quantity: Decimal,
    stored_unit_price: Decimal,
    list_price: Option<Decimal>,
    line_discount_percent: Decimal,
    document_discount_percent: Decimal,
) -> LinePricing {
    compute_line_scaled(
        quantity,
        stored_unit_price,
        list_price,
        line_discount_percent,
        document_discount_percent,
        &PricingConfig::default(),
    )
}

pub(crate) fn compute_line_scaled(
    quantity: Decimal,
    stored_unit_price: Decimal,
    list_price: Option<Decimal>,
    line_discount_percent: Decimal,
    document_discount_percent: Decimal,
    config: &PricingConfig,
) -> LinePricing {
    let line_pct = clamp_percent(line_discount_percent);
    let doc_pct = clamp_percent(document_discount_percent);
    let quantity = quantity.max(Decimal::ZERO);
    let stored = stored_unit_price.max(Decimal::ZERO);

    let explicit = list_price
        .map(|p| p.max(Decimal::ZERO))
        .filter(|p| !p.is_zero() && *p != stored);

    let price_before_discount = match explicit {
        Some(p) => p,
        None if line_pct > Decimal::ZERO => undo_discount(stored, line_pct),
        None if doc_pct > Decimal::ZERO => undo_discount(stored, doc_pct),
        None => stored,
    };

    let scale = config.display_scale;
    LinePricing {
        price_before_discount: round_half_up(price_before_discount, scale),
        line_total: round_half_up(stored.saturating_mul(quantity), scale),
        effective_discount_percent: round_half_up(combined_percent(line_pct, doc_pct), scale),
    }
}

/// The line as the totals aggregator sees it: gross unit price plus the
/// percent that brings it back down to the stored price.
///
/// Lines without a recoverable discount keep the stored price and no
/// discount, so the aggregated amount after line discounts always equals
/// `stored × quantity`.
pub(crate) fn gross_line(line: &LineItem) -> LineItem {
    let stored = line.unit_price.max(Decimal::ZERO);
    let line_pct = clamp_percent(line.discount_percent);

    let explicit = line
        .list_price
        .filter(|p| *p > stored)
        .and_then(|list| {
            let pct = list
                .checked_sub(stored)?
                .checked_mul(MAX_PERCENT)?
                .checked_div(list)?;
            Some((list, pct))
        });

    let (gross, pct) = match explicit {
        Some(found) => found,
        None if line_pct > Decimal::ZERO && line_pct < MAX_PERCENT => {
            (undo_discount(stored, line_pct), line_pct)
        }
        None => (stored, Decimal::ZERO),
    };

    LineItem {
        name: line.name.clone(),
        quantity: line.quantity,
        unit_price: gross,
        discount_percent: pct,
        list_price: None,
    }
}

/// Reverse a percent discount: `price / (1 − percent/100)`.
///
/// A full discount cannot be reversed; the price is returned unchanged.
fn undo_discount(price: Decimal, percent: Decimal) -> Decimal {
    let remaining = MAX_PERCENT - percent;
    if remaining.is_zero() {
        tracing::debug!(%price, "full discount, price before discount not recoverable");
        return price;
    }
    price
        .checked_mul(MAX_PERCENT)
        .and_then(|scaled| scaled.checked_div(remaining))
        .unwrap_or(price)
}

/// Percent lost when `first` and then `second` are applied in sequence.
///
/// Equal to `(before − after) / before × 100` for any positive `before`,
/// and still defined when the price is zero.
fn combined_percent(first: Decimal, second: Decimal) -> Decimal {
    MAX_PERCENT - (MAX_PERCENT - first) * (MAX_PERCENT - second) / MAX_PERCENT
}
