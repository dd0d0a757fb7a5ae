//! Document totals over gross line prices.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::config::PricingConfig;
use super::types::{DocumentDiscount, LineItem};
use crate::core::amount::MAX_PERCENT;
use crate::core::{clamp_percent, round_half_up};

/// Document totals.
///
/// `subtotal − items_discount − document_discount_amount == total` up to the
/// rounding of `total`, and `0 ≤ total ≤ subtotal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Σ quantity × unit price, before any discount.
    pub subtotal: Decimal,
    /// Σ of line discounts.
    pub items_discount: Decimal,
    /// Document discount, taken on the subtotal after line discounts.
    pub document_discount_amount: Decimal,
    /// Amount due, rounded half-up.
    pub total: Decimal,
    /// `items_discount + document_discount_amount`.
    pub total_discount: Decimal,
    /// `total_discount` as a share of `subtotal`, rounded half-up.
    pub total_discount_percent: Decimal,
}

/// Sum lines into document totals.
///
/// Here `unit_price` is the gross price; line discounts are taken off it.
/// Intermediate sums keep full precision and only the reported total is
/// rounded.
///
/// ```
/// use raschet::pricing::{LineItem, aggregate};
/// use rust_decimal_macros::dec;
///
/// let lines = [LineItem::new("Стрижка", dec!(2), dec!(100)).discount(dec!(10))];
/// let totals = aggregate(&lines, dec!(0));
/// assert_eq!(totals.subtotal, dec!(200));
/// assert_eq!(totals.items_discount, dec!(20));
/// assert_eq!(totals.total, dec!(180));
/// ```
pub fn aggregate(lines: &[LineItem], document_discount_percent: impl Into<DocumentDiscount>) -> DocumentTotals {
    aggregate_with(lines, document_discount_percent.into(), &PricingConfig::default())
}

/// [`aggregate`] with an explicit configuration.
pub fn aggregate_with(
    lines: &[LineItem],
    discount: DocumentDiscount,
    config: &PricingConfig,
) -> DocumentTotals {
    let doc_pct = clamp_percent(discount.percent);

    let subtotal = lines
        .iter()
        .map(LineItem::gross)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let items_discount = lines
        .iter()
        .map(|line| line.gross() / MAX_PERCENT * clamp_percent(line.discount_percent))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let after_items = subtotal - items_discount;
    let document_discount_amount = after_items / MAX_PERCENT * doc_pct;
    let total_discount = items_discount + document_discount_amount;

    let exact = (after_items - document_discount_amount).max(Decimal::ZERO);
    let mut total = round_half_up(exact, config.display_scale);
    // Rounding must not lift the total above the gross amount.
    if total > subtotal {
        total = exact.round_dp_with_strategy(config.display_scale, RoundingStrategy::ToZero);
        total.rescale(config.display_scale);
    }

    let total_discount_percent = if subtotal > Decimal::ZERO {
        round_half_up(total_discount / subtotal * MAX_PERCENT, config.display_scale)
    } else {
        Decimal::ZERO
    };

    tracing::trace!(
        lines = lines.len(),
        %subtotal,
        %items_discount,
        %document_discount_amount,
        %total,
        "document totals"
    );

    DocumentTotals {
        subtotal,
        items_discount,
        document_discount_amount,
        total,
        total_discount,
        total_discount_percent,
    }
}
