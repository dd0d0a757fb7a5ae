//! Property-based tests for the computation invariants.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "pricing", feature = "ledger"))]

use proptest::prelude::*;
use raschet::core::*;
use raschet::ledger::*;
use raschet::pricing::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a price (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Generate a quantity (0.000 to 100.000).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u32..=100_000u32).prop_map(|milli| Decimal::new(milli as i64, 3))
}

/// Generate a percent, sometimes out of range.
fn arb_percent() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (0u32..=10_000u32).prop_map(|bp| Decimal::new(bp as i64, 2)),
        (-500i64..50_000i64).prop_map(|bp| Decimal::new(bp, 2)),
    ]
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_percent())
        .prop_map(|(qty, price, pct)| LineItem::new("Товар", qty, price).discount(pct))
}

/// A line with a whole quantity, so its stored line total is exact.
fn arb_counted_line() -> impl Strategy<Value = LineItem> {
    (1u32..=50u32, arb_price(), arb_percent())
        .prop_map(|(qty, price, pct)| LineItem::new("Товар", Decimal::from(qty), price).discount(pct))
}

/// Generate a signed amount (-99999.99 to 99999.99).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_entry() -> impl Strategy<Value = LedgerEntry> {
    (arb_amount(), arb_amount(), arb_amount(), arb_amount()).prop_map(|(ad, ac, bd, bc)| {
        let mut entry = LedgerEntry::new(None, "x");
        entry.party_a_debit = ad;
        entry.party_a_credit = ac;
        entry.party_b_debit = bd;
        entry.party_b_credit = bc;
        entry
    })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// The amount due never drops below zero or exceeds the gross subtotal.
    #[test]
    fn total_within_bounds(lines in prop::collection::vec(arb_line(), 0..8), doc in arb_percent()) {
        let t = aggregate(&lines, doc);
        prop_assert!(t.total >= Decimal::ZERO);
        prop_assert!(t.total <= t.subtotal, "total {} > subtotal {}", t.total, t.subtotal);
        prop_assert_eq!(t.total_discount, t.items_discount + t.document_discount_amount);
        prop_assert_eq!(t.total.scale(), 2);
    }

    /// The parts add up to the total within a cent.
    #[test]
    fn totals_reconcile(lines in prop::collection::vec(arb_line(), 0..8), doc in arb_percent()) {
        let t = aggregate(&lines, doc);
        let gap = (t.subtotal - t.items_discount - t.document_discount_amount - t.total).abs();
        prop_assert!(gap <= dec!(0.01), "gap {} for {:?}", gap, t);
    }

    /// Without a document discount the printed line totals sum to the total.
    #[test]
    fn line_totals_sum_to_total(lines in prop::collection::vec(arb_counted_line(), 0..8)) {
        let doc = price_document(&lines, DocumentDiscount::NONE);
        let printed: Decimal = doc.lines.iter().map(|l| l.pricing.line_total).sum();
        prop_assert_eq!(doc.totals.total, printed);
        prop_assert!(doc.totals.total <= doc.totals.subtotal);
    }

    /// Effective discount is a percent and never below either component.
    #[test]
    fn effective_discount_in_range(
        qty in arb_quantity(),
        price in arb_price(),
        line_pct in arb_percent(),
        doc_pct in arb_percent(),
    ) {
        let p = compute_line(qty, price, line_pct, doc_pct);
        prop_assert!(p.effective_discount_percent >= Decimal::ZERO);
        prop_assert!(p.effective_discount_percent <= Decimal::ONE_HUNDRED);
        prop_assert!(p.effective_discount_percent >= round_half_up(clamp_percent(line_pct), 2));
        prop_assert!(p.line_total >= Decimal::ZERO);
    }

    /// Normalizing a normalized amount changes nothing.
    #[test]
    fn normalize_is_idempotent(raw in ".{0,24}") {
        let once = normalize_amount(raw.as_str());
        prop_assert_eq!(normalize_amount(&once), once);
        prop_assert_eq!(normalize_amount(once.to_string().as_str()), once);
    }

    /// Percent normalization always lands in [0, 100].
    #[test]
    fn percent_is_clamped(raw in "[-0-9.,]{0,12}") {
        let p = normalize_percent(raw.as_str());
        prop_assert!(p >= Decimal::ZERO && p <= Decimal::ONE_HUNDRED);
    }

    /// Without an authoritative closing balance Party B mirrors Party A.
    #[test]
    fn closing_balances_mirror(opening in arb_amount(), entries in prop::collection::vec(arb_entry(), 0..10)) {
        let ledger = ReconciliationLedger::build(opening, entries, None);
        prop_assert_eq!(ledger.closing_balance, -ledger.closing_balance_b);
        prop_assert_eq!(ledger.closing_balance, ledger.derived_closing_balance);
        prop_assert_eq!(ledger.debt_amount, ledger.closing_balance.abs());
        prop_assert!(ledger.warnings.is_empty());
        prop_assert_eq!(ledger.debtor.is_some(), !ledger.closing_balance.is_zero());
    }

    /// Arbitrary rows never panic the normalizer.
    #[test]
    fn normalizer_total_over_strings(date in ".{0,20}", doc in ".{0,40}", amount in ".{0,12}") {
        let row = serde_json::json!({"date": date, "document": doc, "a_debit": amount});
        let entry = normalize_row(&row);
        prop_assert!(!entry.description.is_empty());
        prop_assert!(!entry.date_label.is_empty());
    }
}
