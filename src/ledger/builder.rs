//! Turnover and closing balances of a reconciliation statement.
//!
//! Balances are kept from Party A's point of view: positive means Party A
//! is owed money. Party B's balances are the mirror image.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::LedgerConfig;
use super::normalize::LedgerEntry;

/// Sums of each amount column over all entries. Columns are never netted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turnover {
    pub party_a_debit: Decimal,
    pub party_a_credit: Decimal,
    pub party_b_debit: Decimal,
    pub party_b_credit: Decimal,
}

impl Turnover {
    fn add(&mut self, entry: &LedgerEntry) {
        self.party_a_debit = self.party_a_debit.saturating_add(entry.party_a_debit);
        self.party_a_credit = self.party_a_credit.saturating_add(entry.party_a_credit);
        self.party_b_debit = self.party_b_debit.saturating_add(entry.party_b_debit);
        self.party_b_credit = self.party_b_credit.saturating_add(entry.party_b_credit);
    }
}

impl<'e> FromIterator<&'e LedgerEntry> for Turnover {
    fn from_iter<I: IntoIterator<Item = &'e LedgerEntry>>(iter: I) -> Self {
        let mut turnover = Self::default();
        for entry in iter {
            turnover.add(entry);
        }
        turnover
    }
}

/// One side of the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// The company issuing the statement.
    A,
    /// The counterparty.
    B,
}

/// Problems found while balancing that do not stop the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerWarning {
    /// The supplied closing balance disagrees with the entries.
    IrreconcilableBalance {
        derived: Decimal,
        authoritative: Decimal,
        difference: Decimal,
    },
}

/// A balance split into the debit and credit columns of a statement.
///
/// Positive balances print as debit, negative ones as credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceColumns {
    pub debit: Decimal,
    pub credit: Decimal,
}

impl From<Decimal> for BalanceColumns {
    fn from(balance: Decimal) -> Self {
        if balance.is_sign_negative() {
            Self {
                debit: Decimal::ZERO,
                credit: -balance,
            }
        } else {
            Self {
                debit: balance,
                credit: Decimal::ZERO,
            }
        }
    }
}

/// A balanced reconciliation statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationLedger {
    pub opening_balance: Decimal,
    pub opening_balance_b: Decimal,
    pub entries: Vec<LedgerEntry>,
    pub turnover: Turnover,
    /// `opening + Σ a_debit − Σ a_credit`.
    pub derived_closing_balance: Decimal,
    /// Party A's closing balance: the authoritative one when supplied.
    pub closing_balance: Decimal,
    /// Always `−closing_balance`.
    pub closing_balance_b: Decimal,
    pub debtor: Option<Party>,
    pub creditor: Option<Party>,
    /// `|closing_balance|`.
    pub debt_amount: Decimal,
    pub warnings: Vec<LedgerWarning>,
}

impl ReconciliationLedger {
    /// Balance `entries` with the default configuration.
    ///
    /// ```
    /// use raschet::ledger::{LedgerEntry, Party, ReconciliationLedger};
    /// use rust_decimal_macros::dec;
    ///
    /// let entries = vec![
    ///     LedgerEntry::new(None, "Продажа").a_debit(dec!(500)),
    ///     LedgerEntry::new(None, "Оплата").a_credit(dec!(200)),
    /// ];
    /// let ledger = ReconciliationLedger::build(dec!(0), entries, None);
    /// assert_eq!(ledger.closing_balance, dec!(300));
    /// assert_eq!(ledger.debtor, Some(Party::B));
    /// ```
    pub fn build(
        opening_balance: Decimal,
        entries: Vec<LedgerEntry>,
        authoritative_closing: Option<Decimal>,
    ) -> Self {
        ReconciliationLedgerBuilder::new(opening_balance)
            .entries(entries)
            .closing_balance(authoritative_closing)
            .build()
    }

    pub fn opening_columns(&self) -> (BalanceColumns, BalanceColumns) {
        (self.opening_balance.into(), self.opening_balance_b.into())
    }

    pub fn closing_columns(&self) -> (BalanceColumns, BalanceColumns) {
        (self.closing_balance.into(), self.closing_balance_b.into())
    }

    pub fn has_debt(&self) -> bool {
        self.debtor.is_some()
    }
}

/// Party B's view of a Party A balance.
fn mirror(balance: Decimal) -> Decimal {
    if balance.is_zero() {
        Decimal::ZERO
    } else {
        -balance
    }
}

/// Builder for [`ReconciliationLedger`].
#[derive(Debug, Clone, Default)]
pub struct ReconciliationLedgerBuilder {
    opening_balance: Decimal,
    entries: Vec<LedgerEntry>,
    closing_balance: Option<Decimal>,
    tolerance: Option<Decimal>,
}

impl ReconciliationLedgerBuilder {
    /// Start from Party A's opening balance.
    pub fn new(opening_balance: Decimal) -> Self {
        Self {
            opening_balance,
            ..Self::default()
        }
    }

    pub fn entry(mut self, entry: LedgerEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = LedgerEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Closing balance supplied by the accounting system. When present it
    /// wins over the derived one.
    pub fn closing_balance(mut self, closing: Option<Decimal>) -> Self {
        self.closing_balance = closing;
        self
    }

    /// Take the tolerance from `config`.
    pub fn config(mut self, config: &LedgerConfig) -> Self {
        self.tolerance = Some(config.tolerance);
        self
    }

    pub fn build(self) -> ReconciliationLedger {
        let tolerance = self
            .tolerance
            .unwrap_or_else(|| LedgerConfig::default().tolerance);
        let opening = self.opening_balance;
        let turnover: Turnover = self.entries.iter().collect();
        let derived = opening
            .saturating_add(turnover.party_a_debit)
            .saturating_sub(turnover.party_a_credit);

        let mut warnings = Vec::new();
        let closing = match self.closing_balance {
            Some(authoritative) => {
                let difference = authoritative.saturating_sub(derived);
                if difference.abs() > tolerance {
                    tracing::warn!(
                        %derived,
                        %authoritative,
                        %difference,
                        "closing balance does not match ledger entries"
                    );
                    warnings.push(LedgerWarning::IrreconcilableBalance {
                        derived,
                        authoritative,
                        difference,
                    });
                }
                authoritative
            }
            None => derived,
        };

        let (debtor, creditor) = if closing > Decimal::ZERO {
            (Some(Party::B), Some(Party::A))
        } else if closing < Decimal::ZERO {
            (Some(Party::A), Some(Party::B))
        } else {
            (None, None)
        };

        tracing::debug!(
            entries = self.entries.len(),
            %opening,
            %closing,
            "reconciliation ledger built"
        );

        ReconciliationLedger {
            opening_balance: opening,
            opening_balance_b: mirror(opening),
            entries: self.entries,
            turnover,
            derived_closing_balance: derived,
            closing_balance: closing,
            closing_balance_b: mirror(closing),
            debtor,
            creditor,
            debt_amount: closing.abs(),
            warnings,
        }
    }
}
