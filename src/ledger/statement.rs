//! Closing debt sentence of a reconciliation statement.

use chrono::NaiveDate;

use super::builder::ReconciliationLedger;
use super::request::{Parties, ReconciliationRequest};
use crate::core::{format_date, format_money};
use crate::words::{CurrencyWords, amount_to_words, capitalize_first};

/// `Задолженность {debtor} перед {creditor} на {date} составляет {amount} {currency}`.
///
/// `None` when the ledger closes at zero. Without an as-of date the
/// ` на {date}` part is left out.
///
/// ```
/// use chrono::NaiveDate;
/// use raschet::ledger::{LedgerEntry, Parties, ReconciliationLedger, debt_statement};
/// use rust_decimal_macros::dec;
///
/// let ledger = ReconciliationLedger::build(
///     dec!(0),
///     vec![LedgerEntry::new(None, "Продажа").a_debit(dec!(1250.5))],
///     None,
/// );
/// let parties = Parties::new("ОсОО Нур", "ИП Асанов");
/// let text = debt_statement(&ledger, &parties, NaiveDate::from_ymd_opt(2024, 4, 1), "KGS");
/// assert_eq!(
///     text.as_deref(),
///     Some("Задолженность ИП Асанов перед ОсОО Нур на 01.04.2024 составляет 1\u{a0}250,50 KGS")
/// );
/// ```
pub fn debt_statement(
    ledger: &ReconciliationLedger,
    parties: &Parties,
    as_of: Option<NaiveDate>,
    currency: &str,
) -> Option<String> {
    let (debtor, creditor) = ledger.debtor.zip(ledger.creditor)?;
    let on_date = as_of
        .map(|date| format!(" на {}", format_date(date)))
        .unwrap_or_default();
    Some(format!(
        "Задолженность {} перед {}{on_date} составляет {} {currency}",
        parties.name(debtor),
        parties.name(creditor),
        format_money(ledger.debt_amount),
    ))
}

/// The debt amount in words, capitalized, with the currency named after
/// its code where known.
pub fn debt_amount_in_words(ledger: &ReconciliationLedger, currency: &str) -> String {
    let words = CurrencyWords::for_code(currency).unwrap_or_else(|| CurrencyWords::from(currency));
    capitalize_first(&amount_to_words(ledger.debt_amount, words))
}

impl ReconciliationRequest {
    /// Debt sentence for `ledger`, dated per [`ReconciliationRequest::as_of_date`].
    pub fn debt_statement(&self, ledger: &ReconciliationLedger) -> Option<String> {
        debt_statement(ledger, &self.parties, self.as_of_date(), &self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerEntry;
    use rust_decimal_macros::dec;

    fn ledger(opening: rust_decimal::Decimal) -> ReconciliationLedger {
        ReconciliationLedger::build(
            opening,
            vec![LedgerEntry::new(None, "Оплата").a_credit(dec!(200))],
            None,
        )
    }

    #[test]
    fn party_a_owes() {
        let parties = Parties::new("ОсОО Нур", "ИП Асанов");
        let text = debt_statement(&ledger(dec!(0)), &parties, None, "KGS").unwrap();
        assert_eq!(text, "Задолженность ОсОО Нур перед ИП Асанов составляет 200,00 KGS");
    }

    #[test]
    fn settled_has_no_statement() {
        let parties = Parties::new("A", "B");
        assert_eq!(debt_statement(&ledger(dec!(200)), &parties, None, "KGS"), None);
    }

    #[test]
    fn words_with_minor_unit() {
        assert_eq!(
            debt_amount_in_words(&ledger(dec!(0)), "KGS"),
            "Двести сом 00 тыйын"
        );
        assert_eq!(debt_amount_in_words(&ledger(dec!(0)), "EUR"), "Двести EUR 00");
    }
}
