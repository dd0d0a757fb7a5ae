//! Raw API rows to canonical ledger entries.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::LedgerConfig;
use super::description::{DescriptionParts, LedgerDocKind, date_label, describe, is_identifier, parse_date_value};
use super::fields::LedgerField;
use crate::core::lookup::value_text;

/// Caller-owned map from internal identifiers to display labels.
///
/// Keys are compared case-insensitively. The normalizer only borrows the
/// cache, so its lifetime is whatever the caller gives it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCache {
    labels: HashMap<String, String>,
}

impl LabelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `label` for `id`, replacing any previous label.
    pub fn insert(&mut self, id: impl AsRef<str>, label: impl Into<String>) {
        self.labels.insert(id.as_ref().trim().to_lowercase(), label.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(&id.trim().to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for LabelCache {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cache = Self::new();
        for (id, label) in iter {
            cache.insert(id, label);
        }
        cache
    }
}

/// One canonical line of a reconciliation statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Parsed document date, when the row carried a recognizable one.
    pub date: Option<NaiveDate>,
    /// `DD.MM.YYYY`, the raw text of an unparsable date, or the placeholder.
    pub date_label: String,
    pub description: String,
    pub kind: Option<LedgerDocKind>,
    pub party_a_debit: Decimal,
    pub party_a_credit: Decimal,
    pub party_b_debit: Decimal,
    pub party_b_credit: Decimal,
}

impl LedgerEntry {
    /// An entry with no amounts, dated `date`.
    pub fn new(date: Option<NaiveDate>, description: impl Into<String>) -> Self {
        Self {
            date,
            date_label: date
                .map(crate::core::format_date)
                .unwrap_or_else(|| super::config::DEFAULT_PLACEHOLDER.to_string()),
            description: description.into(),
            kind: None,
            party_a_debit: Decimal::ZERO,
            party_a_credit: Decimal::ZERO,
            party_b_debit: Decimal::ZERO,
            party_b_credit: Decimal::ZERO,
        }
    }

    /// Set Party A's debit and mirror it as Party B's credit.
    pub fn a_debit(mut self, amount: Decimal) -> Self {
        self.party_a_debit = amount;
        self.party_b_credit = amount;
        self
    }

    /// Set Party A's credit and mirror it as Party B's debit.
    pub fn a_credit(mut self, amount: Decimal) -> Self {
        self.party_a_credit = amount;
        self.party_b_debit = amount;
        self
    }
}

/// Turns raw rows into [`LedgerEntry`] values.
///
/// ```
/// use raschet::ledger::LedgerEntryNormalizer;
/// use rust_decimal_macros::dec;
/// use serde_json::json;
///
/// let normalizer = LedgerEntryNormalizer::default();
/// let entry = normalizer.normalize_row(&json!({
///     "date": "2024-03-01",
///     "ref_type": "sale",
///     "doc_number": "17",
///     "company_debit": "1500.00"
/// }));
/// assert_eq!(entry.description, "Продажа № 17 от 01.03.2024 г.");
/// assert_eq!(entry.party_a_debit, dec!(1500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LedgerEntryNormalizer<'a> {
    config: LedgerConfig,
    labels: Option<&'a LabelCache>,
}

impl<'a> LedgerEntryNormalizer<'a> {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            labels: None,
        }
    }

    /// Resolve identifier-only descriptions through `labels`.
    pub fn with_labels(mut self, labels: &'a LabelCache) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Normalize one row. Never fails; absent fields degrade to the
    /// placeholder or zero.
    pub fn normalize_row(&self, row: &Value) -> LedgerEntry {
        let date_value = LedgerField::Date.value(row);
        let date = date_value.and_then(parse_date_value);
        let label = date_value.and_then(date_label);

        let kind_code = LedgerField::DocumentType.text(row);
        let kind = kind_code.as_deref().and_then(LedgerDocKind::from_code);
        if let (None, Some(code)) = (kind, &kind_code) {
            tracing::trace!(code = %code, "unrecognized ledger document type");
        }

        let title = LedgerField::Title.text(row);
        let text = self.description_text(row);
        let number = LedgerField::DocumentNumber.text(row);

        let parts = DescriptionParts {
            title: title.as_deref(),
            text: text.as_deref(),
            number: number.as_deref(),
            kind,
            date_label: label.as_deref(),
        };
        let description = describe(&parts, &self.config.placeholder);

        let (party_a_debit, party_a_credit) = unsign(
            LedgerField::PartyADebit.amount(row),
            LedgerField::PartyACredit.amount(row),
        );
        let (party_b_debit, party_b_credit) = unsign(
            LedgerField::PartyBDebit.amount(row),
            LedgerField::PartyBCredit.amount(row),
        );

        LedgerEntry {
            date,
            date_label: label.unwrap_or_else(|| self.config.placeholder.clone()),
            description,
            kind,
            party_a_debit,
            party_a_credit,
            party_b_debit,
            party_b_credit,
        }
    }

    /// Normalize every object in `rows`; anything else is skipped.
    pub fn normalize_rows(&self, rows: &[Value]) -> Vec<LedgerEntry> {
        let entries: Vec<LedgerEntry> = rows
            .iter()
            .filter(|row| row.is_object())
            .map(|row| self.normalize_row(row))
            .collect();
        if entries.len() != rows.len() {
            tracing::debug!(
                skipped = rows.len() - entries.len(),
                "non-object ledger rows skipped"
            );
        }
        entries
    }

    /// Description text with cached labels substituted for bare identifiers.
    fn description_text(&self, row: &Value) -> Option<String> {
        let aliases = LedgerField::Description.aliases();
        let map = row.as_object()?;
        aliases
            .iter()
            .filter(|key| **key != "title")
            .filter_map(|key| map.get(*key))
            .find_map(|value| {
                let text = value_text(value)?;
                if is_identifier(&text) {
                    if let Some(label) = self.labels.and_then(|cache| cache.get(&text)) {
                        return Some(label.to_string());
                    }
                }
                Some(text)
            })
    }
}

/// Move a negative amount into the opposite column so both stay
/// non-negative. A storno debit of −100 is a credit of 100.
fn unsign(debit: Decimal, credit: Decimal) -> (Decimal, Decimal) {
    let (mut debit_out, mut credit_out) = (Decimal::ZERO, Decimal::ZERO);
    if debit.is_sign_negative() {
        credit_out = credit_out.saturating_sub(debit);
    } else {
        debit_out = debit;
    }
    if credit.is_sign_negative() {
        debit_out = debit_out.saturating_sub(credit);
    } else {
        credit_out = credit_out.saturating_add(credit);
    }
    (debit_out, credit_out)
}

/// Normalize one row with the default configuration.
pub fn normalize_row(row: &Value) -> LedgerEntry {
    LedgerEntryNormalizer::default().normalize_row(row)
}
