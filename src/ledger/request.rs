//! Reconciliation payloads as returned by the accounting API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::builder::{Party, ReconciliationLedger, ReconciliationLedgerBuilder};
use super::config::LedgerConfig;
use super::description::parse_date_value;
use super::normalize::LedgerEntryNormalizer;
use crate::core::lookup::is_blank;
use crate::core::{RaschetError, ToAmount, pick_first, pick_text};

const ROW_FIELDS: &[&str] = &["rows", "items", "lines", "entries", "table", "results"];
const OPENING_FIELDS: &[&str] = &[
    "opening_balance",
    "opening_company",
    "opening_company_balance",
    "opening_balance_company",
];
const COMPANY_FIELDS: &[&str] = &["company_name", "company", "seller", "our_company_name"];
const CLIENT_FIELDS: &[&str] = &["client_name", "client", "buyer", "counterparty"];
const START_FIELDS: &[&str] = &["start", "date_from", "period_start"];
const END_FIELDS: &[&str] = &["end", "date_to", "period_end"];
const CONTRACT_FIELDS: &[&str] = &["contract", "contract_name", "agreement"];

/// Display names of both sides of the statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    /// The company issuing the statement.
    pub party_a: String,
    pub party_b: String,
}

impl Parties {
    pub fn new(party_a: impl Into<String>, party_b: impl Into<String>) -> Self {
        Self {
            party_a: party_a.into(),
            party_b: party_b.into(),
        }
    }

    pub fn name(&self, party: Party) -> &str {
        match party {
            Party::A => &self.party_a,
            Party::B => &self.party_b,
        }
    }
}

/// Statement period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// A parsed reconciliation payload, ready to be normalized and balanced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationRequest {
    pub rows: Vec<Value>,
    pub opening_balance: Decimal,
    /// Present only when the payload carries a non-blank value, zero included.
    pub closing_balance: Option<Decimal>,
    pub parties: Parties,
    pub period: Period,
    pub currency: String,
    pub contract: Option<String>,
    /// Explicit "debt as of" date.
    pub as_of: Option<NaiveDate>,
}

impl ReconciliationRequest {
    pub fn from_json(json: &str) -> Result<Self, RaschetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Read a payload with the default configuration.
    pub fn from_value(payload: &Value) -> Result<Self, RaschetError> {
        Self::from_value_with(payload, &LedgerConfig::default())
    }

    /// Read a payload; `config` supplies the placeholder for missing party
    /// names and the fallback currency.
    pub fn from_value_with(payload: &Value, config: &LedgerConfig) -> Result<Self, RaschetError> {
        let rows = match payload {
            Value::Array(rows) => return Ok(Self::bare(rows.clone(), config)),
            Value::Object(_) => ROW_FIELDS
                .iter()
                .find_map(|key| payload.get(*key).and_then(Value::as_array))
                .cloned()
                .unwrap_or_default(),
            _ => {
                return Err(RaschetError::Payload(
                    "reconciliation payload must be a JSON object or array".into(),
                ));
            }
        };

        let period_obj = payload.get("period").filter(|p| p.is_object());
        let period_date = |nested: &str, keys: &[&str]| {
            period_obj
                .and_then(|p| p.get(nested))
                .filter(|v| !is_blank(v))
                .or_else(|| pick_first(payload, keys))
                .and_then(parse_date_value)
        };
        let period = Period {
            start: period_date("start", START_FIELDS),
            end: period_date("end", END_FIELDS),
        };

        let currency = period_obj
            .and_then(|p| pick_text(p, &["currency"]))
            .or_else(|| pick_text(payload, &["currency"]))
            .unwrap_or_else(|| config.default_currency.clone());

        let party_name = |nested: &str, keys: &[&str]| {
            payload
                .get(nested)
                .and_then(|p| pick_text(p, &["name"]))
                .or_else(|| pick_text(payload, keys))
                .unwrap_or_else(|| config.placeholder.clone())
        };
        let parties = Parties {
            party_a: party_name("company", COMPANY_FIELDS),
            party_b: party_name("client", CLIENT_FIELDS),
        };

        let as_of = pick_first(payload, &["as_of_date"])
            .or_else(|| payload.get("debt").and_then(|d| pick_first(d, &["as_of_date"])))
            .and_then(parse_date_value);

        let request = Self {
            rows,
            opening_balance: pick_first(payload, OPENING_FIELDS).to_amount(),
            closing_balance: pick_first(payload, &["closing_balance"]).map(ToAmount::to_amount),
            parties,
            period,
            currency,
            contract: pick_text(payload, CONTRACT_FIELDS),
            as_of,
        };
        tracing::debug!(
            rows = request.rows.len(),
            currency = %request.currency,
            "reconciliation request parsed"
        );
        Ok(request)
    }

    /// A payload that is only the row list.
    fn bare(rows: Vec<Value>, config: &LedgerConfig) -> Self {
        Self {
            rows,
            opening_balance: Decimal::ZERO,
            closing_balance: None,
            parties: Parties::new(config.placeholder.clone(), config.placeholder.clone()),
            period: Period::default(),
            currency: config.default_currency.clone(),
            contract: None,
            as_of: None,
        }
    }

    /// Normalize the rows and balance them.
    pub fn build_ledger(&self, normalizer: &LedgerEntryNormalizer<'_>) -> ReconciliationLedger {
        ReconciliationLedgerBuilder::new(self.opening_balance)
            .entries(normalizer.normalize_rows(&self.rows))
            .closing_balance(self.closing_balance)
            .config(normalizer.config())
            .build()
    }

    /// Date the debt is stated at: the explicit date, else the day after the
    /// period end, else the period end.
    pub fn as_of_date(&self) -> Option<NaiveDate> {
        self.as_of.or_else(|| {
            self.period
                .end
                .map(|end| end.succ_opt().unwrap_or(end))
        })
    }
}
