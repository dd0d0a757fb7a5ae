use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{ToAmount, pick_first, pick_text};

/// Logical fields of a raw ledger row.
///
/// Each field owns an ordered list of the names it appears under in API
/// responses; the first present, non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerField {
    Date,
    /// Full description as composed by the API.
    Title,
    Description,
    DocumentType,
    DocumentNumber,
    PartyADebit,
    PartyACredit,
    PartyBDebit,
    PartyBCredit,
}

impl LedgerField {
    pub const ALL: [LedgerField; 9] = [
        Self::Date,
        Self::Title,
        Self::Description,
        Self::DocumentType,
        Self::DocumentNumber,
        Self::PartyADebit,
        Self::PartyACredit,
        Self::PartyBDebit,
        Self::PartyBCredit,
    ];

    /// Source field names, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Date => &["date", "datetime", "created_at", "document_date"],
            Self::Title => &["title"],
            Self::Description => &["document", "doc", "title", "description", "content", "name"],
            Self::DocumentType => &["ref_type", "doc_type", "type", "document_type"],
            Self::DocumentNumber => &[
                "doc_number",
                "document_number",
                "number",
                "num",
                "doc_num",
                "invoice_number",
                "order_number",
            ],
            Self::PartyADebit => &["a_debit", "company_debit", "debit_company", "company_dt"],
            Self::PartyACredit => &["a_credit", "company_credit", "credit_company", "company_kt"],
            Self::PartyBDebit => &["b_debit", "client_debit", "debit_client", "client_dt"],
            Self::PartyBCredit => &["b_credit", "client_credit", "credit_client", "client_kt"],
        }
    }

    /// Raw value of this field in `row`.
    pub fn value(self, row: &Value) -> Option<&Value> {
        pick_first(row, self.aliases())
    }

    /// Text value of this field in `row`.
    pub fn text(self, row: &Value) -> Option<String> {
        pick_text(row, self.aliases())
    }

    /// Amount value of this field in `row`; zero when absent or malformed.
    pub fn amount(self, row: &Value) -> Decimal {
        self.value(row).to_amount()
    }
}
