//! Reconciliation statements (акт сверки) between two parties.
//!
//! Raw API rows are normalized into [`LedgerEntry`] values through the
//! [`LedgerField`] alias table, then balanced by
//! [`ReconciliationLedgerBuilder`] into turnover, closing balances and the
//! debtor/creditor relationship.
//!
//! # Example
//!
//! ```
//! use raschet::ledger::*;
//! use rust_decimal_macros::dec;
//!
//! let request = ReconciliationRequest::from_json(r#"{
//!     "company": {"name": "ОсОО Нур"},
//!     "client": {"name": "ИП Асанов"},
//!     "opening_balance": "0",
//!     "rows": [
//!         {"date": "2024-03-01", "ref_type": "sale", "doc_number": "17", "a_debit": "500"},
//!         {"date": "2024-03-05", "ref_type": "payment", "a_credit": "200"}
//!     ]
//! }"#).unwrap();
//!
//! let ledger = request.build_ledger(&LedgerEntryNormalizer::default());
//! assert_eq!(ledger.closing_balance, dec!(300));
//! assert_eq!(ledger.debtor, Some(Party::B));
//! ```

mod builder;
mod config;
mod description;
mod fields;
mod normalize;
mod request;
mod statement;

pub use builder::{
    BalanceColumns, LedgerWarning, Party, ReconciliationLedger, ReconciliationLedgerBuilder,
    Turnover,
};
pub use config::{DEFAULT_CURRENCY, DEFAULT_PLACEHOLDER, LedgerConfig, LedgerConfigBuilder};
pub use description::{
    DescriptionParts, LedgerDocKind, date_label, describe, is_identifier, parse_date,
    strip_identifiers,
};
pub use fields::LedgerField;
pub use normalize::{LabelCache, LedgerEntry, LedgerEntryNormalizer, normalize_row};
pub use request::{Parties, Period, ReconciliationRequest};
pub use statement::{debt_amount_in_words, debt_statement};
