//! Human-readable descriptions for ledger lines.
//!
//! API rows describe a transaction with a mix of a document-type code, free
//! text, a document number and a date. The printed statement needs one line
//! of text per entry in a fixed phrasing, with internal identifiers removed.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::format_date;

/// Internal identifier: 8-4-4-4-12 hex groups, dashes optional.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}")
        .expect("identifier pattern is valid")
});

static WHOLE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}$")
        .expect("identifier pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,:;])").expect("punctuation pattern is valid"));

static SPACE_AFTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,:;])\s+").expect("punctuation pattern is valid"));

/// A description that already ends in a document date, e.g. `от 01.02.2024 г.`
static INLINE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)от\s+\d{2}\.\d{2}\.\d{4}\s+г\.").expect("date pattern is valid")
});

/// Kind of the source document behind a ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerDocKind {
    /// Goods or services received.
    Receipt,
    /// Outgoing payment order.
    Payment,
    Sale,
    Deal,
    DealPrepayment,
    InstallmentPayment,
}

impl LedgerDocKind {
    /// API code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::Payment => "payment",
            Self::Sale => "sale",
            Self::Deal => "deal",
            Self::DealPrepayment => "deal_prepayment",
            Self::InstallmentPayment => "installment_payment",
        }
    }

    /// Parse an API code or its Russian label (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "receipt" | "поступление" => Some(Self::Receipt),
            "payment" | "платеж" | "платёж" | "платежное поручение" => Some(Self::Payment),
            "sale" | "продажа" => Some(Self::Sale),
            "deal" | "transaction" | "сделка" => Some(Self::Deal),
            "deal_prepayment" | "предоплата" => Some(Self::DealPrepayment),
            "installment_payment" | "оплата по рассрочке" => Some(Self::InstallmentPayment),
            _ => None,
        }
    }

    /// Printed document name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Receipt => "Поступление (товаров, услуг)",
            Self::Payment => "Платежное поручение исходящее",
            Self::Sale => "Продажа",
            Self::Deal => "Сделка",
            Self::DealPrepayment => "Предоплата",
            Self::InstallmentPayment => "Оплата по рассрочке",
        }
    }

    /// Whether the phrase is `label № text` rather than the text itself.
    fn numbered(&self) -> bool {
        matches!(self, Self::Receipt | Self::Payment | Self::Sale)
    }
}

/// Inputs to [`describe`], already picked from the row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionParts<'a> {
    /// API-composed full description.
    pub title: Option<&'a str>,
    /// Free-text document description.
    pub text: Option<&'a str>,
    pub number: Option<&'a str>,
    pub kind: Option<LedgerDocKind>,
    /// Display form of the document date.
    pub date_label: Option<&'a str>,
}

/// Compose the printed description of a ledger line.
///
/// Returns `placeholder` when nothing printable remains.
pub fn describe(parts: &DescriptionParts<'_>, placeholder: &str) -> String {
    let date_suffix = parts
        .date_label
        .map(|d| format!(" от {d} г."))
        .unwrap_or_default();

    if let Some(title) = parts.title {
        let cleaned = strip_identifiers(title);
        if !cleaned.is_empty() {
            if parts.date_label.is_none() || INLINE_DATE.is_match(&cleaned) {
                return cleaned;
            }
            return strip_identifiers(&format!("{cleaned}{date_suffix}"));
        }
    }

    let text = parts
        .text
        .filter(|t| !WHOLE_IDENTIFIER.is_match(t.trim()))
        .map(strip_identifiers)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            parts
                .number
                .map(strip_identifiers)
                .filter(|n| !n.is_empty())
        });

    let body = match (parts.kind, text) {
        (Some(kind), Some(text)) if kind.numbered() => {
            format!("{} № {text}{date_suffix}", kind.label())
        }
        (Some(kind), None) => format!("{}{date_suffix}", kind.label()),
        (_, Some(text)) => format!("{text}{date_suffix}"),
        (None, None) if parts.date_label.is_some() => format!("Документ{date_suffix}"),
        (None, None) => String::new(),
    };

    let cleaned = strip_identifiers(&body);
    if cleaned.is_empty() {
        placeholder.to_string()
    } else {
        cleaned
    }
}

/// Remove internal identifiers and tidy the whitespace they leave behind.
///
/// ```
/// use raschet::ledger::strip_identifiers;
///
/// assert_eq!(
///     strip_identifiers("Продажа 3f2b8c1e-9a4d-4e2f-8b6a-1c2d3e4f5a6b , склад"),
///     "Продажа, склад"
/// );
/// ```
pub fn strip_identifiers(text: &str) -> String {
    let without_ids = IDENTIFIER.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&without_ids, " ");
    let tight = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    let spaced = SPACE_AFTER_PUNCT.replace_all(&tight, "$1 ");
    spaced.trim().to_string()
}

/// Whether `text` is nothing but an internal identifier.
pub fn is_identifier(text: &str) -> bool {
    WHOLE_IDENTIFIER.is_match(text.trim())
}

/// Parse a document date from the shapes the API produces.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in ["%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Parse a date value: a string, or a number of epoch milliseconds.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// Display form of a date value: `DD.MM.YYYY` when it parses, the raw text
/// otherwise.
pub fn date_label(value: &Value) -> Option<String> {
    match parse_date_value(value) {
        Some(date) => Some(format_date(date)),
        None => crate::core::lookup::value_text(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "3f2b8c1e-9a4d-4e2f-8b6a-1c2d3e4f5a6b";

    #[test]
    fn strips_dashed_and_bare_identifiers() {
        assert_eq!(strip_identifiers(&format!("Сделка {ID}")), "Сделка");
        assert_eq!(
            strip_identifiers("Оплата 3F2B8C1E9A4D4E2F8B6A1C2D3E4F5A6B от клиента"),
            "Оплата от клиента"
        );
    }

    #[test]
    fn tidies_punctuation() {
        assert_eq!(strip_identifiers(&format!("Долг {ID} : возврат")), "Долг: возврат");
        assert_eq!(strip_identifiers("a , b ;  c"), "a, b; c");
    }

    #[test]
    fn identifier_detection() {
        assert!(is_identifier(ID));
        assert!(is_identifier(" 3f2b8c1e9a4d4e2f8b6a1c2d3e4f5a6b "));
        assert!(!is_identifier("ПН-000123"));
    }

    #[test]
    fn kind_codes_and_labels() {
        assert_eq!(LedgerDocKind::from_code("RECEIPT"), Some(LedgerDocKind::Receipt));
        assert_eq!(LedgerDocKind::from_code("Продажа"), Some(LedgerDocKind::Sale));
        assert_eq!(LedgerDocKind::from_code("transaction"), Some(LedgerDocKind::Deal));
        assert_eq!(LedgerDocKind::from_code("refund"), None);
        assert_eq!(
            LedgerDocKind::from_code(LedgerDocKind::DealPrepayment.code()),
            Some(LedgerDocKind::DealPrepayment)
        );
    }

    #[test]
    fn receipt_phrase() {
        let parts = DescriptionParts {
            text: Some("ПН-12"),
            kind: Some(LedgerDocKind::Receipt),
            date_label: Some("01.02.2024"),
            ..Default::default()
        };
        assert_eq!(
            describe(&parts, "—"),
            "Поступление (товаров, услуг) № ПН-12 от 01.02.2024 г."
        );
    }

    #[test]
    fn identifier_text_falls_back_to_number() {
        let parts = DescriptionParts {
            text: Some(ID),
            number: Some("17"),
            kind: Some(LedgerDocKind::Sale),
            ..Default::default()
        };
        assert_eq!(describe(&parts, "—"), "Продажа № 17");
    }

    #[test]
    fn deal_without_text_uses_label() {
        let parts = DescriptionParts {
            kind: Some(LedgerDocKind::InstallmentPayment),
            date_label: Some("05.03.2024"),
            ..Default::default()
        };
        assert_eq!(describe(&parts, "—"), "Оплата по рассрочке от 05.03.2024 г.");
    }

    #[test]
    fn deal_text_is_kept() {
        let text = format!("Сделка: Долг {ID} (Долг)");
        let parts = DescriptionParts {
            text: Some(&text),
            kind: Some(LedgerDocKind::Deal),
            ..Default::default()
        };
        assert_eq!(describe(&parts, "—"), "Сделка: Долг (Долг)");
    }

    #[test]
    fn title_wins_and_keeps_inline_date() {
        let parts = DescriptionParts {
            title: Some("Продажа № 5 от 01.01.2024 г."),
            text: Some("ignored"),
            kind: Some(LedgerDocKind::Sale),
            date_label: Some("02.01.2024"),
            ..Default::default()
        };
        assert_eq!(describe(&parts, "—"), "Продажа № 5 от 01.01.2024 г.");
    }

    #[test]
    fn title_gets_date_appended() {
        let parts = DescriptionParts {
            title: Some("Возврат товара"),
            date_label: Some("02.01.2024"),
            ..Default::default()
        };
        assert_eq!(describe(&parts, "—"), "Возврат товара от 02.01.2024 г.");
    }

    #[test]
    fn date_only_and_nothing() {
        let dated = DescriptionParts {
            date_label: Some("02.01.2024"),
            ..Default::default()
        };
        assert_eq!(describe(&dated, "—"), "Документ от 02.01.2024 г.");
        assert_eq!(describe(&DescriptionParts::default(), "—"), "—");
    }

    #[test]
    fn date_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_date("2024-05-01"), expected);
        assert_eq!(parse_date("2024-05-01T10:15:00Z"), expected);
        assert_eq!(parse_date("2024-05-01T10:15:00+06:00"), expected);
        assert_eq!(parse_date("2024-05-01 10:15:00"), expected);
        assert_eq!(parse_date("2024-05-01T10:15:00.123456"), expected);
        assert_eq!(parse_date("01.05.2024"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn date_labels() {
        assert_eq!(date_label(&json!("2024-05-01")).as_deref(), Some("01.05.2024"));
        assert_eq!(date_label(&json!("конец мая")).as_deref(), Some("конец мая"));
        assert_eq!(date_label(&json!(1714521600000i64)).as_deref(), Some("01.05.2024"));
        assert_eq!(date_label(&Value::Null), None);
    }
}
