//! Whole-document pricing: raw API rows in, printable figures out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cascade::{LinePricing, compute_line_scaled, gross_line};
use super::config::PricingConfig;
use super::totals::{DocumentTotals, aggregate_with};
use super::types::{DocumentDiscount, DocumentKind, LineItem};
use crate::core::{RaschetError, ToAmount, parse_amount, pick_first, pick_text};

const NAME_FIELDS: &[&str] = &["name", "product_name"];
const QUANTITY_FIELDS: &[&str] = &["qty", "quantity"];
const PRICE_FIELDS: &[&str] = &["unit_price", "price"];
const DISCOUNT_FIELDS: &[&str] = &["discount_percent", "discount"];
const LIST_PRICE_FIELDS: &[&str] = &["original_price", "price_before_discount", "price_without_discount"];
const DOCUMENT_DISCOUNT_AMOUNT_FIELDS: &[&str] = &[
    "order_discount_total",
    "discount_total",
    "discount_amount",
    "discount_percent",
];

/// Name printed for lines that arrive without one.
pub const DEFAULT_ITEM_NAME: &str = "Товар";

impl LineItem {
    /// Read a line from a raw API row, accepting the alternate field names
    /// used across the warehouse screens.
    pub fn from_value(row: &Value) -> Self {
        let list_price = pick_first(row, LIST_PRICE_FIELDS)
            .map(ToAmount::to_amount)
            .filter(|p| !p.is_zero());

        Self {
            name: pick_text(row, NAME_FIELDS).unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            quantity: pick_first(row, QUANTITY_FIELDS).to_amount(),
            unit_price: pick_first(row, PRICE_FIELDS).to_amount(),
            discount_percent: pick_first(row, DISCOUNT_FIELDS).to_percent(),
            list_price,
        }
    }
}

impl DocumentDiscount {
    /// Resolve the document discount from a raw document object.
    pub fn from_value(document: &Value, subtotal: Decimal) -> Self {
        let percent = pick_first(document, &["discount_percent"]).and_then(percent_amount);
        let amount = pick_first(document, DOCUMENT_DISCOUNT_AMOUNT_FIELDS).map(ToAmount::to_amount);
        Self::resolve(percent, amount, subtotal)
    }
}

/// A percent as written, decimal comma accepted, not yet clamped.
/// `None` unless the value actually holds a number.
fn percent_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(text) => parse_amount(&text.replacen(',', ".", 1)),
        Value::Number(_) => Some(value.to_amount()),
        _ => None,
    }
}

/// A line with its derived prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub discount_percent: Decimal,
    #[serde(flatten)]
    pub pricing: LinePricing,
}

/// Everything a renderer needs to print a priced document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedDocument {
    pub kind: DocumentKind,
    pub document_discount: DocumentDiscount,
    pub lines: Vec<PricedLine>,
    pub totals: DocumentTotals,
}

/// Price every line and total the document.
///
/// Line unit prices are the stored, already discounted prices. The totals
/// are taken over the reconstructed gross prices, so with no document
/// discount `totals.total` equals the sum of the line totals.
pub fn price_document(lines: &[LineItem], discount: DocumentDiscount) -> PricedDocument {
    price_document_with(DocumentKind::Sale, lines, discount, &PricingConfig::default())
}

/// [`price_document`] with an explicit kind and configuration.
pub fn price_document_with(
    kind: DocumentKind,
    lines: &[LineItem],
    discount: DocumentDiscount,
    config: &PricingConfig,
) -> PricedDocument {
    let priced = lines
        .iter()
        .map(|line| PricedLine {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            discount_percent: line.discount_percent,
            pricing: compute_line_scaled(
                line.quantity,
                line.unit_price,
                line.list_price,
                line.discount_percent,
                discount.percent,
                config,
            ),
        })
        .collect();

    let gross: Vec<LineItem> = lines.iter().map(gross_line).collect();

    PricedDocument {
        kind,
        document_discount: discount,
        lines: priced,
        totals: aggregate_with(&gross, discount, config),
    }
}

/// A sale/warehouse document as received from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub kind: DocumentKind,
    pub lines: Vec<LineItem>,
    pub discount: DocumentDiscount,
}

impl DocumentRequest {
    /// Parse a JSON document payload.
    pub fn from_json(json: &str) -> Result<Self, RaschetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Read a document payload.
    ///
    /// Lines come from `items` (or `lines`); document fields are read from a
    /// nested `document` object when present, otherwise from the root.
    pub fn from_value(payload: &Value) -> Result<Self, RaschetError> {
        if !payload.is_object() {
            return Err(RaschetError::Payload(
                "document payload must be a JSON object".into(),
            ));
        }
        let document = payload
            .get("document")
            .filter(|d| d.is_object())
            .unwrap_or(payload);

        let kind = pick_text(payload, &["doc_type"])
            .or_else(|| pick_text(document, &["doc_type", "type"]))
            .map(|code| {
                DocumentKind::from_code(&code).unwrap_or_else(|| {
                    tracing::debug!(code = %code, "unknown document kind, printing as sale");
                    DocumentKind::Sale
                })
            })
            .unwrap_or_default();

        let rows = ["items", "lines"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let lines: Vec<LineItem> = rows
            .iter()
            .filter(|row| row.is_object())
            .map(LineItem::from_value)
            .collect();

        let subtotal = lines
            .iter()
            .map(LineItem::gross)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let mut discount = DocumentDiscount::from_value(document, subtotal);
        if discount.is_none() && !std::ptr::eq(document, payload) {
            discount = DocumentDiscount::from_value(payload, subtotal);
        }

        Ok(Self {
            kind,
            lines,
            discount,
        })
    }

    /// Price the document with the default configuration.
    pub fn price(&self) -> PricedDocument {
        self.price_with(&PricingConfig::default())
    }

    pub fn price_with(&self, config: &PricingConfig) -> PricedDocument {
        price_document_with(self.kind, &self.lines, self.discount, config)
    }
}
