//! Document lines, the document discount and document kinds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::amount::MAX_PERCENT;
use crate::core::clamp_percent;

/// One document line as entered on the sale editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as printed.
    pub name: String,
    /// Quantity (non-negative; negatives are treated as zero).
    pub quantity: Decimal,
    /// Unit price as stored on the document.
    pub unit_price: Decimal,
    /// Line discount percent, `[0, 100]`.
    pub discount_percent: Decimal,
    /// Explicit price before discount, when the upstream row carries one.
    pub list_price: Option<Decimal>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            discount_percent: Decimal::ZERO,
            list_price: None,
        }
    }

    /// Set the line discount; the percent is clamped to `[0, 100]`.
    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = clamp_percent(percent);
        self
    }

    pub fn list_price(mut self, price: Decimal) -> Self {
        self.list_price = Some(price);
        self
    }

    /// Gross line amount, `quantity × unit_price`, at full precision.
    pub fn gross(&self) -> Decimal {
        self.quantity
            .max(Decimal::ZERO)
            .saturating_mul(self.unit_price.max(Decimal::ZERO))
    }
}

/// Discount applied to the whole document after all line discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiscount {
    /// Percent, `[0, 100]`.
    pub percent: Decimal,
}

impl DocumentDiscount {
    /// No document discount.
    pub const NONE: Self = Self {
        percent: Decimal::ZERO,
    };

    /// Document discount of `percent`, clamped to `[0, 100]`.
    pub fn percent(percent: Decimal) -> Self {
        Self {
            percent: clamp_percent(percent),
        }
    }

    /// Resolve a document discount given either as a percent or as an amount.
    ///
    /// An explicit percent inside `[0, 100]` wins. Otherwise a positive
    /// `amount` above 100 is read as money and converted against `subtotal`;
    /// a positive amount up to 100 is read as a percent.
    pub fn resolve(percent: Option<Decimal>, amount: Option<Decimal>, subtotal: Decimal) -> Self {
        if let Some(p) = percent.filter(|p| *p >= Decimal::ZERO && *p <= MAX_PERCENT) {
            return Self { percent: p };
        }

        match amount {
            Some(a) if a > Decimal::ZERO && subtotal > Decimal::ZERO => {
                if a > MAX_PERCENT {
                    a.checked_div(subtotal)
                        .and_then(|share| share.checked_mul(MAX_PERCENT))
                        .map_or(Self { percent: MAX_PERCENT }, Self::percent)
                } else {
                    Self { percent: a }
                }
            }
            _ => Self::NONE,
        }
    }

    pub fn is_none(&self) -> bool {
        self.percent.is_zero()
    }
}

impl From<Decimal> for DocumentDiscount {
    fn from(percent: Decimal) -> Self {
        Self::percent(percent)
    }
}

/// Kind of a warehouse document, driving its printed title and columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// `SALE`: outgoing waybill.
    #[default]
    Sale,
    /// `PURCHASE`: incoming waybill.
    Purchase,
    /// `SALE_RETURN`: return of sold goods.
    SaleReturn,
    /// `PURCHASE_RETURN`: return to a supplier.
    PurchaseReturn,
    /// `INVENTORY`: stock-take sheet.
    Inventory,
    /// `RECEIPT`: goods posted without a supplier.
    Receipt,
    /// `WRITE_OFF`: goods written off.
    WriteOff,
    /// `TRANSFER`: move between warehouses.
    Transfer,
}

impl DocumentKind {
    /// API code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Purchase => "PURCHASE",
            Self::SaleReturn => "SALE_RETURN",
            Self::PurchaseReturn => "PURCHASE_RETURN",
            Self::Inventory => "INVENTORY",
            Self::Receipt => "RECEIPT",
            Self::WriteOff => "WRITE_OFF",
            Self::Transfer => "TRANSFER",
        }
    }

    /// Parse an API code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SALE" => Some(Self::Sale),
            "PURCHASE" => Some(Self::Purchase),
            "SALE_RETURN" => Some(Self::SaleReturn),
            "PURCHASE_RETURN" => Some(Self::PurchaseReturn),
            "INVENTORY" => Some(Self::Inventory),
            "RECEIPT" => Some(Self::Receipt),
            "WRITE_OFF" => Some(Self::WriteOff),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Printed document title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sale => "Расходная накладная",
            Self::Purchase => "Приходная накладная",
            Self::SaleReturn => "Расходная накладная на возврат",
            Self::PurchaseReturn => "Приходная накладная на возврат",
            Self::Inventory => "Бланк инвентаризации",
            Self::Receipt => "Оприходование",
            Self::WriteOff => "Списание",
            Self::Transfer => "Накладная на перемещение",
        }
    }

    /// Whether price and amount columns are printed.
    pub fn shows_price_columns(&self) -> bool {
        !matches!(self, Self::Inventory | Self::Transfer)
    }

    /// Whether discount columns are printed.
    pub fn shows_discount_columns(&self) -> bool {
        matches!(
            self,
            Self::Sale | Self::Purchase | Self::SaleReturn | Self::PurchaseReturn
        )
    }
}
