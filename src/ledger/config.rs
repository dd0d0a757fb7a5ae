//! Ledger configuration: balance tolerance, placeholder text, default currency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::RaschetError;

/// Default text for an absent description or date.
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Currency assumed when the payload names none.
pub const DEFAULT_CURRENCY: &str = "KGS";

/// Configuration for ledger normalization and balancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Largest accepted gap between the derived and the authoritative
    /// closing balance before a warning is attached (default 0.01).
    pub tolerance: Decimal,
    /// Printed in place of a missing description or date.
    pub placeholder: String,
    /// Currency code used when the payload carries none.
    pub default_currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(0.01),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Builder for [`LedgerConfig`].
///
/// ```
/// use raschet::ledger::LedgerConfigBuilder;
/// use rust_decimal_macros::dec;
///
/// let config = LedgerConfigBuilder::new()
///     .tolerance(dec!(1))
///     .default_currency("RUB")
///     .build()
///     .unwrap();
/// assert_eq!(config.placeholder, "—");
/// assert_eq!(config.default_currency, "RUB");
/// ```
#[derive(Debug, Default)]
pub struct LedgerConfigBuilder {
    config: LedgerConfig,
}

impl LedgerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: Decimal) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.default_currency = currency.into();
        self
    }

    pub fn build(self) -> Result<LedgerConfig, RaschetError> {
        if self.config.tolerance < Decimal::ZERO {
            return Err(RaschetError::Config(format!(
                "tolerance must not be negative, got {}",
                self.config.tolerance
            )));
        }
        if self.config.placeholder.trim().is_empty() {
            return Err(RaschetError::Config("placeholder must not be blank".into()));
        }
        if self.config.default_currency.trim().is_empty() {
            return Err(RaschetError::Config("default currency must not be blank".into()));
        }
        Ok(self.config)
    }
}
