//! Pricing configuration.

use serde::{Deserialize, Serialize};

use crate::core::RaschetError;

/// Largest supported number of displayed decimal places.
pub const MAX_DISPLAY_SCALE: u32 = 8;

/// Configuration for document pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Decimal places of every displayed amount and percent (default 2).
    pub display_scale: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { display_scale: 2 }
    }
}

/// Builder for [`PricingConfig`].
///
/// ```
/// use raschet::pricing::PricingConfigBuilder;
///
/// let config = PricingConfigBuilder::new().display_scale(3).build().unwrap();
/// assert_eq!(config.display_scale, 3);
/// ```
#[derive(Debug, Default)]
pub struct PricingConfigBuilder {
    config: PricingConfig,
}

impl PricingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of displayed decimal places.
    pub fn display_scale(mut self, scale: u32) -> Self {
        self.config.display_scale = scale;
        self
    }

    pub fn build(self) -> Result<PricingConfig, RaschetError> {
        if self.config.display_scale > MAX_DISPLAY_SCALE {
            return Err(RaschetError::Config(format!(
                "display scale {} exceeds maximum of {MAX_DISPLAY_SCALE}",
                self.config.display_scale
            )));
        }
        Ok(self.config)
    }
}
