use thiserror::Error;

/// Errors returned by the fallible entry points of the crate.
///
/// The computations themselves never fail: malformed amounts, out-of-range
/// percents and missing fields are recovered locally. Only payload parsing
/// and configuration validation surface errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RaschetError {
    /// The payload was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was valid JSON but not of a usable shape.
    #[error("payload error: {0}")]
    Payload(String),

    /// A configuration value was rejected by its builder.
    #[error("configuration error: {0}")]
    Config(String),
}
