//! Error types for the Extractor
//!
//! Only calling-contract violations are errors. Irregular program text never
//! is: it degrades to fewer records or an empty report.

use thiserror::Error;

/// Errors that can occur when calling the extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// The caller-supplied fallback date is not an ISO date
    #[error("Invalid fallback date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}
