//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Placeholder specialty for speakers whose specialty is never stated
pub const DEFAULT_SPECIALTY: &str = "Especialidad no especificada";

/// Placeholder biography for speakers recovered by the fallback pass
pub const DEFAULT_BIO: &str = "Biografía no disponible";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Characters of raw text kept as a diagnostic excerpt when nothing is found
    pub excerpt_chars: usize,

    /// Specialty assigned when a speaker's specialty is not stated
    pub default_specialty: String,

    /// Bio assigned to speakers recovered by the fallback pass
    pub default_bio: String,

    /// Run the fallback pass when the primary pass yields nothing
    pub enable_fallback: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.excerpt_chars > self.max_text_length {
            return Err("excerpt_chars cannot exceed max_text_length".to_string());
        }
        if self.default_specialty.trim().is_empty() {
            return Err("default_specialty cannot be blank".to_string());
        }
        Ok(())
    }

    /// Primary-pass-only preset: never falls back to the cruder heuristics
    pub fn primary_only() -> Self {
        Self {
            enable_fallback: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 500_000,
            excerpt_chars: 200,
            default_specialty: DEFAULT_SPECIALTY.to_string(),
            default_bio: DEFAULT_BIO.to_string(),
            enable_fallback: true,
        }
    }
}
