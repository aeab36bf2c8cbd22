#[cfg(feature = "cli")]
pub mod cli;

use crate::core::sanitizer::DEFAULT_AMOUNT_FIELD;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{validate_field_name, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Field holding the amount, matched case-insensitively.
    pub amount_field: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            amount_field: DEFAULT_AMOUNT_FIELD.to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_amount_field(amount_field: impl Into<String>) -> Self {
        Self {
            amount_field: amount_field.into(),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AnalysisError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validate_field_name("amount_field", &self.amount_field)
    }
}
