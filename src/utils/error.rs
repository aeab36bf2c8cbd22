use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AnalysisError {
    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::SerializationError(_) => {
                "Input is not valid JSON; expected an array of payment objects".to_string()
            }
            AnalysisError::InvalidRecord { index, .. } => {
                format!("Payment #{} is not a JSON object", index)
            }
            AnalysisError::ConfigError { message } => format!("Could not read config: {}", message),
            AnalysisError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
