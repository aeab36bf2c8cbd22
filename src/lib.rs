pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::AnalysisConfig;
pub use crate::core::aggregator::{
    aggregate, population_std_dev, round_to_two_dp, standard_deviation,
};
pub use crate::core::analyzer::{analyse, PaymentAnalyzer};
pub use crate::core::records::{records_from_json_str, records_from_json_value};
pub use crate::core::sanitizer::{sanitize, sanitize_with_field};
pub use domain::model::{AnalysisResult, PaymentRecord, SanitizedAmount};
pub use utils::error::{AnalysisError, Result};
