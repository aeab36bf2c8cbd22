use crate::config::AnalysisConfig;
use crate::core::sanitizer::DEFAULT_AMOUNT_FIELD;
use crate::utils::error::Result;
use crate::utils::validation::{validate_field_name, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "payment-stats")]
#[command(about = "Summary statistics for payment amounts read from stdin as a JSON array")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_AMOUNT_FIELD, help = "Amount field name (case-insensitive)")]
    pub amount_field: String,

    #[arg(long, help = "Pretty-print the JSON result")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::with_amount_field(self.amount_field.clone())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_field_name("--amount-field", &self.amount_field)
    }
}
