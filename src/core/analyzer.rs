use crate::config::AnalysisConfig;
use crate::core::aggregator::aggregate;
use crate::core::sanitizer::sanitize_with_field;
use crate::core::{AnalysisResult, PaymentRecord, SanitizedAmount};

/// Runs sanitize and aggregate with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct PaymentAnalyzer {
    config: AnalysisConfig,
}

impl PaymentAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn sanitize(&self, records: &[PaymentRecord]) -> Vec<SanitizedAmount> {
        sanitize_with_field(records, &self.config.amount_field)
    }

    pub fn analyse(&self, records: &[PaymentRecord]) -> AnalysisResult {
        tracing::debug!("Analysing {} payment records", records.len());
        aggregate(&self.sanitize(records))
    }
}

pub fn analyse(records: &[PaymentRecord]) -> AnalysisResult {
    PaymentAnalyzer::default().analyse(records)
}
