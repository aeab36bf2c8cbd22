pub mod aggregator;
pub mod analyzer;
pub mod records;
pub mod sanitizer;

pub use crate::domain::model::{AnalysisResult, PaymentRecord, SanitizedAmount};
pub use crate::utils::error::Result;
