use crate::core::{AnalysisResult, SanitizedAmount};

/// Round to two decimal places, halves away from zero.
pub fn round_to_two_dp(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}

/// Arithmetic mean, unrounded. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted input; the two central values are averaged for
/// even lengths. Expects no NaN. NaN for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation, unrounded. NaN for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let squared_deviations: Vec<f64> = values.iter().map(|v| (v - mean).powi(2)).collect();
    self::mean(&squared_deviations).sqrt()
}

/// Population standard deviation rounded to two decimal places. NaN for an
/// empty slice.
pub fn standard_deviation(values: &[f64]) -> f64 {
    round_to_two_dp(population_std_dev(values))
}

/// 計算五項統計值；空序列全為 0，任何無效金額會讓所有欄位變成 NaN
pub fn aggregate(amounts: &[SanitizedAmount]) -> AnalysisResult {
    if amounts.is_empty() {
        return AnalysisResult::zero();
    }

    let Some(values) = amounts
        .iter()
        .map(SanitizedAmount::value)
        .collect::<Option<Vec<f64>>>()
    else {
        tracing::debug!("Invalid amount present, statistics are NaN");
        return AnalysisResult::invalid();
    };

    let result = AnalysisResult {
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        mean: round_to_two_dp(mean(&values)),
        median: median(&values),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        standard_deviation: standard_deviation(&values),
    };

    tracing::trace!(?result, count = values.len(), "Aggregated amounts");
    result
}
