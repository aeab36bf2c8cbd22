use crate::core::{PaymentRecord, SanitizedAmount};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub const DEFAULT_AMOUNT_FIELD: &str = "Amount";

// Optional sign, digits, optional fraction. No exponents, no separators.
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("valid decimal pattern"));

/// 解析金額字串；前後空白會被忽略，其他不符合十進位格式的字串一律視為無效
///
/// `"1,234"` is rejected outright rather than read as `1` or `1234`.
pub fn parse_amount_str(raw: &str) -> SanitizedAmount {
    let trimmed = raw.trim();
    if !DECIMAL_PATTERN.is_match(trimmed) {
        return SanitizedAmount::Invalid;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => SanitizedAmount::Valid(v),
        _ => SanitizedAmount::Invalid,
    }
}

/// Coerce a JSON value into an amount.
pub fn coerce_amount(value: &Value) -> SanitizedAmount {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() => SanitizedAmount::Valid(v),
            _ => SanitizedAmount::Invalid,
        },
        Value::String(s) => parse_amount_str(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            SanitizedAmount::Invalid
        }
    }
}

/// One entry per record carrying `amount_field` (any casing), in input order.
/// Records without the field are skipped.
pub fn sanitize_with_field(records: &[PaymentRecord], amount_field: &str) -> Vec<SanitizedAmount> {
    let mut amounts = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for (index, record) in records.iter().enumerate() {
        let Some(value) = record.get(amount_field) else {
            tracing::debug!("Record #{} has no '{}' field, skipping", index, amount_field);
            dropped += 1;
            continue;
        };

        let amount = coerce_amount(value);
        if !amount.is_valid() {
            tracing::debug!("Record #{} has a non-numeric amount: {}", index, value);
        }
        amounts.push(amount);
    }

    tracing::debug!(
        "Sanitized {} amounts ({} records without an amount)",
        amounts.len(),
        dropped
    );
    amounts
}

pub fn sanitize(records: &[PaymentRecord]) -> Vec<SanitizedAmount> {
    sanitize_with_field(records, DEFAULT_AMOUNT_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PaymentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_amount_str_accepts_decimals() {
        assert_eq!(parse_amount_str("42"), SanitizedAmount::Valid(42.0));
        assert_eq!(parse_amount_str("  -3.5 "), SanitizedAmount::Valid(-3.5));
        assert_eq!(parse_amount_str("+7"), SanitizedAmount::Valid(7.0));
        assert_eq!(parse_amount_str(".25"), SanitizedAmount::Valid(0.25));
        assert_eq!(parse_amount_str("5."), SanitizedAmount::Valid(5.0));
    }

    #[test]
    fn test_parse_amount_str_rejects_everything_else() {
        for raw in ["", "   ", "four", "1,234", "1e3", "inf", "NaN", "12abc", "1.2.3", "-", "."] {
            assert_eq!(parse_amount_str(raw), SanitizedAmount::Invalid, "{:?}", raw);
        }
    }

    #[test]
    fn test_coerce_amount_by_json_type() {
        assert_eq!(coerce_amount(&json!(10)), SanitizedAmount::Valid(10.0));
        assert_eq!(coerce_amount(&json!(-0.5)), SanitizedAmount::Valid(-0.5));
        assert_eq!(coerce_amount(&json!("2")), SanitizedAmount::Valid(2.0));
        assert_eq!(coerce_amount(&json!(null)), SanitizedAmount::Invalid);
        assert_eq!(coerce_amount(&json!(true)), SanitizedAmount::Invalid);
        assert_eq!(coerce_amount(&json!([1])), SanitizedAmount::Invalid);
        assert_eq!(coerce_amount(&json!({"value": 1})), SanitizedAmount::Invalid);
    }

    #[test]
    fn test_sanitize_drops_records_without_amount() {
        let records = vec![
            record(json!({"Amount": 1})),
            record(json!({"TransactionInformation": "Payment Two"})),
            record(json!({})),
            record(json!({"amount": "3"})),
        ];
        assert_eq!(
            sanitize(&records),
            vec![SanitizedAmount::Valid(1.0), SanitizedAmount::Valid(3.0)]
        );
    }

    #[test]
    fn test_sanitize_keeps_invalid_entries_in_place() {
        let records = vec![
            record(json!({"Amount": 1})),
            record(json!({"AMOUNT": "four"})),
            record(json!({"Amount": 3})),
        ];
        assert_eq!(
            sanitize(&records),
            vec![
                SanitizedAmount::Valid(1.0),
                SanitizedAmount::Invalid,
                SanitizedAmount::Valid(3.0)
            ]
        );
    }

    #[test]
    fn test_sanitize_with_custom_field() {
        let records = vec![
            record(json!({"Value": 4, "Amount": 100})),
            record(json!({"Amount": 100})),
        ];
        assert_eq!(
            sanitize_with_field(&records, "value"),
            vec![SanitizedAmount::Valid(4.0)]
        );
    }
}
