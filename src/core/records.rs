use crate::core::PaymentRecord;
use crate::utils::error::{AnalysisError, Result};
use serde_json::Value;

/// 將 JSON 陣列轉成付款紀錄；單一物件會被包成只有一筆的陣列
pub fn records_from_json_value(json_data: Value) -> Result<Vec<PaymentRecord>> {
    let items = match json_data {
        Value::Array(items) => items,
        Value::Object(obj) => return Ok(vec![PaymentRecord::from(obj)]),
        other => {
            return Err(AnalysisError::InvalidRecord {
                index: 0,
                reason: format!("expected an array of objects, got {}", type_name(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => Ok(PaymentRecord::from(obj)),
            other => Err(AnalysisError::InvalidRecord {
                index,
                reason: format!("expected an object, got {}", type_name(&other)),
            }),
        })
        .collect()
}

pub fn records_from_json_str(content: &str) -> Result<Vec<PaymentRecord>> {
    let json_data: Value = serde_json::from_str(content)?;
    let records = records_from_json_value(json_data)?;
    tracing::debug!("Parsed {} payment records", records.len());
    Ok(records)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_from_json_str() {
        let records =
            records_from_json_str(r#"[{"Amount": 1}, {"amount": "2", "Note": "x"}, {}]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].get("AMOUNT"), Some(&json!("2")));
        assert!(records[2].is_empty());
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let records = records_from_json_value(json!({"Amount": 5})).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        let err = records_from_json_value(json!([{"Amount": 1}, 42])).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            records_from_json_str("[{"),
            Err(AnalysisError::SerializationError(_))
        ));
        assert!(records_from_json_str("\"Amount\"").is_err());
    }
}
