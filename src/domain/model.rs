use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely structured payment.
///
/// Keys are stored lowercased alongside the key as it was written, so that
/// lookups ignore case while the original spelling survives serialization.
/// When two keys differ only by case, the first one inserted is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, Value>", into = "IndexMap<String, Value>")]
pub struct PaymentRecord {
    fields: IndexMap<String, (String, Value)>,
}

impl PaymentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入欄位；若已有大小寫不同的同名欄位則忽略，回傳是否寫入
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        let key = key.into();
        let normalized = key.to_lowercase();
        if self.fields.contains_key(&normalized) {
            return false;
        }
        self.fields.insert(normalized, (key, value));
        true
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&key.to_lowercase()).map(|(_, value)| value)
    }

    /// Original key spelling for a case-insensitive match.
    pub fn original_key(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&key.to_lowercase())
            .map(|(original, _)| original.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .values()
            .map(|(original, value)| (original.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PaymentRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = PaymentRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl From<IndexMap<String, Value>> for PaymentRecord {
    fn from(map: IndexMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<serde_json::Map<String, Value>> for PaymentRecord {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PaymentRecord> for IndexMap<String, Value> {
    fn from(record: PaymentRecord) -> Self {
        record.fields.into_values().collect()
    }
}

/// Amount extracted from a single record.
///
/// `Invalid` marks a value that could not be read as a number. It is kept in
/// the sequence so it still counts towards the statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SanitizedAmount {
    Valid(f64),
    Invalid,
}

impl SanitizedAmount {
    pub fn is_valid(&self) -> bool {
        matches!(self, SanitizedAmount::Valid(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            SanitizedAmount::Valid(v) => Some(*v),
            SanitizedAmount::Invalid => None,
        }
    }

    /// Plain numeric view: `Invalid` becomes NaN.
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub standard_deviation: f64,
}

impl AnalysisResult {
    /// Result for an empty payment list.
    pub fn zero() -> Self {
        Self {
            min: 0.0,
            mean: 0.0,
            median: 0.0,
            max: 0.0,
            standard_deviation: 0.0,
        }
    }

    /// Result when at least one amount failed to parse.
    pub fn invalid() -> Self {
        Self {
            min: f64::NAN,
            mean: f64::NAN,
            median: f64::NAN,
            max: f64::NAN,
            standard_deviation: f64::NAN,
        }
    }

    pub fn is_invalid(&self) -> bool {
        [
            self.min,
            self.mean,
            self.median,
            self.max,
            self.standard_deviation,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}
