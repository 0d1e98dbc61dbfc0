use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::error::AppError;

use super::FetchResult;

/// Timestamps above this are treated as milliseconds rather than seconds.
const MILLIS_CUTOFF: i64 = 10_000_000_000;

pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accept both JSON numbers and numeric strings; blanks and nulls are `None`.
pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(num) => num.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Locate the record array of a payload: either the root itself or the first array found
/// under one of `keys`.
pub fn record_array<'a>(root: &'a Value, keys: &[&str]) -> FetchResult<&'a Vec<Value>> {
    if let Some(array) = root.as_array() {
        return Ok(array);
    }
    keys.iter()
        .find_map(|key| root.get(*key).and_then(Value::as_array))
        .ok_or_else(|| {
            AppError::decode(format!(
                "expected an array or an object with one of {:?}",
                keys
            ))
        })
}

pub fn find_value<'a>(object: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    for alias in aliases {
        let alias_norm = normalize_key(alias);
        if let Some((_, value)) = object
            .iter()
            .find(|(key, _)| normalize_key(key) == alias_norm)
        {
            return Some(value);
        }
    }

    None
}

pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parse unix seconds, unix milliseconds, `YYYY-MM-DD` or RFC 3339 timestamps.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(num) => num
            .as_i64()
            .or_else(|| num.as_f64().map(|f| f as i64))
            .and_then(epoch_to_datetime),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if let Ok(epoch) = trimmed.parse::<i64>() {
                return epoch_to_datetime(epoch);
            }
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
            }
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }
        _ => None,
    }
}

fn epoch_to_datetime(epoch: i64) -> Option<DateTime<Utc>> {
    if epoch.abs() >= MILLIS_CUTOFF {
        Utc.timestamp_millis_opt(epoch).single()
    } else {
        Utc.timestamp_opt(epoch, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_all_supported_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();

        assert_eq!(parse_timestamp(&json!(1_704_412_800)), Some(expected));
        assert_eq!(parse_timestamp(&json!(1_704_412_800_000i64)), Some(expected));
        assert_eq!(parse_timestamp(&json!("2024-01-05")), Some(expected));
        assert_eq!(
            parse_timestamp(&json!("2024-01-05T00:00:00+00:00")),
            Some(expected)
        );
        assert_eq!(parse_timestamp(&json!("yesterday")), None);
    }

    #[test]
    fn numeric_strings_are_numbers() {
        assert_eq!(value_to_f64(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(value_to_f64(&json!(3)), Some(3.0));
        assert_eq!(value_to_f64(&json!("")), None);
        assert_eq!(value_to_f64(&Value::Null), None);
    }

    #[test]
    fn aliases_match_ignoring_case_and_punctuation() {
        let value = json!({ "Market_Capitalization": 10 });
        let object = value.as_object().unwrap();
        assert!(find_value(object, &["marketCapitalization"]).is_some());
    }
}
