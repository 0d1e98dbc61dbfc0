use serde_json::Value;

use crate::error::AppError;
use crate::fetch::decode::{find_value, normalize_key, value_to_string};
use crate::fetch::FetchResult;

/// Profile fields shown first, in this order, with their display labels.
const KNOWN_FIELDS: &[(&str, &[&str])] = &[
    ("Name", &["name"]),
    ("Exchange", &["exchange"]),
    ("Industry", &["finnhubIndustry", "industry"]),
    ("Country", &["country"]),
    ("Currency", &["currency"]),
    ("IPO", &["ipo"]),
    ("Shares outstanding", &["shareOutstanding"]),
    ("Web", &["weburl", "url"]),
];

/// Skipped: the ticker and capitalization are shown from the top-pick entry, the logo is an image.
const OMITTED: &[&str] = &["ticker", "symbol", "marketcapitalization", "logo"];

/// Company description served by `/company-profile/{symbol}`, as ordered label/value rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyProfile {
    pub fields: Vec<(String, String)>,
}

#[cfg(test)]
impl CompanyProfile {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }
}

/// Decode a flat profile object. Known fields come first under friendly labels, the remaining
/// scalar fields follow under their own keys. An object without any usable field is an
/// [`AppError::EmptyResult`].
pub fn decode_profile(body: &str, symbol: &str) -> FetchResult<CompanyProfile> {
    let root: Value = serde_json::from_str(body)?;
    let object = match &root {
        Value::Object(object) => object,
        Value::Array(items) => match items.first() {
            Some(Value::Object(object)) => object,
            _ => return Err(AppError::empty(format!("company profile for {}", symbol))),
        },
        other => {
            return Err(AppError::decode(format!(
                "company profile for {} is not an object: {}",
                symbol, other
            )))
        }
    };

    let mut fields = Vec::new();
    let mut used = Vec::new();
    for (label, aliases) in KNOWN_FIELDS {
        let Some(value) = find_value(object, aliases).filter(|value| is_shown(value)) else {
            continue;
        };
        fields.push((label.to_string(), value_to_string(value)));
        used.extend(aliases.iter().map(|alias| normalize_key(alias)));
    }

    for (key, value) in object {
        let normalized = normalize_key(key);
        if used.contains(&normalized) || OMITTED.contains(&normalized.as_str()) || !is_shown(value)
        {
            continue;
        }
        fields.push((key.clone(), value_to_string(value)));
    }

    if fields.is_empty() {
        return Err(AppError::empty(format!("company profile for {}", symbol)));
    }
    Ok(CompanyProfile { fields })
}

fn is_shown(value: &Value) -> bool {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_lead_in_display_order() {
        let body = r#"{
            "ticker": "AAA",
            "weburl": "https://alpha.example.com",
            "name": "Alpha Corp",
            "marketCapitalization": 2500,
            "finnhubIndustry": "Semiconductors",
            "logo": "https://static.example.com/aaa.png",
            "phone": "555-0100",
            "exchange": ""
        }"#;

        let profile = decode_profile(body, "AAA").unwrap();

        let labels: Vec<&str> = profile.fields.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Industry", "Web", "phone"]);
        assert_eq!(profile.get("Name"), Some("Alpha Corp"));
        assert_eq!(profile.get("Exchange"), None);
    }

    #[test]
    fn empty_profile_is_an_empty_result() {
        assert!(matches!(
            decode_profile("{}", "ZZZ"),
            Err(AppError::EmptyResult(what)) if what == "company profile for ZZZ"
        ));
        assert!(matches!(
            decode_profile(r#"{"ticker": "ZZZ", "logo": ""}"#, "ZZZ"),
            Err(AppError::EmptyResult(_))
        ));
        assert!(matches!(decode_profile("42", "ZZZ"), Err(AppError::Decode(_))));
    }
}
