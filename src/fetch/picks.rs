use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
use serde_json::Value;

use crate::error::AppError;
use crate::fetch::decode::{find_value, record_array, value_to_f64, value_to_string};
use crate::fetch::FetchResult;

/// A ticker offered by the top-picks endpoint, with whatever profile fields came with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    pub ticker: String,
    /// In millions, as served by the backend.
    pub market_capitalization: Option<f64>,
    pub details: BTreeMap<String, String>,
}

impl Symbol {
    pub fn new(ticker: impl Into<String>, market_capitalization: Option<f64>) -> Self {
        Self {
            ticker: ticker.into(),
            market_capitalization,
            details: BTreeMap::new(),
        }
    }

    /// True when the capitalization is known and at least `threshold`.
    pub fn meets_market_cap(&self, threshold: f64) -> bool {
        self.market_capitalization
            .map(|cap| cap >= threshold)
            .unwrap_or(false)
    }
}

/// Decode the top-picks payload. Duplicate tickers keep their first occurrence.
pub fn decode_top_picks(body: &str) -> FetchResult<Vec<Symbol>> {
    let root: Value = serde_json::from_str(body)?;
    let entries = record_array(&root, &["symbols", "data", "top_picks"])?;

    let mut seen = HashSet::new();
    let mut symbols = Vec::with_capacity(entries.len());
    for entry in entries {
        let symbol = match entry {
            Value::String(ticker) => Symbol::new(ticker.trim(), None),
            Value::Object(object) => {
                let Some(ticker) = find_value(object, &["symbol", "ticker"])
                    .map(value_to_string)
                    .map(|t| t.trim().to_string())
                else {
                    warn!("top pick without a symbol field skipped");
                    continue;
                };
                let market_capitalization =
                    find_value(object, &["marketCapitalization"]).and_then(value_to_f64);
                let details = object
                    .iter()
                    .filter(|(key, _)| {
                        !matches!(key.as_str(), "symbol" | "ticker" | "marketCapitalization")
                    })
                    .map(|(key, value)| (key.clone(), value_to_string(value)))
                    .collect();
                Symbol {
                    ticker,
                    market_capitalization,
                    details,
                }
            }
            other => {
                debug!("unexpected top pick entry skipped: {}", other);
                continue;
            }
        };

        if symbol.ticker.is_empty() || !seen.insert(symbol.ticker.clone()) {
            continue;
        }
        symbols.push(symbol);
    }

    if symbols.is_empty() {
        return Err(AppError::empty("symbols"));
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_symbol_records_with_metadata() {
        let body = r#"[
            {"symbol": "AAA", "marketCapitalization": 10.5, "name": "Alpha", "finnhubIndustry": "Tech"},
            {"symbol": "BBB", "marketCapitalization": "5"},
            {"symbol": "AAA", "marketCapitalization": 99},
            {"name": "no ticker"},
            "CCC"
        ]"#;

        let symbols = decode_top_picks(body).unwrap();

        let tickers: Vec<&str> = symbols.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers, ["AAA", "BBB", "CCC"]);
        assert_eq!(symbols[0].market_capitalization, Some(10.5));
        assert_eq!(symbols[0].details.get("name").map(String::as_str), Some("Alpha"));
        assert!(!symbols[0].details.contains_key("symbol"));
        assert!(!symbols[0].details.contains_key("marketCapitalization"));
        assert_eq!(symbols[1].market_capitalization, Some(5.0));
        assert_eq!(symbols[2].market_capitalization, None);
    }

    #[test]
    fn wrapped_payload_is_accepted() {
        let body = r#"{"symbols": [{"symbol": "ZZZ", "marketCapitalization": 1}]}"#;
        assert_eq!(decode_top_picks(body).unwrap().len(), 1);
    }

    #[test]
    fn empty_list_is_an_empty_result() {
        assert!(matches!(decode_top_picks("[]"), Err(AppError::EmptyResult(_))));
        assert!(matches!(
            decode_top_picks(r#"{"symbols": []}"#),
            Err(AppError::EmptyResult(_))
        ));
    }

    #[test]
    fn unknown_capitalization_never_meets_a_threshold() {
        let symbol = Symbol::new("AAA", None);
        assert!(!symbol.meets_market_cap(0.0));
        assert!(Symbol::new("BBB", Some(0.0)).meets_market_cap(0.0));
    }
}
