use serde::Deserialize;

use crate::fetch::FetchResult;

/// Aggregate technical signal for one symbol: how many indicators say buy / neutral / sell,
/// plus the ADX trend strength.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateIndicators {
    pub buy: u32,
    pub neutral: u32,
    pub sell: u32,
    pub signal: String,
    pub adx: f64,
    pub trending: bool,
}

impl AggregateIndicators {
    pub fn total(&self) -> u32 {
        self.buy + self.neutral + self.sell
    }

    pub fn slices(&self) -> Vec<(String, f64)> {
        vec![
            ("buy".to_string(), f64::from(self.buy)),
            ("neutral".to_string(), f64::from(self.neutral)),
            ("sell".to_string(), f64::from(self.sell)),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawAggregate {
    #[serde(rename = "technicalAnalysis", default)]
    technical_analysis: RawTechnicalAnalysis,
    #[serde(default)]
    trend: RawTrend,
}

#[derive(Debug, Default, Deserialize)]
struct RawTechnicalAnalysis {
    #[serde(default)]
    count: RawCount,
    #[serde(default)]
    signal: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawCount {
    #[serde(default)]
    buy: u32,
    #[serde(default)]
    neutral: u32,
    #[serde(default)]
    sell: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RawTrend {
    #[serde(default)]
    adx: f64,
    #[serde(default)]
    trending: bool,
}

pub fn decode_indicators(body: &str) -> FetchResult<AggregateIndicators> {
    let raw: RawAggregate = serde_json::from_str(body)?;
    Ok(AggregateIndicators {
        buy: raw.technical_analysis.count.buy,
        neutral: raw.technical_analysis.count.neutral,
        sell: raw.technical_analysis.count.sell,
        signal: raw.technical_analysis.signal,
        adx: raw.trend.adx,
        trending: raw.trend.trending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_aggregate_indicator_payload() {
        let body = r#"{
            "technicalAnalysis": {"count": {"buy": 6, "neutral": 7, "sell": 4}, "signal": "neutral"},
            "trend": {"adx": 24.47, "trending": false}
        }"#;

        let indicators = decode_indicators(body).unwrap();

        assert_eq!(indicators.total(), 17);
        assert_eq!(indicators.signal, "neutral");
        assert!((indicators.adx - 24.47).abs() < 1e-9);
        assert_eq!(indicators.slices()[2], ("sell".to_string(), 4.0));
    }

    #[test]
    fn missing_sections_default_to_zero() {
        let indicators = decode_indicators("{}").unwrap();
        assert_eq!(indicators, AggregateIndicators::default());
    }
}
