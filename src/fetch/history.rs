use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::error::AppError;
use crate::fetch::decode::{find_value, parse_timestamp, record_array, value_to_f64};
use crate::fetch::FetchResult;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One row of a [`TimeSeries`], as used by the chart painters.
#[derive(Clone, Debug, PartialEq)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Parallel date / OHLC / volume columns. The three columns always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    dates: Vec<DateTime<Utc>>,
    values: Vec<Ohlc>,
    volumes: Vec<f64>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series ordered by timestamp from unordered candles.
    pub fn from_candles(mut candles: Vec<Candle>) -> Self {
        candles.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        let mut series = Self {
            dates: Vec::with_capacity(candles.len()),
            values: Vec::with_capacity(candles.len()),
            volumes: Vec::with_capacity(candles.len()),
        };
        for candle in candles {
            series.push(
                candle.timestamp,
                Ohlc {
                    open: candle.open,
                    high: candle.high,
                    low: candle.low,
                    close: candle.close,
                },
                candle.volume,
            );
        }
        series
    }

    pub fn push(&mut self, date: DateTime<Utc>, value: Ohlc, volume: f64) {
        self.dates.push(date);
        self.values.push(value);
        self.volumes.push(volume);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    pub fn values(&self) -> &[Ohlc] {
        &self.values
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn candle(&self, index: usize) -> Option<Candle> {
        let date = self.dates.get(index)?;
        let value = self.values.get(index)?;
        let volume = self.volumes.get(index)?;
        Some(Candle {
            timestamp: *date,
            open: value.open,
            high: value.high,
            low: value.low,
            close: value.close,
            volume: *volume,
        })
    }

    pub fn candles(&self) -> Vec<Candle> {
        (0..self.len()).filter_map(|idx| self.candle(idx)).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.values.last().map(|value| value.close)
    }

    /// Lowest low and highest high across the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let low = self
            .values
            .iter()
            .map(|v| v.low)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))?;
        let high = self
            .values
            .iter()
            .map(|v| v.high)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))?;
        Some((low, high))
    }
}

/// Decode the `/hist/{symbol}` payload: rows of `{time, open, high, low, close, volume}`
/// (short `t/o/h/l/c/v` keys are accepted too). Malformed rows are skipped; a payload without a
/// single usable row is an [`AppError::EmptyResult`].
pub fn decode_series(body: &str, symbol: &str) -> FetchResult<TimeSeries> {
    let root: Value = serde_json::from_str(body)?;
    let rows = record_array(&root, &["candles", "data", "history"])?;

    let mut candles = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        let Some(object) = row.as_object() else {
            skipped += 1;
            continue;
        };

        let Some(timestamp) = find_value(object, &["time", "t", "date"]).and_then(parse_timestamp)
        else {
            skipped += 1;
            continue;
        };

        let field = |aliases: &[&str]| find_value(object, aliases).and_then(value_to_f64);
        let (Some(open), Some(high), Some(low), Some(close)) = (
            field(&["open", "o"]),
            field(&["high", "h"]),
            field(&["low", "l"]),
            field(&["close", "c"]),
        ) else {
            skipped += 1;
            continue;
        };
        let volume = field(&["volume", "v"]).unwrap_or(0.0);

        candles.push(Candle {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    if skipped > 0 {
        debug!("skipped {} malformed history rows for {}", skipped, symbol);
    }

    if candles.is_empty() {
        return Err(AppError::empty(format!("price history for {}", symbol)));
    }

    Ok(TimeSeries::from_candles(candles))
}
