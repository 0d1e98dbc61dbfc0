use std::sync::Arc;

use crate::fetch::{AggregateIndicators, CompanyProfile, Symbol, TimeSeries};

/// Symbols whose market capitalization is at least `threshold`, in input order.
pub fn filter_by_market_cap(symbols: &[Symbol], threshold: f64) -> Vec<&Symbol> {
    symbols
        .iter()
        .filter(|symbol| symbol.meets_market_cap(threshold))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption<T> {
    pub text: String,
    pub value: T,
}

impl<T> SelectOption<T> {
    pub fn new(text: impl Into<String>, value: T) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Dropdown model: an ordered option list with at most one selected entry.
#[derive(Clone, Debug)]
pub struct Selector<T> {
    options: Vec<SelectOption<T>>,
    selected: Option<usize>,
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
        }
    }
}

impl<T> Selector<T> {
    /// Build a selector with the first option selected.
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        let mut selector = Self::default();
        selector.replace(options);
        selector
    }

    /// Swap in a new option list and select its first entry.
    pub fn replace(&mut self, options: Vec<SelectOption<T>>) {
        self.selected = if options.is_empty() { None } else { Some(0) };
        self.options = options;
    }

    /// Returns `false` when `index` is out of range; the selection is left as it was.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub fn position(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SelectOption<T>> {
        self.selected.and_then(|index| self.options.get(index))
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.selected().map(|option| &option.value)
    }

    /// Index `step` entries away from the current selection, wrapping around.
    pub fn neighbour(&self, step: isize) -> Option<usize> {
        let len = self.options.len() as isize;
        if len == 0 {
            return None;
        }
        let current = self.selected.unwrap_or(0) as isize;
        Some((current + step).rem_euclid(len) as usize)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Issues monotonically increasing request ids; only the most recent one is current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

/// Data fetched for one symbol.
#[derive(Clone, Debug)]
pub struct Loaded<T> {
    pub symbol: String,
    pub data: Arc<T>,
}

impl<T> Loaded<T> {
    pub fn new(symbol: impl Into<String>, data: T) -> Self {
        Self {
            symbol: symbol.into(),
            data: Arc::new(data),
        }
    }

    pub fn is_for(&self, symbol: &str) -> bool {
        self.symbol == symbol
    }
}

pub type LoadedSeries = Loaded<TimeSeries>;
pub type LoadedIndicators = Loaded<AggregateIndicators>;
pub type LoadedProfile = Loaded<CompanyProfile>;
