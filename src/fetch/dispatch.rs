use std::sync::Arc;

use log::warn;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::fetch::history::TimeSeries;
use crate::fetch::indicators::AggregateIndicators;
use crate::fetch::picks::Symbol;
use crate::fetch::profile::CompanyProfile;
use crate::fetch::{FetchResult, MarketDataSource};

/// Completed fetch, delivered back to the UI loop. Per-symbol results carry the sequence
/// number of the selection that requested them.
#[derive(Debug)]
pub enum FetchEvent {
    TopPicks(FetchResult<Vec<Symbol>>),
    Series {
        seq: u64,
        symbol: String,
        result: FetchResult<TimeSeries>,
    },
    Indicators {
        seq: u64,
        symbol: String,
        result: FetchResult<AggregateIndicators>,
    },
    Profile {
        seq: u64,
        symbol: String,
        result: FetchResult<CompanyProfile>,
    },
}

/// Fire-and-forget request side used by the controller. Results arrive later as
/// [`FetchEvent`]s.
pub trait FetchDispatch {
    fn load_top_picks(&mut self);
    fn load_series(&mut self, seq: u64, symbol: &str);
    fn load_indicators(&mut self, seq: u64, symbol: &str);
    fn load_profile(&mut self, seq: u64, symbol: &str);
}

/// Runs every request as its own tokio task and reports through an unbounded channel.
pub struct Fetcher<S: MarketDataSource> {
    source: Arc<S>,
    runtime: Handle,
    events: UnboundedSender<FetchEvent>,
}

impl<S: MarketDataSource> Fetcher<S> {
    pub fn new(source: S, runtime: Handle) -> (Self, UnboundedReceiver<FetchEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                source: Arc::new(source),
                runtime,
                events,
            },
            rx,
        )
    }
}

impl<S: MarketDataSource> FetchDispatch for Fetcher<S> {
    fn load_top_picks(&mut self) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = source.top_picks().await;
            deliver(&events, FetchEvent::TopPicks(result));
        });
    }

    fn load_series(&mut self, seq: u64, symbol: &str) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let symbol = symbol.to_string();
        self.runtime.spawn(async move {
            let result = source.series(symbol.clone()).await;
            deliver(
                &events,
                FetchEvent::Series {
                    seq,
                    symbol,
                    result,
                },
            );
        });
    }

    fn load_indicators(&mut self, seq: u64, symbol: &str) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let symbol = symbol.to_string();
        self.runtime.spawn(async move {
            let result = source.indicators(symbol.clone()).await;
            deliver(
                &events,
                FetchEvent::Indicators {
                    seq,
                    symbol,
                    result,
                },
            );
        });
    }

    fn load_profile(&mut self, seq: u64, symbol: &str) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let symbol = symbol.to_string();
        self.runtime.spawn(async move {
            let result = source.profile(symbol.clone()).await;
            deliver(
                &events,
                FetchEvent::Profile {
                    seq,
                    symbol,
                    result,
                },
            );
        });
    }
}

/// Hand a finished fetch to the UI loop. Returns `false` once the dashboard has gone away.
fn deliver(events: &UnboundedSender<FetchEvent>, event: FetchEvent) -> bool {
    let kind = event.kind();
    match events.send(event) {
        Ok(()) => true,
        Err(_) => {
            warn!("{} arrived after the dashboard closed", kind);
            false
        }
    }
}

impl FetchEvent {
    fn kind(&self) -> String {
        match self {
            FetchEvent::TopPicks(_) => "top picks".to_string(),
            FetchEvent::Series { symbol, .. } => format!("series for {}", symbol),
            FetchEvent::Indicators { symbol, .. } => format!("indicators for {}", symbol),
            FetchEvent::Profile { symbol, .. } => format!("profile for {}", symbol),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FetchDispatch;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Request {
        TopPicks,
        Series(u64, String),
        Indicators(u64, String),
        Profile(u64, String),
    }

    /// Dispatcher double that only records what was asked for.
    #[derive(Default)]
    pub struct RecordingDispatch {
        pub requests: Vec<Request>,
    }

    impl RecordingDispatch {
        pub fn series_requests(&self) -> Vec<(u64, String)> {
            self.requests
                .iter()
                .filter_map(|request| match request {
                    Request::Series(seq, symbol) => Some((*seq, symbol.clone())),
                    _ => None,
                })
                .collect()
        }
    }

    impl FetchDispatch for RecordingDispatch {
        fn load_top_picks(&mut self) {
            self.requests.push(Request::TopPicks);
        }

        fn load_series(&mut self, seq: u64, symbol: &str) {
            self.requests.push(Request::Series(seq, symbol.to_string()));
        }

        fn load_indicators(&mut self, seq: u64, symbol: &str) {
            self.requests
                .push(Request::Indicators(seq, symbol.to_string()));
        }

        fn load_profile(&mut self, seq: u64, symbol: &str) {
            self.requests.push(Request::Profile(seq, symbol.to_string()));
        }
    }
}
