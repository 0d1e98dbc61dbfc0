use futures::future::BoxFuture;

use crate::error::Result;

pub mod decode;
pub mod dispatch;
pub mod history;
pub mod http;
pub mod indicators;
pub mod picks;
pub mod profile;
pub mod request;

pub use dispatch::{FetchDispatch, FetchEvent, Fetcher};
pub use history::{Candle, Ohlc, TimeSeries};
pub use http::HttpDataSource;
pub use indicators::AggregateIndicators;
pub use picks::Symbol;
pub use profile::CompanyProfile;

pub type FetchResult<T> = Result<T>;

/// Where the dashboard's market data comes from.
pub trait MarketDataSource: Send + Sync + 'static {
    fn top_picks(&self) -> BoxFuture<'_, FetchResult<Vec<Symbol>>>;
    fn series(&self, symbol: String) -> BoxFuture<'_, FetchResult<TimeSeries>>;
    fn indicators(&self, symbol: String) -> BoxFuture<'_, FetchResult<AggregateIndicators>>;
    fn profile(&self, symbol: String) -> BoxFuture<'_, FetchResult<CompanyProfile>>;
}
