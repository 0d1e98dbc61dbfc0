use futures::future::{BoxFuture, FutureExt};
use log::{info, warn};
use reqwest::{header::ACCEPT, Client, Url};

use crate::config::{Config, Endpoints};
use crate::error::{AppError, Context, Result};
use crate::fetch::history::{decode_series, TimeSeries};
use crate::fetch::indicators::{decode_indicators, AggregateIndicators};
use crate::fetch::picks::{decode_top_picks, Symbol};
use crate::fetch::profile::{decode_profile, CompanyProfile};
use crate::fetch::request::endpoint_url;
use crate::fetch::{FetchResult, MarketDataSource};

/// Backend client for the `/fh` endpoints, rooted at the base URL derived from the page URL.
pub struct HttpDataSource {
    client: Client,
    base: Url,
    endpoints: Endpoints,
}

impl HttpDataSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to construct backend HTTP client")?;
        let base = config.base_url()?;
        info!("backend base URL: {}", base);

        Ok(Self {
            client,
            base,
            endpoints: config.endpoints.clone(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    async fn get_text(&self, url: Url) -> FetchResult<String> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                warn!("request to {} failed: {}", url, err);
                AppError::network(format!("request to {} failed: {}", url, err))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(AppError::network(format!(
                "{} returned status {}",
                url, status
            )));
        }

        response
            .text()
            .await
            .map_err(|err| AppError::network(format!("failed to read body from {}: {}", url, err)))
    }
}

impl MarketDataSource for HttpDataSource {
    fn top_picks(&self) -> BoxFuture<'_, FetchResult<Vec<Symbol>>> {
        async move {
            let url = endpoint_url(&self.base, &self.endpoints.top_picks, None)?;
            let body = self.get_text(url).await?;
            decode_top_picks(&body)
        }
        .boxed()
    }

    fn series(&self, symbol: String) -> BoxFuture<'_, FetchResult<TimeSeries>> {
        async move {
            let url = endpoint_url(&self.base, &self.endpoints.history, Some(&symbol))?;
            let body = self.get_text(url).await?;
            decode_series(&body, &symbol)
        }
        .boxed()
    }

    fn indicators(&self, symbol: String) -> BoxFuture<'_, FetchResult<AggregateIndicators>> {
        async move {
            let url = endpoint_url(&self.base, &self.endpoints.indicators, Some(&symbol))?;
            let body = self.get_text(url).await?;
            decode_indicators(&body)
        }
        .boxed()
    }

    fn profile(&self, symbol: String) -> BoxFuture<'_, FetchResult<CompanyProfile>> {
        async move {
            let url = endpoint_url(&self.base, &self.endpoints.company_profile, Some(&symbol))?;
            let body = self.get_text(url).await?;
            decode_profile(&body, &symbol)
        }
        .boxed()
    }
}
