use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::error::Result;
use crate::fetch::request::derive_base_url;
use crate::ui::adapter::{ChartType, ContainerId, Theme};

pub mod loader;
pub mod validator;

pub use loader::load_config;

/// Environment variable overriding the configured page URL.
pub const PAGE_URL_ENV: &str = "TOP_PICKS_PAGE_URL";

/// Paths of the backend endpoints, relative to the base URL. `{symbol}` is substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub top_picks: String,
    pub history: String,
    pub indicators: String,
    pub company_profile: String,
}

/// Layout regions charts and tables are bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct Containers {
    pub main: ContainerId,
    pub pie: ContainerId,
    pub gauge: ContainerId,
    pub profile: ContainerId,
}

impl Containers {
    pub fn all(&self) -> [&ContainerId; 4] {
        [&self.main, &self.pie, &self.gauge, &self.profile]
    }
}

/// One entry of the chart-type selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOption {
    pub label: String,
    pub chart_type: ChartType,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub page_url: String,
    pub endpoints: Endpoints,
    pub request_timeout: Duration,
    pub containers: Containers,
    pub chart_options: Vec<ChartOption>,
    /// Minimum market capitalization choices, in millions. The first entry means "no minimum".
    pub market_cap_options: Vec<f64>,
    pub snackbar_ttl: Duration,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            page_url: "http://localhost:5000/".to_string(),
            endpoints: Endpoints {
                top_picks: "/fh/top-picks".to_string(),
                history: "/fh/hist/{symbol}".to_string(),
                indicators: "/fh/aggregate-indicators/{symbol}".to_string(),
                company_profile: "/fh/company-profile/{symbol}".to_string(),
            },
            request_timeout: Duration::from_secs(10),
            containers: Containers {
                main: ContainerId::new("main-chart"),
                pie: ContainerId::new("pie-chart"),
                gauge: ContainerId::new("gauge-chart"),
                profile: ContainerId::new("profile-container"),
            },
            chart_options: vec![
                ChartOption {
                    label: "Candlestick (dark)".to_string(),
                    chart_type: ChartType::Candlestick,
                    theme: Theme::Dark,
                },
                ChartOption {
                    label: "Candlestick (light)".to_string(),
                    chart_type: ChartType::Candlestick,
                    theme: Theme::Light,
                },
                ChartOption {
                    label: "Line (dark)".to_string(),
                    chart_type: ChartType::Line,
                    theme: Theme::Dark,
                },
                ChartOption {
                    label: "Line (light)".to_string(),
                    chart_type: ChartType::Line,
                    theme: Theme::Light,
                },
            ],
            market_cap_options: vec![0.0, 1_000.0, 10_000.0, 100_000.0, 500_000.0],
            snackbar_ttl: Duration::from_secs(3),
            tick_rate: Duration::from_millis(150),
            log_file: Some(PathBuf::from("top-picks-dash.log")),
        }
    }

    /// Built-in defaults, or the JSON file at `path` when given. The page URL can be overridden
    /// through [`PAGE_URL_ENV`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => load_config(path)?,
            None => Config::builtin(),
        };

        if let Ok(url) = std::env::var(PAGE_URL_ENV) {
            if !url.trim().is_empty() {
                config.page_url = url.trim().to_string();
            }
        }

        validator::validate_config(&config)?;
        Ok(config)
    }

    pub fn base_url(&self) -> Result<Url> {
        derive_base_url(&self.page_url)
    }
}
