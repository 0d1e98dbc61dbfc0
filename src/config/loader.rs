use std::{fs, path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::error::{Context, Result};
use crate::ui::adapter::{ChartType, ContainerId, Theme};

use super::{ChartOption, Config, Containers, Endpoints};

/// Read a dashboard configuration JSON file. Missing fields fall back to the built-in defaults.
/// The result is not validated; [`Config::load`] does that once overrides are applied.
pub fn load_config(path: &Path) -> Result<Config> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read dashboard config at {}", path.display()))?;

    let raw: RawConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse dashboard config at {}", path.display()))?;

    Ok(raw.into_config(Config::builtin()))
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    page_url: Option<String>,
    #[serde(default)]
    endpoints: RawEndpoints,
    #[serde(default)]
    request_timeout_ms: Option<u64>,
    #[serde(default)]
    containers: RawContainers,
    #[serde(default)]
    chart_options: Option<Vec<RawChartOption>>,
    #[serde(default)]
    market_cap_options: Option<Vec<f64>>,
    #[serde(default)]
    snackbar_ttl_ms: Option<u64>,
    #[serde(default)]
    tick_rate_ms: Option<u64>,
    #[serde(default)]
    log_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawEndpoints {
    top_picks: Option<String>,
    history: Option<String>,
    indicators: Option<String>,
    company_profile: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawContainers {
    main: Option<String>,
    pie: Option<String>,
    gauge: Option<String>,
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChartOption {
    #[serde(default)]
    label: Option<String>,
    #[serde(rename = "type")]
    chart_type: ChartType,
    theme: Theme,
}

impl RawConfig {
    fn into_config(self, defaults: Config) -> Config {
        let container = |raw: Option<String>, fallback: ContainerId| {
            raw.map(ContainerId::new).unwrap_or(fallback)
        };

        let chart_options = match self.chart_options {
            Some(options) => options
                .into_iter()
                .map(RawChartOption::into_option)
                .collect(),
            None => defaults.chart_options,
        };

        Config {
            page_url: self.page_url.unwrap_or(defaults.page_url),
            endpoints: Endpoints {
                top_picks: self
                    .endpoints
                    .top_picks
                    .unwrap_or(defaults.endpoints.top_picks),
                history: self.endpoints.history.unwrap_or(defaults.endpoints.history),
                indicators: self
                    .endpoints
                    .indicators
                    .unwrap_or(defaults.endpoints.indicators),
                company_profile: self
                    .endpoints
                    .company_profile
                    .unwrap_or(defaults.endpoints.company_profile),
            },
            request_timeout: self
                .request_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            containers: Containers {
                main: container(self.containers.main, defaults.containers.main),
                pie: container(self.containers.pie, defaults.containers.pie),
                gauge: container(self.containers.gauge, defaults.containers.gauge),
                profile: container(self.containers.profile, defaults.containers.profile),
            },
            chart_options,
            market_cap_options: self
                .market_cap_options
                .unwrap_or(defaults.market_cap_options),
            snackbar_ttl: self
                .snackbar_ttl_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.snackbar_ttl),
            tick_rate: self
                .tick_rate_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_rate),
            log_file: self.log_file.map(PathBuf::from).or(defaults.log_file),
        }
    }
}

impl RawChartOption {
    fn into_option(self) -> ChartOption {
        let label = self.label.unwrap_or_else(|| {
            format!("{} ({})", self.chart_type.label(), self.theme.label())
        });
        ChartOption {
            label,
            chart_type: self.chart_type,
            theme: self.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bundled_dashboard_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("configs")
            .join("dashboard.json");

        let config = load_config(&path).expect("bundled config");

        assert_eq!(config.endpoints.history, "/fh/hist/{symbol}");
        assert_eq!(
            config.endpoints.company_profile,
            "/fh/company-profile/{symbol}"
        );
        assert_eq!(config.containers.main.as_str(), "main-chart");
        assert_eq!(config.market_cap_options[0], 0.0);
        assert!(!config.chart_options.is_empty());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let raw: RawConfig = serde_json::from_str(
            r#"{
                "page_url": "http://10.0.0.2:8000/app",
                "chart_options": [{"type": "line", "theme": "light"}],
                "tick_rate_ms": 50
            }"#,
        )
        .unwrap();

        let config = raw.into_config(Config::builtin());

        assert_eq!(config.page_url, "http://10.0.0.2:8000/app");
        assert_eq!(config.tick_rate, Duration::from_millis(50));
        assert_eq!(config.chart_options.len(), 1);
        assert_eq!(config.chart_options[0].label, "Line (light)");
        assert_eq!(config.endpoints.top_picks, "/fh/top-picks");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn unknown_chart_type_is_rejected() {
        let parsed: std::result::Result<RawConfig, _> = serde_json::from_str(
            r#"{"chart_options": [{"type": "radar", "theme": "dark"}]}"#,
        );
        assert!(parsed.is_err());
    }
}
