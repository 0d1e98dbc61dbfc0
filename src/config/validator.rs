use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::fetch::request::derive_base_url;

use super::{Config, Endpoints};

/// Validate a dashboard configuration and surface every issue at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_page_url(&config.page_url, &mut issues);
    validate_endpoints(&config.endpoints, &mut issues);
    validate_containers(config, &mut issues);
    validate_chart_options(config, &mut issues);
    validate_market_caps(&config.market_cap_options, &mut issues);

    if config.tick_rate.is_zero() {
        issues.push("tick_rate_ms must be greater than zero".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "dashboard config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_page_url(page_url: &str, issues: &mut Vec<String>) {
    if page_url.trim().is_empty() {
        issues.push("page_url must not be empty".to_string());
        return;
    }
    if let Err(err) = derive_base_url(page_url) {
        issues.push(format!("page_url `{page_url}` is unusable: {err}"));
    }
}

fn validate_endpoints(endpoints: &Endpoints, issues: &mut Vec<String>) {
    if endpoints.top_picks.trim().is_empty() {
        issues.push("endpoints.top_picks must not be empty".to_string());
    }

    for (name, template) in [
        ("history", &endpoints.history),
        ("indicators", &endpoints.indicators),
        ("company_profile", &endpoints.company_profile),
    ] {
        if !template.contains("{symbol}") {
            issues.push(format!(
                "endpoints.{name} should reference `{{symbol}}` for ticker substitution"
            ));
        }
    }
}

fn validate_containers(config: &Config, issues: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in config.containers.all() {
        if id.as_str().trim().is_empty() {
            issues.push("container ids must not be empty".to_string());
        } else if !seen.insert(id.as_str()) {
            issues.push(format!("container id `{id}` is used more than once"));
        }
    }
}

fn validate_chart_options(config: &Config, issues: &mut Vec<String>) {
    if config.chart_options.is_empty() {
        issues.push("chart_options must define at least one entry".to_string());
    }
}

fn validate_market_caps(options: &[f64], issues: &mut Vec<String>) {
    let Some(first) = options.first() else {
        issues.push("market_cap_options must define at least one entry".to_string());
        return;
    };

    if *first != 0.0 {
        issues.push("market_cap_options must start with 0 (no minimum)".to_string());
    }

    if options.iter().any(|value| !value.is_finite() || *value < 0.0) {
        issues.push("market_cap_options must be finite and non-negative".to_string());
    }

    if options.windows(2).any(|pair| pair[0] >= pair[1]) {
        issues.push("market_cap_options must be strictly increasing".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::adapter::ContainerId;

    #[test]
    fn reports_all_issues_together() {
        let mut config = Config::builtin();
        config.page_url = "nonsense".to_string();
        config.endpoints.history = "/fh/hist".to_string();
        config.chart_options.clear();

        let message = validate_config(&config).unwrap_err().to_string();

        assert!(message.contains("page_url"), "{message}");
        assert!(message.contains("endpoints.history"), "{message}");
        assert!(message.contains("chart_options"), "{message}");
    }

    #[test]
    fn rejects_duplicate_containers() {
        let mut config = Config::builtin();
        config.containers.gauge = ContainerId::new("pie-chart");

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("used more than once"), "{message}");
    }

    #[test]
    fn market_caps_must_start_at_zero_and_increase() {
        let mut config = Config::builtin();
        config.market_cap_options = vec![10.0, 5.0];

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("start with 0"), "{message}");
        assert!(message.contains("strictly increasing"), "{message}");
    }
}
