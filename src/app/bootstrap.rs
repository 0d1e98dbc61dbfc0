use std::fs::OpenOptions;
use std::path::Path;

use log::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Context, Result};
use crate::fetch::HttpDataSource;
use crate::ui::run_dashboard;

/// Entry point used by `main`: logging, configuration, backend client, then the dashboard.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.page_url = url;
        crate::config::validator::validate_config(&config)?;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }

    init_logging(config.log_file.as_deref())?;
    info!("starting dashboard against {}", config.page_url);

    let source = HttpDataSource::new(&config)?;
    run_dashboard(&config, source).await
}

/// Log to a file so output does not tear the alternate screen. `RUST_LOG` sets the filter.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}
