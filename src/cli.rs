use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "top-picks-dash")]
#[command(about = "Terminal dashboard for the top-picks stock backend")]
#[command(version)]
pub struct Cli {
    /// Dashboard config JSON; built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page URL the backend base URL is derived from. Overrides config and TOP_PICKS_PAGE_URL.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Where log output goes.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "top-picks-dash",
            "--config",
            "assets/configs/dashboard.json",
            "-u",
            "http://10.0.0.5:5000/",
        ]);

        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("assets/configs/dashboard.json"))
        );
        assert_eq!(cli.url.as_deref(), Some("http://10.0.0.5:5000/"));
        assert!(cli.log_file.is_none());
    }
}
