use clap::Parser;

use top_picks_dash::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = top_picks_dash::app::run(cli).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
