use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use volby_scraper::config::Config;
use volby_scraper::error::*;
use volby_scraper::http_client::Downloader;

/// Scrapes the election results of a district into a CSV file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of a district-level results page (ps32)
    url: String,

    /// Name of the CSV file to write; ".csv" is appended when missing
    output: String,

    /// TOML file overriding the built-in site markers and timeout
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match actual_main(cli) {
        Ok(output) => info!("Done. Data saved to {}", output.display()),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

// We write a function so that we can return a `Result` and use `?`
fn actual_main(cli: Cli) -> Result<PathBuf> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default()
    };
    let dl = Downloader::new(Duration::from_secs(config.timeout_secs))?;

    volby_scraper::run(&dl, &config, &cli.url, &cli.output)
}
