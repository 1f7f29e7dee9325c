// src/bin/cli.rs

//! Course catalog scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use catalog_scraper::{
    error::Result,
    models::Config,
    pipeline,
    storage::CsvReport,
    utils::{http::HttpSource, log as console},
};
use clap::{Parser, Subcommand};

/// Scrape a university course catalog into a CSV course list
#[derive(Parser, Debug)]
#[command(name = "catalog-scraper", version, about = "Course Catalog Scraper")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "catalog.toml")]
    config: PathBuf,

    /// Override the catalog origin (e.g. https://catalog.drexel.edu)
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Override the CSV output path
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors to the console
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover department pages, extract courses and write the CSV file
    Scrape,

    /// List the department pages found on the catalog index
    Links,

    /// Validate the configuration and selectors
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(origin) = cli.origin {
        config.catalog.origin = origin;
    }
    if let Some(output) = cli.output {
        config.output.path = output.display().to_string();
    }

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (_, true) => "debug",
        _ => config.logging.level.as_str(),
    };
    console::init(level);
    log::debug!("Effective configuration: {config:?}");

    if let Err(e) = config.validate() {
        console::error(&format!("Config validation failed: {e}"));
        return Err(e);
    }

    match cli.command {
        Command::Scrape => {
            let source = HttpSource::from_config(&config.http)?;
            let storage = CsvReport::new(&config.output.path);
            pipeline::run_scraper(&config, &source, &storage).await?;
        }

        Command::Links => {
            let source = HttpSource::from_config(&config.http)?;
            for link in pipeline::run_discover(&config, &source).await? {
                println!("{link}");
            }
        }

        Command::Validate => {
            console::success(&format!(
                "Config OK (index: {}, output: {})",
                config.catalog.index_url(),
                config.output.path
            ));
        }
    }

    Ok(())
}
