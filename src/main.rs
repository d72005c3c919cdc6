//! Review API entry point.
//!
//! Parses the command line, sets up logging and runs the chosen command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use review_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

/// Log filter when neither `--verbose` nor `RUST_LOG` is given
const DEFAULT_LOG_FILTER: &str = "review_api=info,tower_http=info";

/// Log filter for `--verbose`, including the SQL each repository runs
const VERBOSE_LOG_FILTER: &str = "review_api=debug,tower_http=debug,sea_orm=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the fmt subscriber. `--verbose` wins over `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
