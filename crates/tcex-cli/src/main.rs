//! `tcex` CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tcex_core::config::ClientConfig;
use tcex_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    // Offline commands still run when the config has no credentials.
    let config = ClientConfig::load(&cli.config);
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    if let Err(e) = cli.execute(config) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
