//! CLI command definitions and dispatch.

pub mod app;
pub mod filter;
pub mod notify;
pub mod query;
pub mod stage;

use clap::{Parser, Subcommand};

use tcex_client::TcClient;
use tcex_core::AppResult;
use tcex_core::config::ClientConfig;

use crate::output::OutputFormat;

/// ThreatConnect command-line client
#[derive(Debug, Parser)]
#[command(name = "tcex", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tcex.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a TQL expression without contacting the server
    Tql(query::TqlArgs),
    /// List records of a resource type
    List(query::ListArgs),
    /// Fetch one record by id
    Get(query::GetArgs),
    /// Send a notification
    Notify(notify::NotifyArgs),
    /// App configuration files
    App(app::AppArgs),
    /// Create entities from stage files
    Stage(stage::StageArgs),
}

impl Cli {
    /// Run the command. `config` is the result of loading `--config`; only
    /// commands that talk to the server require it to be valid.
    pub fn execute(&self, config: AppResult<ClientConfig>) -> AppResult<()> {
        match &self.command {
            Commands::Tql(args) => query::render(args, self.format),
            Commands::App(args) => app::execute(args, self.format),
            Commands::List(args) => query::list(args, &client(config)?, self.format),
            Commands::Get(args) => query::get(args, &client(config)?, self.format),
            Commands::Notify(args) => notify::execute(args, &client(config)?, self.format),
            Commands::Stage(args) => stage::execute(args, &client(config)?, self.format),
        }
    }
}

fn client(config: AppResult<ClientConfig>) -> AppResult<TcClient> {
    TcClient::from_config(&config?)
}
