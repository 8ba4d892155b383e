//! `notify` command.

use clap::Args;

use tcex_client::{Priority, TcClient};
use tcex_core::{AppError, AppResult};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Notification type shown in the platform
    #[arg(long = "type")]
    pub notification_type: String,
    #[arg(long)]
    pub message: String,
    /// Comma-separated user names
    #[arg(long, conflicts_with = "org")]
    pub recipients: Option<String>,
    /// Notify the whole organization
    #[arg(long)]
    pub org: bool,
    /// low, medium or high
    #[arg(long, default_value = "low")]
    pub priority: Priority,
}

pub fn execute(args: &NotifyArgs, client: &TcClient, format: OutputFormat) -> AppResult<()> {
    let mut notifications = client.notifications();
    match (&args.recipients, args.org) {
        (Some(recipients), false) => {
            notifications.recipients(&args.notification_type, recipients, args.priority);
        }
        (None, true) => {
            notifications.org(&args.notification_type, args.priority);
        }
        _ => {
            return Err(AppError::validation(
                "Pass either --recipients or --org",
            ));
        }
    }

    let response = notifications.send(&args.message)?;
    match format {
        OutputFormat::Json => output::print_json(&response),
        OutputFormat::Table => output::print_success("Notification sent"),
    }
    Ok(())
}
