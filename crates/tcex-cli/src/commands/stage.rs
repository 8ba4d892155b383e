//! `stage` command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tcex_client::{StageData, StageStatus, TcClient};
use tcex_core::{AppError, AppResult};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct StageArgs {
    /// A stage file, or a directory of `tc_stage_*.json` files
    pub path: PathBuf,
    /// Owner to create the entities in
    #[arg(long)]
    pub owner: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct StageRow {
    #[tabled(rename = "type")]
    kind: String,
    status: String,
    id: String,
    message: String,
}

pub fn execute(args: &StageArgs, client: &TcClient, format: OutputFormat) -> AppResult<()> {
    let entities = if args.path.is_dir() {
        StageData::from_dir(&args.path)?
    } else {
        StageData::from_file(&args.path)?
    };

    let results = client.stage(args.owner.as_deref()).entities(&entities);
    let failed = results
        .iter()
        .filter(|r| r.status == StageStatus::Failed)
        .count();

    let rows: Vec<StageRow> = results
        .iter()
        .map(|r| StageRow {
            kind: r.kind.to_string(),
            status: format!("{:?}", r.status),
            id: r.id.map(|id| id.to_string()).unwrap_or_default(),
            message: r.message.clone().unwrap_or_default(),
        })
        .collect();
    let records = results
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    output::print_list(&rows, &records, format);

    if failed > 0 {
        return Err(AppError::transport(format!(
            "{failed} of {} entities failed to stage",
            results.len()
        )));
    }
    Ok(())
}
