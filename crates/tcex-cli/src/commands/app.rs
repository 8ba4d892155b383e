//! `app` commands for install.json, tcex.json and layout.json.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tcex_app_config::{InstallJson, LayoutJson, Severity, TcexJson};
use tcex_core::{AppError, AppResult};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Debug, Subcommand)]
pub enum AppCommand {
    /// Validate the config files of an app directory
    Validate {
        /// App directory
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
    /// List the params declared in install.json
    Params {
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct ParamRow {
    name: String,
    #[tabled(rename = "type")]
    param_type: String,
    required: bool,
    hidden: bool,
    service_config: bool,
}

pub fn execute(args: &AppArgs, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        AppCommand::Validate { path } => validate(path),
        AppCommand::Params { path } => params(path, format),
    }
}

fn validate(dir: &Path) -> AppResult<()> {
    let install = InstallJson::load(dir.join("install.json"))?;
    output::print_success(&format!(
        "install.json is valid ({} params, prefix '{}')",
        install.params.len(),
        install.app_prefix()
    ));

    let mut errors = 0;
    let tcex_path = dir.join("tcex.json");
    if tcex_path.is_file() {
        for finding in TcexJson::load(&tcex_path)?.warnings() {
            match finding.severity {
                Severity::Error => {
                    errors += 1;
                    output::print_error(&finding.message);
                }
                Severity::Warning => output::print_warning(&finding.message),
            }
        }
    }

    let layout_path = dir.join("layout.json");
    if layout_path.is_file() {
        let layout = LayoutJson::load(&layout_path)?;
        for name in layout.param_names() {
            if install.get_param(name).is_none() {
                errors += 1;
                output::print_error(&format!(
                    "layout.json input '{name}' is not a param in install.json"
                ));
            }
        }
    }

    if errors > 0 {
        return Err(AppError::validation(format!(
            "{errors} problem(s) found in {}",
            dir.display()
        )));
    }
    Ok(())
}

fn params(dir: &Path, format: OutputFormat) -> AppResult<()> {
    let install = InstallJson::load(dir.join("install.json"))?;
    let rows: Vec<ParamRow> = install
        .params
        .iter()
        .map(|p| ParamRow {
            name: p.name.clone(),
            param_type: p.param_type.to_string(),
            required: p.required,
            hidden: p.hidden,
            service_config: p.service_config,
        })
        .collect();
    let records = serde_json::to_value(&install.params)?;
    let records = match records {
        serde_json::Value::Array(items) => items,
        _ => Vec::new(),
    };
    output::print_list(&rows, &records, format);
    Ok(())
}
