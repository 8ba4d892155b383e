//! `tql`, `list` and `get` commands.

use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use tcex_client::TcClient;
use tcex_core::AppResult;
use tcex_core::types::PageParams;
use tcex_tql::{ResourceFilter, ResourceKind, Tql};

use super::filter;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct TqlArgs {
    /// Resource type, e.g. `indicators` or `workflow_event`
    pub resource: ResourceKind,
    /// Clause `keyword:operator:value`, repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,
    /// Sub-query clause `relation.keyword:operator:value`, repeatable
    #[arg(long)]
    pub has: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    pub resource: ResourceKind,
    #[arg(long = "filter")]
    pub filters: Vec<String>,
    #[arg(long)]
    pub has: Vec<String>,
    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,
    /// Stop after this many records
    #[arg(long)]
    pub max: Option<usize>,
    /// Additional fields to expand, repeatable
    #[arg(long = "fields")]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    pub resource: ResourceKind,
    pub id: i64,
    #[arg(long = "fields")]
    pub fields: Vec<String>,
}

/// Summary row for table output.
#[derive(Debug, Serialize, Tabled)]
struct RecordRow {
    id: String,
    #[tabled(rename = "type")]
    kind: String,
    summary: String,
}

const SUMMARY_KEYS: &[&str] = &["summary", "name", "displayName", "title", "value", "userName"];

impl RecordRow {
    fn from_value(kind: ResourceKind, value: &Value) -> Self {
        let summary = SUMMARY_KEYS
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .unwrap_or_default();
        Self {
            id: value
                .get("id")
                .map(Value::to_string)
                .unwrap_or_default(),
            kind: kind.display_name().to_string(),
            summary: summary.to_string(),
        }
    }
}

pub fn render(args: &TqlArgs, format: OutputFormat) -> AppResult<()> {
    let mut tql = Tql::new();
    let mut resource_filter = ResourceFilter::new(args.resource, &mut tql)?;
    filter::apply(&mut resource_filter, &args.filters, &args.has)?;
    let rendered = tql.render();
    match format {
        OutputFormat::Table => println!("{rendered}"),
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "endpoint": args.resource.endpoint(),
            "tql": rendered,
        })),
    }
    Ok(())
}

pub fn list(args: &ListArgs, client: &TcClient, format: OutputFormat) -> AppResult<()> {
    let mut collection = client.entity_collection(args.resource);
    if args.limit.is_some() || !args.fields.is_empty() {
        let limit = args.limit.unwrap_or(collection.params().result_limit);
        collection = collection
            .with_params(PageParams::new(limit, 0).with_fields(args.fields.iter().cloned()));
    }
    filter::apply(&mut collection.filter()?, &args.filters, &args.has)?;

    let mut records = Vec::new();
    for entity in collection.iter().take(args.max.unwrap_or(usize::MAX)) {
        records.push(entity?.to_value()?);
    }
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow::from_value(args.resource, r))
        .collect();
    output::print_list(&rows, &records, format);
    Ok(())
}

pub fn get(args: &GetArgs, client: &TcClient, format: OutputFormat) -> AppResult<()> {
    let entity = client.get_entity(args.resource, args.id, &args.fields)?;
    output::print_item(&entity.to_value()?, format);
    Ok(())
}
