//! Table and JSON output for CLI commands.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or the raw records as a JSON array.
pub fn print_list<T: Tabled>(rows: &[T], records: &[Value], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(records),
    }
}

/// Print one record. Tables show it as `key: value` lines.
pub fn print_item(item: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Table => match item {
            Value::Object(map) => {
                for (key, value) in map {
                    let value = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    print_kv(key, &value);
                }
            }
            other => println!("{other}"),
        },
        OutputFormat::Json => print_json(item),
    }
}

pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
