//! Output rendering for command results
//!
//! Lists render as rounded tables or as a JSON envelope carrying the data
//! plus a small metadata block.

use chrono::Utc;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;

/// Placeholder shown for an empty list
pub const EMPTY_TABLE: &str = "No results found.";

/// JSON envelope: `{ "data": ..., "meta": { ... } }`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Item count, for list output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Metadata {
    fn now(count: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            count,
        }
    }
}

/// Pretty-printed JSON envelope around a single value
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let output = JsonOutput {
        data,
        meta: Metadata::now(None),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Pretty-printed JSON envelope around a list
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String> {
    let output = JsonOutput {
        data: items,
        meta: Metadata::now(Some(items.len())),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Rounded table with centered headers
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Render a list in the requested format, mapping items to table rows
pub fn render_list<T, R, F>(items: &[T], format: OutputFormat, to_row: F) -> Result<String>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Ok(format_table(&rows))
        }
        OutputFormat::Json => format_json_list(items),
    }
}

/// Render one item: JSON envelope, or the given human-readable text
pub fn render_item<T, F>(item: &T, format: OutputFormat, describe: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(describe(item)),
        OutputFormat::Json => format_json(item),
    }
}
