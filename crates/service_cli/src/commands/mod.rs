//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build their
//! output as a `String` so they can be tested without capturing stdout.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputFormat;
use crate::{CliError, Result};

pub mod axes;
pub mod chart;
pub mod price_bond;
pub mod price_warrant;

/// Reads a JSON document from `path`.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Renders `value` as JSON, or `rows` as a table.
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    rows: &[(&str, String)],
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

/// A labelled row of a result table.
#[derive(Debug, Clone, Tabled)]
struct KeyValue<'a> {
    #[tabled(rename = "Metric")]
    key: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

/// Two-column box table with a `Metric | Value` header.
pub(crate) fn render_table(rows: &[(&str, String)]) -> String {
    let rows = rows.iter().map(|(key, value)| KeyValue {
        key: *key,
        value: value.as_str(),
    });
    Table::new(rows).with(Style::modern()).to_string()
}
