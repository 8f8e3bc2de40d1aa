//! Table file loading (.yaml, .yml, .json)
//!
//! ```yaml
//! columns: [ID, Name, Stock]
//! rows:
//!   - [1, "Bolt", 120]
//!   - [2, "Nut", ~]
//! ```

use crate::config::extension_of;
use crate::error::{ExportError, ExportResult};
use crate::types::{CellValue, Table};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawTable {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// Parse a table file, choosing the syntax from its extension
pub fn parse_table(path: &Path) -> ExportResult<Table> {
    let content = fs::read_to_string(path)?;
    match extension_of(path).as_deref() {
        Some("json") => parse_json(&content),
        Some("yaml") | Some("yml") => parse_yaml(&content),
        other => Err(ExportError::UnsupportedFormat(format!(
            "table file extension '{}'",
            other.unwrap_or("")
        ))),
    }
}

pub fn parse_yaml(content: &str) -> ExportResult<Table> {
    let raw: RawTable = serde_yaml::from_str(content)?;
    build_table(raw)
}

pub fn parse_json(content: &str) -> ExportResult<Table> {
    let raw: RawTable = serde_json::from_str(content)?;
    build_table(raw)
}

fn build_table(raw: RawTable) -> ExportResult<Table> {
    let mut table = Table::new(raw.columns);
    for (idx, row) in raw.rows.into_iter().enumerate() {
        let cells = row
            .into_iter()
            .map(|v| to_cell(v).map_err(|e| ExportError::Table(format!("Row {}: {}", idx + 1, e))))
            .collect::<ExportResult<Vec<_>>>()?;
        table.rows.push(cells);
    }
    table.validate_widths().map_err(ExportError::Table)?;
    Ok(table)
}

fn to_cell(value: Value) -> Result<CellValue, String> {
    match value {
        Value::Null => Ok(CellValue::Absent),
        Value::Bool(b) => Ok(CellValue::Text(b.to_string())),
        Value::Number(n) => n
            .as_f64()
            .map(CellValue::Number)
            .ok_or_else(|| format!("number {} out of range", n)),
        Value::String(s) => Ok(CellValue::Text(s)),
        Value::Array(_) | Value::Object(_) => Err("nested values are not supported".to_string()),
    }
}
