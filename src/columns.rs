//! Column selection
//!
//! Emitted columns always follow the table's native order, whatever order the
//! caller listed them in.

use crate::config::ExportConfiguration;
use crate::types::TabularDataSource;

/// Indices of the columns to emit, in native order.
///
/// Selected names that match no column are skipped. When several columns share
/// a selected name only the first of them is emitted.
pub fn resolve(source: &dyn TabularDataSource, config: &ExportConfiguration) -> Vec<usize> {
    let Some(selected) = &config.selected_columns else {
        return (0..source.column_count()).collect();
    };

    let mut seen: Vec<&str> = Vec::new();
    let mut indices = Vec::new();
    for col in 0..source.column_count() {
        let name = source.column_name(col);
        if selected.iter().any(|s| s == name) && !seen.contains(&name) {
            seen.push(name);
            indices.push(col);
        }
    }
    indices
}

/// Selected names that match no column in `source`
pub fn unmatched(source: &dyn TabularDataSource, config: &ExportConfiguration) -> Vec<String> {
    let Some(selected) = &config.selected_columns else {
        return Vec::new();
    };

    selected
        .iter()
        .filter(|name| !(0..source.column_count()).any(|col| source.column_name(col) == *name))
        .cloned()
        .collect()
}
