use std::path::Path;
use tracing::{info, instrument};

use crate::{
    error::{Result, ToolError},
    table::Table,
};

pub const DEFAULT_KEY_COLUMN: &str = "id";

/// One `Update <table> set ... where <key> = ...;` line per row of `table`.
///
/// Values are copied verbatim, so any SQL quoting has to be present in the
/// CSV already (`1,'may',10`).
pub fn update_script(table: &Table, table_name: &str, key_column: &str) -> Result<String> {
    let key_idx = table.column_index(key_column)?;
    let key_name = &table.headers[key_idx];
    if table.headers.len() < 2 {
        return Err(ToolError::NothingToUpdate {
            key: key_name.clone(),
        });
    }

    let statements: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            let set_clause = table
                .headers
                .iter()
                .zip(row)
                .enumerate()
                .filter(|(idx, _)| *idx != key_idx)
                .map(|(_, (col, value))| format!("{} = {}", col, value))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Update {} set {} where {} = {};",
                table_name, set_clause, key_name, row[key_idx]
            )
        })
        .collect();

    Ok(statements.join("\n"))
}

/// Read `csv_path` and build its update script, see [`update_script`].
#[instrument(level = "info", skip(csv_path), fields(path = %csv_path.as_ref().display()))]
pub fn csv_to_update_script<P: AsRef<Path>>(
    csv_path: P,
    table_name: &str,
    key_column: &str,
) -> Result<String> {
    let table = Table::load(csv_path)?;
    let script = update_script(&table, table_name, key_column)?;
    info!(statements = table.rows.len(), table = table_name, "built update script");
    Ok(script)
}
