//! SQL text built from CSV columns: `IN (...)` literal lists and per-row
//! update statements.

pub mod tuple;
pub mod update;

pub use tuple::{csv_column_to_tuple, format_tuple};
pub use update::{csv_to_update_script, update_script, DEFAULT_KEY_COLUMN};
