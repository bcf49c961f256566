use std::{io, path::PathBuf};

use thiserror::Error;

/// Every way a csvtools run can fail. None of these are retried.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },
    #[error("column '{column}' is ambiguous, it matches: {}", matches.join(", "))]
    AmbiguousColumn {
        column: String,
        matches: Vec<String>,
    },
    #[error("{} is empty, no header row found", .0.display())]
    EmptyFile(PathBuf),
    #[error("failed to write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no columns besides key '{key}' to update")]
    NothingToUpdate { key: String },
}

pub type Result<T> = std::result::Result<T, ToolError>;
