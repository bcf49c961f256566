// src/table/mod.rs
use csv::{Reader, ReaderBuilder};
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, instrument};

use crate::error::{Result, ToolError};

pub mod column;
pub mod write;

pub use column::{normalize, resolve_column};

pub type CsvReader = Reader<BufReader<File>>;

/// A whole CSV file held in memory.
#[derive(Debug)]
pub struct Table {
    /// Column names, from the header row.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field).
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read every row of `path` into memory.
    #[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (mut rdr, headers) = open_csv(path)?;

        let rows = rdr
            .records()
            .map(|result| {
                result
                    .map(|record| record.iter().map(str::to_string).collect())
                    .map_err(|e| read_error(path, e))
            })
            .collect::<Result<Vec<Vec<String>>>>()?;

        debug!(rows = rows.len(), "loaded table");
        Ok(Self { headers, rows })
    }

    /// Position of the header matching `requested`, see [`resolve_column`].
    pub fn column_index(&self, requested: &str) -> Result<usize> {
        resolve_column(&self.headers, requested)
    }

    /// Values of column `idx` in row order. Empty fields are kept.
    pub fn column_values(&self, idx: usize) -> Vec<String> {
        self.rows.iter().map(|row| row[idx].clone()).collect()
    }
}

/// Open `path` as a headed CSV and return the reader positioned at the first
/// data row, together with the header names.
///
/// A missing file is `FileNotFound`; a file without any header row is
/// `EmptyFile`. Anything else the reader trips over is `FileRead`.
pub fn open_csv(path: &Path) -> Result<(CsvReader, Vec<String>)> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ToolError::FileNotFound(path.to_path_buf()),
        _ => read_error(path, e.into()),
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| read_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(ToolError::EmptyFile(path.to_path_buf()));
    }

    debug!(columns = %headers.join(", "), "available columns");
    Ok((rdr, headers))
}

pub(crate) fn read_error(path: &Path, source: csv::Error) -> ToolError {
    ToolError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}
