// src/dedup/mod.rs
use chrono::{Local, NaiveDateTime};
use csv::Writer;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::{
    error::Result,
    table::{
        open_csv, read_error,
        write::{commit, staging_file, write_error},
    },
};

pub mod naming;

pub use naming::output_file_name;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Set of full-row tuples already emitted.
#[derive(Debug, Default)]
pub struct SeenRows {
    seen: HashSet<Vec<String>>,
}

impl SeenRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time `row` is offered, `false` for every later exact
    /// copy. Rows compare field by field, as text.
    pub fn first_sighting(&mut self, row: &[String]) -> bool {
        if self.seen.contains(row) {
            return false;
        }
        self.seen.insert(row.to_vec())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Keep the first occurrence of each distinct row, in order.
///
/// In-memory counterpart of [`deduplicate_csv_at`], which streams file rows
/// through the same [`SeenRows::first_sighting`] filter.
pub fn dedup_rows(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut seen = SeenRows::new();
    rows.into_iter()
        .filter(|row| seen.first_sighting(row))
        .collect()
}

/// Outcome of one deduplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupReport {
    pub output_path: PathBuf,
    /// Data rows read, header excluded.
    pub total_rows: usize,
    /// Data rows written, header excluded.
    pub unique_rows: usize,
}

impl DedupReport {
    pub fn duplicates_removed(&self) -> usize {
        self.total_rows - self.unique_rows
    }
}

/// Write a copy of `input` without repeated rows into `output_dir`, named by
/// [`output_file_name`] with the current local time.
pub fn deduplicate_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
) -> Result<DedupReport> {
    deduplicate_csv_at(input, output_dir, Local::now().naive_local())
}

/// [`deduplicate_csv`] with an explicit timestamp for the output name.
///
/// Rows are streamed once from `input` into a staging file inside
/// `output_dir`; the file only appears under its final name after the last
/// row is written.
#[instrument(level = "info", skip(input, output_dir), fields(input = %input.as_ref().display()))]
pub fn deduplicate_csv_at<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    timestamp: NaiveDateTime,
) -> Result<DedupReport> {
    let input = input.as_ref();
    let (mut rdr, headers) = open_csv(input)?;

    let output_path = output_dir
        .as_ref()
        .join(output_file_name(input, timestamp));
    let tmp = staging_file(&output_path)?;

    let mut seen = SeenRows::new();
    let mut total_rows = 0;
    {
        let mut wtr = Writer::from_writer(tmp.as_file());
        wtr.write_record(&headers)
            .map_err(|e| write_error(&output_path, e.into()))?;

        for result in rdr.records() {
            let record = result.map_err(|e| read_error(input, e))?;
            total_rows += 1;

            let row: Vec<String> = record.iter().map(str::to_string).collect();
            if seen.first_sighting(&row) {
                wtr.write_record(&row)
                    .map_err(|e| write_error(&output_path, e.into()))?;
            }
        }
        wtr.flush().map_err(|e| write_error(&output_path, e))?;
    }
    commit(tmp, &output_path)?;

    let report = DedupReport {
        output_path,
        total_rows,
        unique_rows: seen.len(),
    };
    info!(
        total = report.total_rows,
        unique = report.unique_rows,
        removed = report.duplicates_removed(),
        output = %report.output_path.display(),
        "deduplication complete"
    );
    Ok(report)
}
