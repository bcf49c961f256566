use chrono::NaiveDateTime;
use std::path::Path;

/// Second resolution, sorts lexically in time order.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<stem>_deduplicated_<YYYYMMDD_HHMMSS>.<ext>` for `input`.
/// Inputs without an extension get `.csv`.
pub fn output_file_name(input: &Path, timestamp: NaiveDateTime) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    format!(
        "{}_deduplicated_{}.{}",
        stem,
        timestamp.format(TIMESTAMP_FORMAT),
        ext
    )
}
