use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{error::Result, table::Table};

/// Format `values` as a SQL literal list: `('A', 'B')` when `quoted`, `(A, B)`
/// otherwise. An empty slice gives `()`.
///
/// Quoted values have embedded single quotes doubled, so `O'Brien` becomes
/// `'O''Brien'`. Unquoted values are emitted as-is.
pub fn format_tuple<S: AsRef<str>>(values: &[S], quoted: bool) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            if quoted {
                format!("'{}'", v.replace('\'', "''"))
            } else {
                v.to_string()
            }
        })
        .collect();
    format!("({})", items.join(", "))
}

/// Read `csv_path`, pick out `column` and format its values with
/// [`format_tuple`].
#[instrument(level = "info", skip(csv_path), fields(path = %csv_path.as_ref().display()))]
pub fn csv_column_to_tuple<P: AsRef<Path>>(
    csv_path: P,
    column: &str,
    quoted: bool,
) -> Result<String> {
    let table = Table::load(csv_path)?;
    let idx = table.column_index(column)?;
    let values = table.column_values(idx);

    if values.is_empty() {
        warn!(column = %table.headers[idx], "no values found");
    } else {
        info!(column = %table.headers[idx], values = values.len(), "extracted column");
    }
    Ok(format_tuple(&values, quoted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use anyhow::Result;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn write_csv(contents: &str) -> Result<(TempDir, std::path::PathBuf)> {
        let dir = tempdir()?;
        let path = dir.path().join("test.csv");
        fs::write(&path, contents)?;
        Ok((dir, path))
    }

    #[test]
    fn test_format_tuple() {
        assert_eq!(format_tuple(&["A", "B"], true), "('A', 'B')");
        assert_eq!(format_tuple(&["A", "B"], false), "(A, B)");
        assert_eq!(format_tuple::<&str>(&[], true), "()");
        assert_eq!(format_tuple(&["", "x"], true), "('', 'x')");
        assert_eq!(format_tuple(&["", "x"], false), "(, x)");
    }

    #[test]
    fn test_format_tuple_escapes_quotes() {
        assert_eq!(format_tuple(&["O'Brien"], true), "('O''Brien')");
        assert_eq!(format_tuple(&["O'Brien"], false), "(O'Brien)");
    }

    #[test]
    fn test_basic_conversion() -> Result<()> {
        let (_dir, path) = write_csv("PRODUCT_CODE\nABC123\nDEF456\nGHI789")?;
        assert_eq!(
            csv_column_to_tuple(&path, "PRODUCT_CODE", true)?,
            "('ABC123', 'DEF456', 'GHI789')"
        );
        assert_eq!(
            csv_column_to_tuple(&path, "PRODUCT_CODE", false)?,
            "(ABC123, DEF456, GHI789)"
        );
        Ok(())
    }

    #[test]
    fn test_column_with_spaces_and_case() -> Result<()> {
        let (_dir, path) = write_csv("id,Product Code\n1,ABC123\n2,DEF456\n")?;
        assert_eq!(
            csv_column_to_tuple(&path, "product  code", true)?,
            "('ABC123', 'DEF456')"
        );
        Ok(())
    }

    #[test]
    fn test_empty_values_are_kept() -> Result<()> {
        let (_dir, path) = write_csv("id,code\n1,ABC123\n2,\n3,DEF456\n")?;
        assert_eq!(
            csv_column_to_tuple(&path, "code", true)?,
            "('ABC123', '', 'DEF456')"
        );
        Ok(())
    }

    #[test]
    fn test_header_only() -> Result<()> {
        let (_dir, path) = write_csv("PRODUCT_CODE\n")?;
        assert_eq!(csv_column_to_tuple(&path, "PRODUCT_CODE", true)?, "()");
        Ok(())
    }

    #[test]
    fn test_column_not_found() -> Result<()> {
        let (_dir, path) = write_csv("PRODUCT_CODE\nABC123")?;
        let err = csv_column_to_tuple(&path, "NONEXISTENT", true).unwrap_err();
        assert!(matches!(err, ToolError::ColumnNotFound { .. }));
        Ok(())
    }

    #[test]
    fn test_file_not_found() {
        let err = csv_column_to_tuple("nonexistent.csv", "PRODUCT_CODE", true).unwrap_err();
        assert!(matches!(err, ToolError::FileNotFound(_)));
    }
}
