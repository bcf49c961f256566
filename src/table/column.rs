use crate::error::{Result, ToolError};

/// Canonical form of a column name: ends trimmed, whitespace runs collapsed
/// to one space, lowercased.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Find the one header whose normalized form equals the normalized request.
///
/// Zero matches is `ColumnNotFound`. More than one (e.g. `Code` and `CODE`)
/// is `AmbiguousColumn` rather than silently picking the first.
pub fn resolve_column(headers: &[String], requested: &str) -> Result<usize> {
    let wanted = normalize(requested);
    let matches: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| normalize(header) == wanted)
        .map(|(idx, _)| idx)
        .collect();

    match matches.as_slice() {
        [idx] => Ok(*idx),
        [] => Err(ToolError::ColumnNotFound {
            column: requested.to_string(),
            available: headers.to_vec(),
        }),
        _ => Err(ToolError::AmbiguousColumn {
            column: requested.to_string(),
            matches: matches.iter().map(|&idx| headers[idx].clone()).collect(),
        }),
    }
}
