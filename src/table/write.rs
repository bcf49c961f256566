use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{Result, ToolError};

/// Create a temp file next to `dest`, creating the parent directory first.
///
/// Staging in the destination directory keeps the final rename on one
/// filesystem.
pub fn staging_file(dest: &Path) -> Result<NamedTempFile> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    // regular file mode (umask applies), not the owner-only temp file default
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    builder.tempfile_in(parent).map_err(|e| write_error(dest, e))
}

/// Move a fully written staging file over `dest`.
pub fn commit(tmp: NamedTempFile, dest: &Path) -> Result<()> {
    tmp.persist(dest).map_err(|e| write_error(dest, e.error))?;
    debug!(path = %dest.display(), "output committed");
    Ok(())
}

/// Write `contents` to `dest` verbatim. `dest` either holds the full contents
/// afterwards or is left untouched.
pub fn write_atomic(dest: &Path, contents: &str) -> Result<()> {
    let mut tmp = staging_file(dest)?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| write_error(dest, e))?;
    commit(tmp, dest)
}

pub(crate) fn write_error(path: &Path, source: std::io::Error) -> ToolError {
    ToolError::OutputWrite {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parents() -> Result<()> {
        let dir = tempdir()?;
        let dest = dir.path().join("output").join("nested").join("codes.sql");

        write_atomic(&dest, "('A', 'B')")?;
        assert_eq!(fs::read_to_string(&dest)?, "('A', 'B')");

        // only the committed file remains, no stray temp files
        let entries = fs::read_dir(dest.parent().unwrap())?.count();
        assert_eq!(entries, 1);
        Ok(())
    }

    #[test]
    fn test_write_atomic_replaces_existing() -> Result<()> {
        let dir = tempdir()?;
        let dest = dir.path().join("codes.sql");
        fs::write(&dest, "old contents that are longer")?;

        write_atomic(&dest, "(A)")?;
        assert_eq!(fs::read_to_string(&dest)?, "(A)");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_committed_file_is_readable_by_others() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let dest = dir.path().join("codes.sql");

        write_atomic(&dest, "('A')")?;
        let mode = fs::metadata(&dest)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        Ok(())
    }

    #[test]
    fn test_parent_is_a_file() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "")?;

        let err = write_atomic(&blocker.join("out.sql"), "()").unwrap_err();
        assert!(matches!(err, ToolError::OutputWrite { .. }));
        Ok(())
    }
}
