//! Changelog file operations

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChangelogError, Result};

/// Write a rendered changelog to `path`.
///
/// With `prepend` set and an existing file at `path`, the new content is
/// placed above the existing content, separated by a newline.
pub fn write_changelog(path: &Path, content: &str, prepend: bool) -> Result<()> {
    info!(path = %path.display(), prepend, "writing changelog");

    let existing = if prepend { read_changelog(path)? } else { None };
    let combined = match existing {
        Some(existing) => format!("{}\n{}", content, existing),
        None => content.to_string(),
    };

    std::fs::write(path, combined)
        .map_err(|e| ChangelogError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

/// Read existing changelog content
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(std::fs::read_to_string(path).map_err(ChangelogError::Io)?))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_changelog(&path, "- entry\n", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "- entry\n");
    }

    #[test]
    fn test_prepend_to_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "old\n").unwrap();

        write_changelog(&path, "new\n", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n\nold\n");
    }

    #[test]
    fn test_overwrite_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "old\n").unwrap();

        write_changelog(&path, "new\n", false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_read_missing() {
        let temp = TempDir::new().unwrap();
        assert!(read_changelog(&temp.path().join("nope.md")).unwrap().is_none());
    }
}
