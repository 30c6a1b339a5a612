//! Pull request input loading

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChangelogError, Result};
use crate::types::PullRequestInfo;

/// Parse a JSON array of pull requests
pub fn parse_pull_requests(content: &str) -> Result<Vec<PullRequestInfo>> {
    let prs: Vec<PullRequestInfo> = serde_json::from_str(content)
        .map_err(|e| ChangelogError::InputParse(e.to_string()))?;
    debug!(count = prs.len(), "parsed pull requests");
    Ok(prs)
}

/// Load pull requests from a JSON file
pub fn load_pull_requests(path: &Path) -> Result<Vec<PullRequestInfo>> {
    info!(path = %path.display(), "loading pull requests");
    let content = std::fs::read_to_string(path).map_err(ChangelogError::Io)?;
    parse_pull_requests(&content)
}

/// Load pull requests from any reader (e.g. stdin)
pub fn read_pull_requests<R: Read>(mut reader: R) -> Result<Vec<PullRequestInfo>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(ChangelogError::Io)?;
    parse_pull_requests(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergelogError;
    use tempfile::TempDir;

    const INPUT: &str = r#"[
        {"number": 1, "title": "One", "url": "u1", "merged_at": "2024-01-01T00:00:00Z", "author": "a", "labels": ["bug"]},
        {"number": 2, "title": "Two", "url": "u2", "merged_at": "2024-01-02T00:00:00Z", "author": "b"}
    ]"#;

    #[test]
    fn test_parse_pull_requests() {
        let prs = parse_pull_requests(INPUT).unwrap();
        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].labels, vec!["bug".to_string()]);
        assert!(prs[1].labels.is_empty());
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_pull_requests("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_input() {
        let err = parse_pull_requests("{not json").unwrap_err();
        assert!(matches!(
            err,
            MergelogError::Changelog(ChangelogError::InputParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prs.json");
        std::fs::write(&path, INPUT).unwrap();

        let prs = load_pull_requests(&path).unwrap();
        assert_eq!(prs[1].number, 2);
    }

    #[test]
    fn test_read_from_reader() {
        let prs = read_pull_requests(INPUT.as_bytes()).unwrap();
        assert_eq!(prs.len(), 2);
    }
}
