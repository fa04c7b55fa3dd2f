//! Report file discovery and line reading
//!
//! Expands glob patterns into report files and splits each file into one
//! report per non-blank line.

use crate::constants::COMMENT_PREFIX;
use crate::error::{DecodeError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// One raw report and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub path: PathBuf,
    /// 1-based line number in the source file
    pub line_number: usize,
    pub text: String,
}

/// Expand glob patterns into a sorted, de-duplicated list of files
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries = glob::glob(pattern).map_err(|e| DecodeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file match: {}", path.display()),
                Err(e) => warn!("Unreadable match for '{}': {}", pattern, e),
            }
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(DecodeError::NoFilesMatched {
            patterns: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    debug!("Found {} report files", files.len());
    Ok(files)
}

/// Split file content into report lines, skipping blanks and `#` comments
pub fn split_reports(path: &Path, content: &str) -> Vec<ReportLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let text = line.trim();
            if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
                return None;
            }
            Some(ReportLine {
                path: path.to_path_buf(),
                line_number: index + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Read a report file into lines
pub async fn read_reports(path: &Path) -> Result<Vec<ReportLine>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DecodeError::read_failed(path, &e))?;

    let lines = split_reports(path, &content);
    debug!("Read {} reports from {}", lines.len(), path.display());
    Ok(lines)
}
