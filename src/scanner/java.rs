//! Java source scanner
//!
//! Recursive walk for `*.java` under the project root, no ignore list
//! (build-output directories are scanned too; filtering them would change
//! reported issue counts). Every check is line-local: a substring, an
//! optional same-line conjunction token, and an optional `//` comment
//! exclusion, all driven by the rule table.

use std::path::Path;

use walkdir::WalkDir;

use crate::model::ScanResult;
use crate::rules::JAVA_RULES;

const JAVA_EXT: &str = "java";
const COMMENT_MARKER: &str = "//";

pub fn scan(root: &Path, result: &mut ScanResult) {
    let java_files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == JAVA_EXT)
                .unwrap_or(false)
        })
        .collect();

    tracing::info!("Found {} Java files", java_files.len());

    for entry in java_files {
        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                // One unreadable file never aborts the scan of the rest.
                tracing::warn!("Error reading {}: {e}", path.display());
                continue;
            }
        };
        scan_content(&content, &super::display_path(root, path), result);
    }
}

/// Content-level scan, separated from I/O for testability.
pub fn scan_content(content: &str, file_path: &str, result: &mut ScanResult) {
    let lines: Vec<&str> = content.lines().collect();
    super::apply_line_rules(&lines, &JAVA_RULES[..], COMMENT_MARKER, file_path, result);
}
