//! Configuration file scanner
//!
//! Line-based matching over application.properties and application.yml, no
//! YAML parser. Also hosts the one cross-scanner check: the Modulith event
//! store schema key is only required when the pom scan already detected a
//! Spring Modulith version.

use std::path::Path;

use crate::model::{ScanResult, Severity};
use crate::rules::definitions::MODULITH_SCHEMA_KEY;
use crate::rules::{Category, CONFIG_PREFIX_RULES};

const CONFIG_FILES: &[&str] = &[
    "src/main/resources/application.properties",
    "src/main/resources/application.yml",
];
const COMMENT_MARKER: &str = "#";

pub fn scan(root: &Path, result: &mut ScanResult) {
    for rel_path in CONFIG_FILES {
        let path = root.join(rel_path);
        if !path.exists() {
            continue;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Error reading {}: {e}", path.display());
                continue;
            }
        };
        scan_content(&content, rel_path, result);
    }
}

/// Content-level scan, separated from I/O for testability.
pub fn scan_content(content: &str, file_path: &str, result: &mut ScanResult) {
    for rule in CONFIG_PREFIX_RULES.iter() {
        for (idx, line) in content.lines().enumerate() {
            if !line.contains(rule.prefix) {
                continue;
            }
            if super::is_comment_line(line, COMMENT_MARKER) {
                continue;
            }
            result.add_issue(
                rule.category,
                rule.severity,
                file_path,
                idx + 1,
                format!("{}{}", rule.description_prefix, line.trim()),
                rule.suggestion,
            );
        }
    }

    // File-level check, gated on the version the pom scan recorded.
    if result.modulith_detected() && !content.contains(MODULITH_SCHEMA_KEY) {
        result.add_issue(
            Category::ModulithConfiguration,
            Severity::Critical,
            file_path,
            0,
            "Missing Spring Modulith event store configuration",
            "Add: spring.modulith.events.jdbc.schema=events",
        );
    }
}
