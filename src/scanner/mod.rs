// ============================================================================
// Scan orchestrator and file-kind scanners
// ============================================================================
//
// One scanning routine per file kind, each walking its rule table and
// appending Issues to the shared ScanResult. The orchestrator owns the
// result and the invocation order; the scanners never talk to each other
// except through it.

pub mod config;
pub mod flyway;
pub mod java;
pub mod pom;

use std::path::{Path, PathBuf};

use crate::model::ScanResult;
use crate::rules::{ContextRule, LineRule};

/// Runs the full scan over one project tree.
pub struct MigrationScanner {
    project_root: PathBuf,
}

impl MigrationScanner {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Single-pass, synchronous scan.
    ///
    /// Order matters only in one place: the pom scan writes the detected
    /// versions that the config and flyway scans consume, so it runs first.
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::new();

        tracing::info!("Scanning project: {}", self.project_root.display());

        pom::scan(&self.project_root, &mut result);
        java::scan(&self.project_root, &mut result);
        config::scan(&self.project_root, &mut result);
        flyway::scan(&self.project_root, &mut result);

        result
    }
}

/// Joined window of two lines before through two lines after `line_idx`
/// (0-based), clamped to the file. Pure; never touches the line array.
pub(crate) fn context_window(lines: &[&str], line_idx: usize) -> String {
    let start = line_idx.saturating_sub(2);
    let end = (line_idx + 3).min(lines.len());
    lines[start..end].join("\n")
}

/// Line-comment check: trimmed line starts with the marker. Deliberately
/// not aware of block comments, trailing comments, or string literals.
pub(crate) fn is_comment_line(line: &str, marker: &str) -> bool {
    line.trim_start().starts_with(marker)
}

/// Path shown in Issues: project-relative when possible.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Generic line matcher: one Issue per (rule, matching line) pair. A line
/// matching several rules yields several Issues.
pub(crate) fn apply_line_rules(
    lines: &[&str],
    rules: &[LineRule],
    comment_marker: &str,
    file_path: &str,
    result: &mut ScanResult,
) {
    for rule in rules {
        for (idx, line) in lines.iter().enumerate() {
            if !line.contains(rule.pattern) {
                continue;
            }
            if let Some(token) = rule.also_requires {
                if !line.contains(token) {
                    continue;
                }
            }
            if rule.skip_comment_lines && is_comment_line(line, comment_marker) {
                continue;
            }
            result.add_issue(
                rule.category,
                rule.severity,
                file_path,
                idx + 1,
                rule.description,
                rule.suggestion,
            );
        }
    }
}

/// Context-gated matcher: the line must match and the surrounding window
/// must contain the disambiguating substring.
pub(crate) fn apply_context_rules(
    lines: &[&str],
    rules: &[ContextRule],
    file_path: &str,
    result: &mut ScanResult,
) {
    for rule in rules {
        for (idx, line) in lines.iter().enumerate() {
            if !line.contains(rule.pattern) {
                continue;
            }
            if !context_window(lines, idx).contains(rule.context_contains) {
                continue;
            }
            result.add_issue(
                rule.category,
                rule.severity,
                file_path,
                idx + 1,
                rule.description,
                rule.suggestion,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window_mid_file() {
        let lines = vec!["a", "b", "c", "d", "e", "f"];
        assert_eq!(context_window(&lines, 3), "b\nc\nd\ne\nf");
    }

    #[test]
    fn test_context_window_clamps_at_start() {
        let lines = vec!["a", "b", "c", "d"];
        assert_eq!(context_window(&lines, 0), "a\nb\nc");
        assert_eq!(context_window(&lines, 1), "a\nb\nc\nd");
    }

    #[test]
    fn test_context_window_clamps_at_end() {
        let lines = vec!["a", "b", "c"];
        assert_eq!(context_window(&lines, 2), "a\nb\nc");
    }

    #[test]
    fn test_is_comment_line() {
        assert!(is_comment_line("  // @MockBean", "//"));
        assert!(is_comment_line("# key=value", "#"));
        assert!(!is_comment_line("foo(); // trailing", "//"));
    }
}
