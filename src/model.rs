// ============================================================================
// Scan result model - issues and detected framework versions
// ============================================================================

use serde::Serialize;

use crate::rules::Category;

/// Sentinel for a version the pom scan did not find.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Must fix before migrating
    Critical,
    /// Should fix
    Warning,
    /// Advisory only
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }

    /// Icon used in the rendered report.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🔴",
            Severity::Warning => "🟡",
            Severity::Info => "ℹ️",
        }
    }
}

/// One detected migration problem.
///
/// `line_number` is 1-based; 0 means the issue is file- or directory-level
/// and not tied to a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub category: Category,
    pub severity: Severity,
    pub file_path: String,
    pub line_number: usize,
    pub description: String,
    pub suggestion: String,
}

/// Accumulated output of one scan run.
///
/// Created empty by the orchestrator, populated by the file-kind scanners in
/// a fixed order, then handed to the report renderer. Version fields are
/// write-once: the first detection wins and later writes are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub spring_boot_version: String,
    pub spring_modulith_version: String,
    pub testcontainers_version: String,
    pub issues: Vec<Issue>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self {
            spring_boot_version: UNKNOWN_VERSION.to_string(),
            spring_modulith_version: UNKNOWN_VERSION.to_string(),
            testcontainers_version: UNKNOWN_VERSION.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn add_issue(
        &mut self,
        category: Category,
        severity: Severity,
        file_path: impl Into<String>,
        line_number: usize,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.issues.push(Issue {
            category,
            severity,
            file_path: file_path.into(),
            line_number,
            description: description.into(),
            suggestion: suggestion.into(),
        });
    }

    pub fn record_spring_boot_version(&mut self, version: &str) {
        set_once(&mut self.spring_boot_version, version);
    }

    pub fn record_spring_modulith_version(&mut self, version: &str) {
        set_once(&mut self.spring_modulith_version, version);
    }

    pub fn record_testcontainers_version(&mut self, version: &str) {
        set_once(&mut self.testcontainers_version, version);
    }

    /// Whether the build descriptor declared a Spring Modulith version.
    /// Gates the config schema-key check and the Flyway scan.
    pub fn modulith_detected(&self) -> bool {
        self.spring_modulith_version != UNKNOWN_VERSION
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

impl Default for ScanResult {
    fn default() -> Self {
        Self::new()
    }
}

fn set_once(slot: &mut String, version: &str) {
    if slot == UNKNOWN_VERSION {
        *slot = version.to_string();
    }
}
