//! Report rendering
//!
//! Pure projection of a ScanResult into the human-readable report: summary
//! counts, then one section per (category, severity) group sorted by its
//! label, issues in discovery order within each section.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::{Issue, ScanResult, Severity};

const RULE_HEAVY: &str = "================================================================================";
const RULE_LIGHT: &str = "--------------------------------------------------------------------------------";

pub fn render(result: &ScanResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "MIGRATION SCAN REPORT");
    let _ = writeln!(out, "{RULE_HEAVY}");

    if result.issues.is_empty() {
        let _ = writeln!(out, "\n✅ No migration issues found!");
        return out;
    }

    let critical = result.count_by_severity(Severity::Critical);
    let warning = result.count_by_severity(Severity::Warning);
    let info = result.count_by_severity(Severity::Info);

    let _ = writeln!(out, "\n📊 Summary:");
    let _ = writeln!(out, "   🔴 Critical: {critical}");
    let _ = writeln!(out, "   🟡 Warnings: {warning}");
    let _ = writeln!(out, "   ℹ️  Info: {info}");
    let _ = writeln!(out, "   Total: {}", result.issues.len());

    // BTreeMap keys the groups by their rendered label, which also gives
    // the sorted section order for free.
    let mut groups: BTreeMap<String, Vec<&Issue>> = BTreeMap::new();
    for issue in &result.issues {
        let key = format!("{} - {}", issue.category.as_str(), issue.severity.as_str());
        groups.entry(key).or_default().push(issue);
    }

    for (_key, issues) in &groups {
        // All issues in a group share category and severity.
        let first = issues[0];
        let _ = writeln!(
            out,
            "\n{} {} ({} issues)",
            first.severity.icon(),
            first.category.as_str(),
            issues.len()
        );
        let _ = writeln!(out, "{RULE_LIGHT}");

        for issue in issues {
            let _ = writeln!(out, "\n  File: {}:{}", issue.file_path, issue.line_number);
            let _ = writeln!(out, "  Issue: {}", issue.description);
            let _ = writeln!(out, "  Fix: {}", issue.suggestion);
        }
    }

    let _ = writeln!(out, "\n{RULE_HEAVY}");
    let _ = writeln!(out, "\n📚 Next Steps:");
    let _ = writeln!(out, "   1. Start with CRITICAL issues first");
    let _ = writeln!(
        out,
        "   2. Apply fixes in phases: Dependencies -> Code -> Configuration -> Testing"
    );
    let _ = writeln!(out, "   3. Test thoroughly after each phase");
    let _ = writeln!(out, "\n{RULE_HEAVY}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;

    fn sample_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.add_issue(
            Category::Dependencies,
            Severity::Critical,
            "pom.xml",
            12,
            "Old starter: spring-boot-starter-web",
            "Change to: spring-boot-starter-webmvc",
        );
        result.add_issue(
            Category::Dependencies,
            Severity::Critical,
            "pom.xml",
            19,
            "Old starter: spring-boot-starter-aop",
            "Change to: spring-boot-starter-aspectj",
        );
        result.add_issue(
            Category::TestcontainersDependencies,
            Severity::Warning,
            "pom.xml",
            40,
            "Old Testcontainers artifact: postgresql",
            "Change to: testcontainers-postgresql",
        );
        result.add_issue(
            Category::SpringRetry,
            Severity::Info,
            "src/main/java/Client.java",
            7,
            "Using @Retryable",
            "Ensure spring-retry dependency",
        );
        result
    }

    #[test]
    fn test_all_clear_has_no_summary_block() {
        let report = render(&ScanResult::new());
        assert!(report.contains("No migration issues found!"));
        assert!(!report.contains("Summary"));
    }

    #[test]
    fn test_summary_counts_match_issue_set() {
        let report = render(&sample_result());
        assert!(report.contains("🔴 Critical: 2"));
        assert!(report.contains("🟡 Warnings: 1"));
        assert!(report.contains("ℹ️  Info: 1"));
        assert!(report.contains("Total: 4"));
    }

    #[test]
    fn test_each_issue_rendered_once_in_its_group() {
        let report = render(&sample_result());
        assert!(report.contains("🔴 Spring Boot 4 - Dependencies (2 issues)"));
        assert!(report.contains("🟡 Testcontainers 2.x - Dependencies (1 issues)"));
        assert_eq!(report.matches("File: pom.xml:12").count(), 1);
        assert_eq!(report.matches("File: pom.xml:19").count(), 1);
        assert_eq!(report.matches("File: src/main/java/Client.java:7").count(), 1);
    }

    #[test]
    fn test_groups_sorted_by_label() {
        let report = render(&sample_result());
        let deps = report.find("Spring Boot 4 - Dependencies (").unwrap();
        let retry = report.find("Spring Boot 4 - Spring Retry (").unwrap();
        let tc = report.find("Testcontainers 2.x - Dependencies (").unwrap();
        assert!(deps < retry && retry < tc);
    }

    #[test]
    fn test_render_does_not_mutate_result() {
        let result = sample_result();
        let before = result.clone();
        let _ = render(&result);
        assert_eq!(result.issues, before.issues);
    }
}
