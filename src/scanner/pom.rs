//! Build descriptor (pom.xml) scanner
//!
//! Captures the three framework versions and flags renamed or relocated
//! dependencies. Runs before every other scanner: the config and flyway
//! checks are gated on the Spring Modulith version detected here.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ScanResult;
use crate::rules::{POM_CONTEXT_RULES, POM_LINE_RULES};

const POM_FILE: &str = "pom.xml";

static SPRING_BOOT_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<spring-boot\.version>([\d.]+)").unwrap());
static SPRING_MODULITH_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<spring-modulith\.version>([\d.]+)").unwrap());
static TESTCONTAINERS_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<testcontainers\.version>([\d.]+)").unwrap());

pub fn scan(root: &Path, result: &mut ScanResult) {
    let pom_path = root.join(POM_FILE);
    if !pom_path.exists() {
        tracing::warn!("pom.xml not found (Maven project expected)");
        return;
    }

    let content = match std::fs::read_to_string(&pom_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Error reading {}: {e}", pom_path.display());
            return;
        }
    };

    scan_content(&content, POM_FILE, result);

    tracing::info!("Spring Boot: {}", result.spring_boot_version);
    tracing::info!("Spring Modulith: {}", result.spring_modulith_version);
    tracing::info!("Testcontainers: {}", result.testcontainers_version);
}

/// Content-level scan, separated from I/O for testability.
pub fn scan_content(content: &str, file_path: &str, result: &mut ScanResult) {
    if let Some(version) = capture_version(&SPRING_BOOT_VERSION, content) {
        result.record_spring_boot_version(version);
    }
    if let Some(version) = capture_version(&SPRING_MODULITH_VERSION, content) {
        result.record_spring_modulith_version(version);
    }
    if let Some(version) = capture_version(&TESTCONTAINERS_VERSION, content) {
        result.record_testcontainers_version(version);
    }

    let lines: Vec<&str> = content.lines().collect();
    super::apply_line_rules(&lines, &POM_LINE_RULES[..], "<!--", file_path, result);
    super::apply_context_rules(&lines, &POM_CONTEXT_RULES[..], file_path, result);
}

fn capture_version<'a>(regex: &Regex, content: &'a str) -> Option<&'a str> {
    regex
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, UNKNOWN_VERSION};
    use crate::rules::Category;

    #[test]
    fn test_version_capture() {
        let pom = "\
<properties>
  <spring-boot.version>4.0.1</spring-boot.version>
  <testcontainers.version>2.1.0</testcontainers.version>
</properties>";
        let mut result = ScanResult::new();
        scan_content(pom, "pom.xml", &mut result);

        assert_eq!(result.spring_boot_version, "4.0.1");
        assert_eq!(result.testcontainers_version, "2.1.0");
        assert_eq!(result.spring_modulith_version, UNKNOWN_VERSION);
    }

    #[test]
    fn test_old_starter_flagged_with_line_number() {
        let pom = "\
<dependencies>
  <dependency>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-web</artifactId>
  </dependency>
</dependencies>";
        let mut result = ScanResult::new();
        scan_content(pom, "pom.xml", &mut result);

        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.category, Category::Dependencies);
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.line_number, 4);
        assert_eq!(issue.description, "Old starter: spring-boot-starter-web");
    }

    #[test]
    fn test_new_starter_not_flagged() {
        let pom = "<artifactId>spring-boot-starter-webmvc</artifactId>";
        let mut result = ScanResult::new();
        scan_content(pom, "pom.xml", &mut result);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_security_test_requires_security_group_in_context() {
        let old = "\
  <dependency>
    <groupId>org.springframework.security</groupId>
    <artifactId>spring-security-test</artifactId>
  </dependency>";
        let mut result = ScanResult::new();
        scan_content(old, "pom.xml", &mut result);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].description, "Old spring-security-test dependency");

        // Same artifact under the boot group is the already-migrated form.
        let migrated = "\
  <dependency>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-security-test</artifactId>
  </dependency>";
        let mut result = ScanResult::new();
        scan_content(migrated, "pom.xml", &mut result);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_testcontainers_artifact_needs_owning_group() {
        // `postgresql` under org.postgresql is the JDBC driver, not a
        // Testcontainers module.
        let driver = "\
  <dependency>
    <groupId>org.postgresql</groupId>
    <artifactId>postgresql</artifactId>
  </dependency>";
        let mut result = ScanResult::new();
        scan_content(driver, "pom.xml", &mut result);
        assert!(result.issues.is_empty());

        let tc = "\
  <dependency>
    <groupId>org.testcontainers</groupId>
    <artifactId>postgresql</artifactId>
  </dependency>";
        let mut result = ScanResult::new();
        scan_content(tc, "pom.xml", &mut result);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.category, Category::TestcontainersDependencies);
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.suggestion, "Change to: testcontainers-postgresql");
    }

    #[test]
    fn test_versions_survive_rescan_write_once() {
        let mut result = ScanResult::new();
        scan_content("<spring-boot.version>4.0.0</spring-boot.version>", "pom.xml", &mut result);
        scan_content("<spring-boot.version>3.3.0</spring-boot.version>", "pom.xml", &mut result);
        assert_eq!(result.spring_boot_version, "4.0.0");
    }
}
