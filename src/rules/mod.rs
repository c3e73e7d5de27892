//! Rule registry
//!
//! All detection rules are declarative data: static tables in
//! [`definitions`], consumed by one generic line-matching routine per file
//! kind. Adding a rule means adding a table entry, not a new code path.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::model::Severity;

pub mod definitions;

/// Rule tables, built once per process (lazy).
pub static POM_LINE_RULES: Lazy<Vec<LineRule>> = Lazy::new(definitions::pom_line_rules);
pub static POM_CONTEXT_RULES: Lazy<Vec<ContextRule>> = Lazy::new(definitions::pom_context_rules);
pub static JAVA_RULES: Lazy<Vec<LineRule>> = Lazy::new(definitions::java_rules);
pub static CONFIG_PREFIX_RULES: Lazy<Vec<PrefixRule>> = Lazy::new(definitions::config_prefix_rules);

/// Report group the rule belongs to. `as_str` yields the label shown in the
/// rendered report and used as the group sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Renamed Spring Boot starters and relocated security test dependency
    Dependencies,
    /// Testcontainers 1.x artifacts that gained a `testcontainers-` prefix
    TestcontainersDependencies,
    /// @MockBean / @SpyBean replacement
    TestAnnotations,
    /// Spring Boot package relocations (imports)
    PackageRelocations,
    /// Testcontainers package relocations (imports)
    TestcontainersPackages,
    /// Removed Testcontainers APIs
    TestcontainersApi,
    /// org.springframework.resilience advisory
    Resilience,
    /// @Retryable companion-dependency advisory
    SpringRetry,
    /// Jackson 2 -> Jackson 3 identifiers
    Jackson,
    /// Container declarations that no longer take a type parameter
    TestcontainersGenerics,
    /// LocalStack endpoint accessor changes
    LocalStackApi,
    /// Renamed application property prefixes
    Configuration,
    /// Spring Modulith event store configuration
    ModulithConfiguration,
    /// Spring Modulith event schema migrations
    ModulithDatabase,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dependencies => "Spring Boot 4 - Dependencies",
            Category::TestcontainersDependencies => "Testcontainers 2.x - Dependencies",
            Category::TestAnnotations => "Spring Boot 4 - Test Annotations",
            Category::PackageRelocations => "Spring Boot 4 - Package Relocations",
            Category::TestcontainersPackages => "Testcontainers 2.x - Package Changes",
            Category::TestcontainersApi => "Testcontainers 2.x - API Changes",
            Category::Resilience => "Spring Boot 4 - Retry/Resilience",
            Category::SpringRetry => "Spring Boot 4 - Spring Retry",
            Category::Jackson => "Spring Boot 4 - Jackson 3",
            Category::TestcontainersGenerics => "Testcontainers 2.x - Generic Types",
            Category::LocalStackApi => "Testcontainers 2.x - LocalStack API",
            Category::Configuration => "Spring Boot 4 - Configuration",
            Category::ModulithConfiguration => "Spring Modulith 2.0 - Configuration",
            Category::ModulithDatabase => "Spring Modulith 2.0 - Database",
        }
    }
}

/// Line-local substring rule.
///
/// Matches when `pattern` occurs anywhere in a line and, if set,
/// `also_requires` occurs on the same line (conjunction rules disambiguate a
/// deprecated overload from a still-valid one). `skip_comment_lines` excludes
/// lines whose trimmed content starts with the file kind's comment marker;
/// this is deliberately not scope-aware (no block comments, no string
/// literals) so reported issue counts stay stable.
#[derive(Debug, Clone)]
pub struct LineRule {
    pub pattern: &'static str,
    pub also_requires: Option<&'static str>,
    pub skip_comment_lines: bool,
    pub category: Category,
    pub severity: Severity,
    pub description: &'static str,
    pub suggestion: &'static str,
}

/// Substring rule gated on a context window.
///
/// Matches when `pattern` occurs in a line and `context_contains` occurs in
/// the joined window of two lines before through two lines after. Used for
/// Maven artifacts whose bare name collides with unrelated libraries: the
/// owning `<groupId>` sits on a neighbouring line.
#[derive(Debug, Clone)]
pub struct ContextRule {
    pub pattern: &'static str,
    pub context_contains: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub description: &'static str,
    pub suggestion: &'static str,
}

/// Config-key prefix rule for properties/yaml files.
///
/// The Issue description embeds the offending line, so the table carries a
/// description prefix rather than the full text.
#[derive(Debug, Clone)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub description_prefix: &'static str,
    pub suggestion: &'static str,
}
