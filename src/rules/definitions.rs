//! Rule definitions
//!
//! Single source of truth for every detection rule. The scanners only walk
//! these tables; none of them hard-code a pattern.

use super::{Category, ContextRule, LineRule, PrefixRule};
use crate::model::Severity;

/// Property key whose absence (with Spring Modulith on the classpath) breaks
/// event publication registry startup.
pub const MODULITH_SCHEMA_KEY: &str = "spring.modulith.events.jdbc.schema";

// ============================================================================
// Build descriptor (pom.xml)
// ============================================================================

/// Renamed Spring Boot starters, plain line match.
pub fn pom_line_rules() -> Vec<LineRule> {
    vec![
        LineRule {
            pattern: "<artifactId>spring-boot-starter-web</artifactId>",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::Dependencies,
            severity: Severity::Critical,
            description: "Old starter: spring-boot-starter-web",
            suggestion: "Change to: spring-boot-starter-webmvc (or use spring-boot-starter-classic for gradual migration)",
        },
        LineRule {
            pattern: "<artifactId>spring-boot-starter-aop</artifactId>",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::Dependencies,
            severity: Severity::Critical,
            description: "Old starter: spring-boot-starter-aop",
            suggestion: "Change to: spring-boot-starter-aspectj (or use spring-boot-starter-classic for gradual migration)",
        },
    ]
}

/// Artifacts whose bare name is ambiguous; the owning groupId on a
/// neighbouring line decides whether they are flagged.
pub fn pom_context_rules() -> Vec<ContextRule> {
    let mut rules = vec![ContextRule {
        pattern: "<artifactId>spring-security-test</artifactId>",
        context_contains: "<groupId>org.springframework.security</groupId>",
        category: Category::Dependencies,
        severity: Severity::Critical,
        description: "Old spring-security-test dependency",
        suggestion: "Change to: spring-boot-starter-security-test",
    }];

    // Testcontainers 1.x module artifacts moved to a testcontainers- prefix.
    const TC_ARTIFACTS: &[(&str, &str, &str)] = &[
        (
            "<artifactId>junit-jupiter</artifactId>",
            "Old Testcontainers artifact: junit-jupiter",
            "Change to: testcontainers-junit-jupiter",
        ),
        (
            "<artifactId>postgresql</artifactId>",
            "Old Testcontainers artifact: postgresql",
            "Change to: testcontainers-postgresql",
        ),
        (
            "<artifactId>mysql</artifactId>",
            "Old Testcontainers artifact: mysql",
            "Change to: testcontainers-mysql",
        ),
        (
            "<artifactId>localstack</artifactId>",
            "Old Testcontainers artifact: localstack",
            "Change to: testcontainers-localstack",
        ),
        (
            "<artifactId>mongodb</artifactId>",
            "Old Testcontainers artifact: mongodb",
            "Change to: testcontainers-mongodb",
        ),
    ];

    for &(pattern, description, suggestion) in TC_ARTIFACTS {
        rules.push(ContextRule {
            pattern,
            context_contains: "<groupId>org.testcontainers</groupId>",
            category: Category::TestcontainersDependencies,
            severity: Severity::Warning,
            description,
            suggestion,
        });
    }

    rules
}

// ============================================================================
// Java sources
// ============================================================================

pub fn java_rules() -> Vec<LineRule> {
    let mut rules = Vec::new();

    rules.extend(test_annotation_rules());
    rules.extend(spring_import_rules());
    rules.extend(testcontainers_import_rules());
    rules.extend(testcontainers_api_rules());
    rules.extend(retry_rules());
    rules.extend(jackson_rules());

    rules
}

/// Mockito test-double annotations replaced in Spring Boot 4.
fn test_annotation_rules() -> Vec<LineRule> {
    vec![
        LineRule {
            pattern: "@MockBean",
            also_requires: None,
            skip_comment_lines: true,
            category: Category::TestAnnotations,
            severity: Severity::Critical,
            description: "Old test annotation: @MockBean",
            suggestion: "Change to: @MockitoBean",
        },
        LineRule {
            pattern: "@SpyBean",
            also_requires: None,
            skip_comment_lines: true,
            category: Category::TestAnnotations,
            severity: Severity::Critical,
            description: "Old test annotation: @SpyBean",
            suggestion: "Change to: @MockitoSpyBean",
        },
    ]
}

/// Spring Boot 4 package relocations, matched as full import statements.
fn spring_import_rules() -> Vec<LineRule> {
    const IMPORTS: &[(&str, &str)] = &[
        (
            "org.springframework.boot.test.mock.mockito.MockBean",
            "org.springframework.boot.test.mock.mockito.MockitoBean",
        ),
        (
            "org.springframework.boot.test.mock.mockito.SpyBean",
            "org.springframework.boot.test.mock.mockito.MockitoSpyBean",
        ),
        (
            "org.springframework.boot.test.autoconfigure.web.servlet.WebMvcTest",
            "org.springframework.boot.webmvc.test.autoconfigure.WebMvcTest",
        ),
        (
            "org.springframework.boot.autoconfigure.domain.EntityScan",
            "org.springframework.boot.persistence.autoconfigure.EntityScan",
        ),
        (
            "org.springframework.boot.BootstrapRegistry",
            "org.springframework.boot.bootstrap.BootstrapRegistry",
        ),
        (
            "org.springframework.boot.BootstrapContext",
            "org.springframework.boot.bootstrap.BootstrapContext",
        ),
    ];

    import_rules(IMPORTS, Category::PackageRelocations, "Old import: ")
}

/// Testcontainers 2.x package relocations.
fn testcontainers_import_rules() -> Vec<LineRule> {
    const IMPORTS: &[(&str, &str)] = &[
        (
            "org.testcontainers.containers.PostgreSQLContainer",
            "org.testcontainers.postgresql.PostgreSQLContainer",
        ),
        (
            "org.testcontainers.containers.MySQLContainer",
            "org.testcontainers.mysql.MySQLContainer",
        ),
        (
            "org.testcontainers.containers.MongoDBContainer",
            "org.testcontainers.mongodb.MongoDBContainer",
        ),
        (
            "org.testcontainers.containers.localstack.LocalStackContainer",
            "org.testcontainers.localstack.LocalStackContainer",
        ),
    ];

    import_rules(IMPORTS, Category::TestcontainersPackages, "Old Testcontainers import: ")
}

fn import_rules(
    pairs: &'static [(&'static str, &'static str)],
    category: Category,
    description_prefix: &str,
) -> Vec<LineRule> {
    pairs
        .iter()
        .map(|(old, new)| LineRule {
            // Leak is fine: rule tables are built once per process.
            pattern: leak(format!("import {old}")),
            also_requires: None,
            skip_comment_lines: false,
            category,
            severity: Severity::Critical,
            description: leak(format!("{description_prefix}{old}")),
            suggestion: leak(format!("Change to: {new}")),
        })
        .collect()
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Removed or changed Testcontainers APIs.
fn testcontainers_api_rules() -> Vec<LineRule> {
    vec![
        LineRule {
            pattern: "LocalStackContainer.Service",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::TestcontainersApi,
            severity: Severity::Critical,
            description: "LocalStackContainer.Service enum removed",
            suggestion: "Remove .withServices() - services are now auto-detected",
        },
        LineRule {
            pattern: "PostgreSQLContainer<?>",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::TestcontainersGenerics,
            severity: Severity::Warning,
            description: "Generic type in Testcontainers container",
            suggestion: "Remove generic type: PostgreSQLContainer<?> -> PostgreSQLContainer",
        },
        LineRule {
            pattern: "MySQLContainer<?>",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::TestcontainersGenerics,
            severity: Severity::Warning,
            description: "Generic type in Testcontainers container",
            suggestion: "Remove generic type: MySQLContainer<?> -> MySQLContainer",
        },
        // Conjunction: getEndpointOverride() without a Service argument is
        // still valid, so the bare call alone is not flagged.
        LineRule {
            pattern: "getEndpointOverride(",
            also_requires: Some("Service"),
            skip_comment_lines: false,
            category: Category::LocalStackApi,
            severity: Severity::Critical,
            description: "getEndpointOverride(Service) deprecated",
            suggestion: "Change to: getEndpoint()",
        },
    ]
}

/// Retry/resilience advisories. Informational: both namespaces are valid in
/// some setups, they just need extra dependencies or AOP support.
fn retry_rules() -> Vec<LineRule> {
    vec![
        LineRule {
            pattern: "org.springframework.resilience",
            also_requires: None,
            skip_comment_lines: false,
            category: Category::Resilience,
            severity: Severity::Info,
            description: "Using org.springframework.resilience annotations",
            suggestion: "Ensure AOP support; if using Spring Retry directly, use org.springframework.retry + explicit version",
        },
        LineRule {
            pattern: "@Retryable",
            also_requires: None,
            skip_comment_lines: true,
            category: Category::SpringRetry,
            severity: Severity::Info,
            description: "Using @Retryable",
            suggestion: "Ensure spring-retry dependency with explicit version + spring-boot-starter-aspectj",
        },
    ]
}

/// Jackson 2 identifiers renamed in Jackson 3.
fn jackson_rules() -> Vec<LineRule> {
    vec![
        LineRule {
            pattern: "Jackson2ObjectMapperBuilderCustomizer",
            also_requires: None,
            skip_comment_lines: true,
            category: Category::Jackson,
            severity: Severity::Critical,
            description: "Old Jackson 2 class: Jackson2ObjectMapperBuilderCustomizer",
            suggestion: "Change to Jackson 3: JsonMapperBuilderCustomizer",
        },
        LineRule {
            pattern: "@JsonComponent",
            also_requires: None,
            skip_comment_lines: true,
            category: Category::Jackson,
            severity: Severity::Critical,
            description: "Old Jackson 2 class: @JsonComponent",
            suggestion: "Change to Jackson 3: @JacksonComponent",
        },
    ]
}

// ============================================================================
// Configuration files
// ============================================================================

pub fn config_prefix_rules() -> Vec<PrefixRule> {
    vec![
        PrefixRule {
            prefix: "spring.jackson.read.",
            category: Category::Configuration,
            severity: Severity::Warning,
            description_prefix: "Old Jackson property: ",
            suggestion: "Change spring.jackson.* to spring.jackson.json.*",
        },
        PrefixRule {
            prefix: "spring.jackson.write.",
            category: Category::Configuration,
            severity: Severity::Warning,
            description_prefix: "Old Jackson property: ",
            suggestion: "Change spring.jackson.* to spring.jackson.json.*",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_rule_count() {
        // 2 annotations + 6 spring imports + 4 tc imports + 4 api + 2 retry + 2 jackson
        assert_eq!(java_rules().len(), 20);
    }

    #[test]
    fn test_import_rules_carry_import_prefix() {
        let rules = spring_import_rules();
        assert!(rules
            .iter()
            .all(|r| r.pattern.starts_with("import org.springframework.boot")));
    }

    #[test]
    fn test_conjunction_rule_present() {
        let rules = java_rules();
        let rule = rules
            .iter()
            .find(|r| r.pattern == "getEndpointOverride(")
            .expect("endpoint override rule");
        assert_eq!(rule.also_requires, Some("Service"));
        assert_eq!(rule.severity, Severity::Critical);
    }

    #[test]
    fn test_pom_context_rules_cover_all_tc_artifacts() {
        let rules = pom_context_rules();
        let tc = rules
            .iter()
            .filter(|r| r.context_contains.contains("org.testcontainers"))
            .count();
        assert_eq!(tc, 5);
        assert_eq!(rules.len(), 6);
    }
}
