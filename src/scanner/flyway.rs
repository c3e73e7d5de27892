//! Flyway migration scanner
//!
//! Presence/absence check tree for the Spring Modulith event schema
//! migration: missing migration root, missing `__root` subdirectory, or
//! `__root` present without a `V0__*events*.sql` file. The three outcomes
//! are mutually exclusive and all file-level. Skipped entirely when no
//! Modulith version was detected.

use std::path::Path;

use crate::model::{ScanResult, Severity};
use crate::rules::Category;

const MIGRATION_DIR: &str = "src/main/resources/db/migration";
const ROOT_SUBDIR: &str = "__root";

pub fn scan(root: &Path, result: &mut ScanResult) {
    if !result.modulith_detected() {
        return;
    }

    let migration_dir = root.join(MIGRATION_DIR);
    if !migration_dir.exists() {
        result.add_issue(
            Category::ModulithDatabase,
            Severity::Critical,
            format!("{MIGRATION_DIR}/"),
            0,
            "Missing Flyway migration directory",
            "Create: src/main/resources/db/migration/__root/V0__create_events_schema.sql",
        );
        return;
    }

    let root_migrations = migration_dir.join(ROOT_SUBDIR);
    if !root_migrations.exists() {
        result.add_issue(
            Category::ModulithDatabase,
            Severity::Critical,
            format!("{MIGRATION_DIR}/"),
            0,
            "Missing __root directory for events schema migration",
            "Create: __root/V0__create_events_schema.sql",
        );
        return;
    }

    if !has_events_schema_migration(&root_migrations) {
        result.add_issue(
            Category::ModulithDatabase,
            Severity::Critical,
            format!("{MIGRATION_DIR}/{ROOT_SUBDIR}/"),
            0,
            "Missing events schema migration",
            "Create: V0__create_events_schema.sql with 'CREATE SCHEMA events;'",
        );
    }
}

/// Matches the `V0__*events*.sql` naming glob.
fn matches_events_migration(file_name: &str) -> bool {
    const PREFIX: &str = "V0__";
    const SUFFIX: &str = ".sql";
    file_name.len() > PREFIX.len() + SUFFIX.len()
        && file_name.starts_with(PREFIX)
        && file_name.ends_with(SUFFIX)
        && file_name[PREFIX.len()..file_name.len() - SUFFIX.len()].contains("events")
}

fn has_events_schema_migration(dir: &Path) -> bool {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Error reading {}: {e}", dir.display());
            return false;
        }
    };
    entries
        .filter_map(|e| e.ok())
        .any(|e| matches_events_migration(&e.file_name().to_string_lossy()))
}
