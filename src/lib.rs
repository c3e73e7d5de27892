// ============================================================================
// Spring Boot Migration Scanner - Library Interface
// ============================================================================
//
// This module exposes the internal modules for integration testing.
// The main binary (main.rs) uses these modules directly.

pub mod model;
pub mod report;
pub mod rules;
pub mod scanner;
