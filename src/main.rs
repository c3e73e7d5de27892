use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boot_migrate::report;
use boot_migrate::scanner::MigrationScanner;

/// Spring Boot Migration Scanner
///
/// Scans a Maven project for Spring Boot 4.0, Spring Modulith 2.0 and
/// Testcontainers 2.x migration issues. Report goes to stdout, logs to
/// stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root to scan
    path: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !args.path.exists() {
        bail!("Path does not exist: {}", args.path.display());
    }

    let scanner = MigrationScanner::new(&args.path);
    let result = scanner.scan();

    print!("{}", report::render(&result));

    // Exit 0 regardless of issues found; non-zero is reserved for
    // invocation errors.
    Ok(())
}
