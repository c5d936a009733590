use sqltidy::*;
use std::{io::Read as _, process::ExitCode};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Reads SQL on stdin, writes the formatted script to stdout and one
/// diagnostic per line to stderr. Exits with 1 when diagnostics were found.
fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    debug!(?config, "loaded configuration");

    let mut sql = String::new();
    std::io::stdin().read_to_string(&mut sql)?;
    debug!(statements = split_statements(&sql).len(), "read script");

    let outcome = Engine::new(Options::from(&config)).format_and_check(&sql);
    println!("{}", outcome.formatted);

    if outcome.is_clean() {
        return Ok(ExitCode::SUCCESS);
    }
    for diagnostic in &outcome.diagnostics {
        warn!(%diagnostic, "check failed");
        eprintln!("{diagnostic}");
    }
    Ok(ExitCode::FAILURE)
}
