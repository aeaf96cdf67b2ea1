//! Logging setup using tracing + tracing-subscriber.
//!
//! Log output always goes to stderr so it never mixes with the record
//! display on stdout. The level comes from `-v`/`-q`, falling back to
//! `RUST_LOG`, and defaults to `warn`.

use tracing::Level;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{RecordError, RecordResult};

const CRATE_TARGET: &str = "campus_records";

/// Installs the global subscriber.
pub fn init_logging(verbose: u8, quiet: bool) -> RecordResult<()> {
    let level = determine_level(verbose, quiet);
    let filter = build_env_filter(level, verbose > 0 || quiet)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| RecordError::LoggingInit {
            message: e.to_string(),
        })?;

    tracing::debug!(level = %level, "Logging initialized");
    Ok(())
}

/// Maps CLI flags to a level.
fn determine_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the filter. Explicit CLI flags win over `RUST_LOG` for this crate.
fn build_env_filter(level: Level, from_flags: bool) -> RecordResult<EnvFilter> {
    let level_str = level.to_string().to_lowercase();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level_str));

    if !from_flags {
        return Ok(filter);
    }

    let directive: Directive = format!("{}={}", CRATE_TARGET, level_str)
        .parse()
        .map_err(|e: ParseError| RecordError::LoggingInit {
            message: e.to_string(),
        })?;
    Ok(filter.add_directive(directive))
}
