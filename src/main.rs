//! Entry point for the campus-records binary.
//!
//! Parses the command line, installs logging, loads configuration, seeds the
//! store and hands it to the interactive shell on stdin/stdout.

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use campus_records::config::ConfigLoader;
use campus_records::error::RecordResult;
use campus_records::logging;
use campus_records::shell::Shell;
use campus_records::store::RecordStore;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Session failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> RecordResult<()> {
    let loader = ConfigLoader::load_or_default(cli.config.as_deref())?;

    let mut store = RecordStore::new();
    if cli.no_seed {
        info!("Seeding disabled from the command line");
    } else {
        let seeded = loader.seed_store(&mut store)?;
        info!(count = seeded, "Seed records loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut store, stdin.lock(), stdout.lock())
        .with_layout(loader.display().clone())
        .with_format(cli.format)
        .run()
}
