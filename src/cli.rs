//! CLI argument parsing using clap v4.

use std::path::PathBuf;

use clap::Parser;

use campus_records::shell::OutputFormat;

/// Console record manager for students and employees.
///
/// Starts an interactive menu for adding students, full-time and part-time
/// employees, and displaying every stored record.
#[derive(Parser, Debug)]
#[command(name = "campus-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "CAMPUS_RECORDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the seed records
    #[arg(long)]
    pub no_seed: bool,

    /// How "Display All Records" renders the store
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["campus-records"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.no_seed);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "campus-records",
            "--config",
            "config/campus.yaml",
            "--no-seed",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("config/campus.yaml")));
        assert!(cli.no_seed);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["campus-records", "--format", "xml"]).is_err());
    }
}
