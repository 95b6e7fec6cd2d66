//! CLI argument parsing module for capver

use crate::compare::ComparerKind;
use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Exit code when a `--require`d capability is disabled
pub const EXIT_REQUIREMENT_FAILED: u8 = 2;

/// Version-gated capability checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "capver",
    version,
    about = "Resolve which declared capabilities are active at a given version"
)]
pub struct CliArgs {
    /// Capability declaration file (.toml or .json)
    pub file: PathBuf,

    /// Version strings to resolve
    #[arg(required = true, num_args = 1..)]
    pub versions: Vec<String>,

    // Selection
    /// Report only these capabilities (can be specified multiple times)
    #[arg(short, long = "capability", action = ArgAction::Append)]
    pub capabilities: Vec<String>,

    /// Exit with status 2 if any of these capabilities is disabled
    #[arg(short, long, action = ArgAction::Append)]
    pub require: Vec<String>,

    /// Override the comparer declared in the file
    #[arg(long, value_parser = parse_comparer)]
    pub comparer: Option<ComparerKind>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (declared ranges and diagnostics)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only enabled capabilities
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_comparer(s: &str) -> Result<ComparerKind, String> {
    s.parse()
}

impl CliArgs {
    /// Reject option combinations clap cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet cannot be combined with --verbose".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the tracing filter directive for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "capver=debug"
        } else {
            "warn"
        }
    }
}
