//! capver - Version-gated capability checker CLI
//!
//! Resolves one or more version strings against a capability declaration
//! file and reports which features and bug workarounds apply.

use capver::checker::Checker;
use capver::cli::{CliArgs, EXIT_REQUIREMENT_FAILED};
use capver::output::{create_formatter, OutputConfig};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(&args);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; RUST_LOG overrides the verbosity flags
fn init_tracing(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!(
        file = %args.file.display(),
        versions = args.versions.len(),
        "capver v{}",
        env!("CARGO_PKG_VERSION")
    );

    args.validate()?;

    let checker = Checker::from_cli(&args)?;
    let result = checker.run(&args.versions);

    // Create output formatter based on CLI options
    let mut output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    if args.no_color {
        output_config = output_config.without_color();
    }
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&result.reports, &mut stdout)?;
    stdout.flush()?;

    for unmet in &result.unmet {
        eprintln!(
            "required capability '{}' is disabled at {}",
            unmet.capability, unmet.version
        );
    }

    // Return appropriate exit code
    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else if !result.requirements_met() {
        Ok(ExitCode::from(EXIT_REQUIREMENT_FAILED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
