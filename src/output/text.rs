//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One block per queried version with a status mark per capability
//! - Declared ranges in verbose mode
//! - Resolution errors inline, in place of the capability list

use crate::output::{OutputFormatter, Verbosity};
use crate::report::{CapabilityState, VersionReport};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn mark(&self, enabled: bool) -> String {
        match (enabled, self.color) {
            (true, true) => "✓".green().to_string(),
            (false, true) => "✗".red().to_string(),
            (true, false) => "✓".to_string(),
            (false, false) => "✗".to_string(),
        }
    }

    fn header(&self, report: &VersionReport) -> String {
        let version = if self.color {
            report.version.bold().to_string()
        } else {
            report.version.clone()
        };

        if report.is_failed() || self.verbosity == Verbosity::Quiet {
            return version;
        }

        format!(
            "{} ({}/{} enabled)",
            version,
            report.enabled_count(),
            report.states().len()
        )
    }

    fn format_state(&self, state: &CapabilityState, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            let ranges = if state.ranges.is_empty() {
                "no ranges".to_string()
            } else {
                state.ranges.join(", ")
            };
            let ranges = if self.color {
                ranges.dimmed().to_string()
            } else {
                ranges
            };
            writeln!(
                writer,
                "  {} {}  {}",
                self.mark(state.enabled),
                state.description,
                ranges
            )
        } else {
            writeln!(writer, "  {} {}", self.mark(state.enabled), state.description)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[VersionReport], writer: &mut dyn Write) -> std::io::Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            self.format_report(report, writer)?;
        }
        Ok(())
    }

    fn format_report(
        &self,
        report: &VersionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header(report))?;

        if let Some(error) = report.error() {
            let error = if self.color {
                error.red().to_string()
            } else {
                error.to_string()
            };
            return writeln!(writer, "  error: {}", error);
        }

        for state in report.states() {
            if self.verbosity == Verbosity::Quiet && !state.enabled {
                continue;
            }
            self.format_state(state, writer)?;
        }

        Ok(())
    }
}
