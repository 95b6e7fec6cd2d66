//! JSON output formatter for machine processing

use crate::output::{OutputFormatter, Verbosity};
use crate::report::VersionReport;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Per-version results
    versions: Vec<JsonVersion>,
}

/// JSON representation of one queried version
#[derive(Serialize)]
struct JsonVersion {
    /// Queried version string
    version: String,
    /// Capability states (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<Vec<JsonCapability>>,
    /// Resolution error
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON representation of a capability state
#[derive(Serialize)]
struct JsonCapability {
    /// Capability description
    description: String,
    /// Whether the capability is enabled
    enabled: bool,
    /// Declared ranges (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<Vec<String>>,
}

impl JsonFormatter {
    /// Convert a report to its JSON representation
    fn report_to_json(&self, report: &VersionReport) -> JsonVersion {
        if let Some(error) = report.error() {
            return JsonVersion {
                version: report.version.clone(),
                capabilities: None,
                error: Some(error.to_string()),
            };
        }

        let capabilities = report
            .states()
            .iter()
            .filter(|state| self.verbosity != Verbosity::Quiet || state.enabled)
            .map(|state| JsonCapability {
                description: state.description.clone(),
                enabled: state.enabled,
                ranges: (self.verbosity == Verbosity::Verbose).then(|| state.ranges.clone()),
            })
            .collect();

        JsonVersion {
            version: report.version.clone(),
            capabilities: Some(capabilities),
            error: None,
        }
    }

    fn write_json<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[VersionReport], writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            versions: reports.iter().map(|r| self.report_to_json(r)).collect(),
        };
        self.write_json(&output, writer)
    }

    fn format_report(
        &self,
        report: &VersionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_json(&self.report_to_json(report), writer)
    }
}
