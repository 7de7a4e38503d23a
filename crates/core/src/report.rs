//! Result report rendering
//!
//! Three output formats, selected with `--format`:
//! - `human` → banner, results block and the CSV trailer (default)
//! - `csv` → only the CSV trailer, for timing sweeps
//! - `json` → a single JSON object
//!
//! ## Feature Flag
//!
//! JSON requires the `report-json` feature (enabled by default). Without it
//! the JSON format falls back to human output.

use crate::args::TermCount;
use crate::metrics::ErrorMetrics;
use serde::Serialize;
use std::fmt;
use std::io;
use std::time::Duration;

// =============================================================================
// Report Format
// =============================================================================

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Human,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Human => "human",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// The format that will actually be rendered. JSON falls back to human
    /// output when built without the `report-json` feature.
    pub fn effective(self) -> Self {
        match self {
            #[cfg(not(feature = "report-json"))]
            ReportFormat::Json => ReportFormat::Human,
            other => other,
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Report Data
// =============================================================================

/// Everything printed after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "n")]
    pub terms: TermCount,
    #[serde(flatten)]
    pub metrics: ErrorMetrics,
    /// Elapsed evaluation time in seconds
    pub seconds: f64,
}

impl Report {
    pub fn new(terms: TermCount, approximation: f64, elapsed: Duration) -> Self {
        Report {
            terms,
            metrics: ErrorMetrics::against_pi(approximation),
            seconds: elapsed.as_secs_f64(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Printed before the series is evaluated
pub fn format_banner() -> String {
    let mut out = String::new();
    out.push_str("======================================\n");
    out.push_str("Pi approximation using Leibniz Formula\n");
    out
}

/// Results block plus the CSV trailer; follows [`format_banner`]
pub fn format_human(report: &Report) -> String {
    let m = &report.metrics;
    let mut out = String::new();
    out.push_str("Results:\n");
    out.push_str("-----------------------------------------\n");
    out.push_str(&format!("Approximation:       {:.15}\n", m.approximation));
    out.push_str(&format!("Actual pi:           {:.15}\n", m.reference));
    out.push_str(&format!("Absolute Error:      {:.15}\n", m.absolute));
    out.push_str(&format!("Relative Error:      {:.15}\n", m.relative));
    out.push_str("-----------------------------------------\n");
    out.push_str(&format!(
        "Computation Time:    {:.9} seconds\n",
        report.seconds
    ));
    out.push_str("=========================================\n");
    out.push_str(&format_csv(report));
    out
}

pub fn format_csv(report: &Report) -> String {
    format!(
        "CSV Format: n, seconds\nCSV_OUTPUT: {},{:.9}\n",
        report.terms, report.seconds
    )
}

#[cfg(feature = "report-json")]
pub fn format_json(report: &Report) -> serde_json::Result<String> {
    let mut out = serde_json::to_string(report)?;
    out.push('\n');
    Ok(out)
}

/// Render everything that follows the timed evaluation
pub fn render(format: ReportFormat, report: &Report) -> io::Result<String> {
    match format.effective() {
        ReportFormat::Human => Ok(format_human(report)),
        ReportFormat::Csv => Ok(format_csv(report)),
        #[cfg(feature = "report-json")]
        ReportFormat::Json => Ok(format_json(report)?),
        #[cfg(not(feature = "report-json"))]
        ReportFormat::Json => Ok(format_human(report)),
    }
}
