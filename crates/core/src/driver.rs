//! Driver: argument handling, timing and reporting around the series
//!
//! A run walks through fixed stages:
//!
//! ```text
//! AwaitingArgs -> Validating -> Computing -> Reporting -> Done
//! ```
//!
//! A wrong argument count stops in `AwaitingArgs`, a bad term count stops in
//! `Validating`. Either way nothing is computed and the exit status is 1.
//!
//! # Example
//!
//! ```rust
//! use leibniz_core::Driver;
//!
//! let mut out: Vec<u8> = Vec::new();
//! let report = Driver::new("pi_approx").execute(&["2"], &mut out).unwrap();
//! assert_eq!(format!("{:.15}", report.metrics.approximation), "2.666666666666667");
//! ```

use crate::args::parse_term_count;
use crate::clock;
use crate::error::DriverError;
use crate::report::{Report, ReportFormat, format_banner, render};
use crate::series::approximate_pi;
use std::io::Write;
use tracing::{debug, info, warn};

/// Where a run currently is, or where it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingArgs,
    Validating,
    Computing,
    Reporting,
    Done,
}

/// Usage text for a wrong argument count
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <n>\n    where n is the number of terms to compute\n\nExample: {program} 1000000\n"
    )
}

#[derive(Debug, Clone)]
pub struct Driver {
    program: String,
    format: ReportFormat,
    stage: Stage,
}

impl Driver {
    /// `program` is the name shown in the usage text
    pub fn new(program: impl Into<String>) -> Self {
        Driver {
            program: program.into(),
            format: ReportFormat::default(),
            stage: Stage::AwaitingArgs,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = ?self.stage, to = ?next, "driver stage");
        self.stage = next;
    }

    /// Validate `args` (positional arguments, program name excluded), time
    /// the series and write the report to `out`.
    ///
    /// Nothing is written to `out` on a usage or validation error.
    pub fn execute<S: AsRef<str>, W: Write>(
        &mut self,
        args: &[S],
        out: &mut W,
    ) -> Result<Report, DriverError> {
        self.stage = Stage::AwaitingArgs;
        let [raw] = args else {
            debug!(count = args.len(), "wrong argument count");
            return Err(DriverError::Usage);
        };

        self.advance(Stage::Validating);
        let terms = parse_term_count(raw.as_ref())?;
        debug!(%terms, "term count accepted");

        self.advance(Stage::Computing);
        let format = self.format.effective();
        if format != self.format {
            warn!(
                requested = %self.format,
                using = %format,
                "report-json feature disabled, falling back"
            );
        }
        if format == ReportFormat::Human {
            out.write_all(format_banner().as_bytes())?;
        }
        let (approximation, elapsed) = clock::timed(|| approximate_pi(terms));

        self.advance(Stage::Reporting);
        let report = Report::new(terms, approximation, elapsed);
        info!(
            %terms,
            approximation,
            seconds = report.seconds,
            %format,
            "series evaluated"
        );
        out.write_all(render(format, &report)?.as_bytes())?;
        out.flush()?;

        self.advance(Stage::Done);
        Ok(report)
    }

    /// Like [`Driver::execute`], but reports failures itself and returns the
    /// process exit status: usage goes to `out`, validation errors to `err`.
    pub fn run<S: AsRef<str>, O: Write, E: Write>(
        &mut self,
        args: &[S],
        out: &mut O,
        err: &mut E,
    ) -> i32 {
        match self.execute(args, out) {
            Ok(_) => 0,
            Err(DriverError::Usage) => {
                let _ = out.write_all(usage(&self.program).as_bytes());
                let _ = out.flush();
                DriverError::Usage.exit_code()
            }
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                e.exit_code()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn run(args: &[&str]) -> (i32, String, String, Stage) {
        let mut driver = Driver::new("pi_approx");
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = driver.run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            driver.stage(),
        )
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(
            usage("pi_approx"),
            "Usage: pi_approx <n>\n    where n is the number of terms to compute\n\nExample: pi_approx 1000000\n"
        );
    }

    #[test]
    fn test_no_args_prints_usage() {
        let (code, out, err, stage) = run(&[]);
        assert_eq!(code, 1);
        assert!(out.starts_with("Usage: pi_approx <n>"));
        assert!(err.is_empty());
        assert_eq!(stage, Stage::AwaitingArgs);
    }

    #[test]
    fn test_too_many_args_prints_usage() {
        let (code, out, _, stage) = run(&["10", "20"]);
        assert_eq!(code, 1);
        assert!(out.contains("Example: pi_approx 1000000"));
        assert!(!out.contains("Approximation"));
        assert_eq!(stage, Stage::AwaitingArgs);
    }

    #[test]
    fn test_invalid_term_count_reports_to_stderr() {
        for input in ["0", "-5", "abc"] {
            let (code, out, err, stage) = run(&[input]);
            assert_eq!(code, 1, "input {}", input);
            assert!(out.is_empty(), "input {} wrote {:?}", input, out);
            assert!(err.starts_with("Error: n must be a positive integer"));
            assert_eq!(stage, Stage::Validating);
        }
    }

    #[test]
    fn test_execute_returns_validation_error() {
        let mut out: Vec<u8> = Vec::new();
        let result = Driver::new("p").execute(&["-5"], &mut out);
        match result {
            Err(DriverError::Validation(ValidationError::NonPositive(s))) => assert_eq!(s, "-5"),
            other => panic!("Expected NonPositive, got {:?}", other),
        }
    }

    #[test]
    fn test_success_walks_every_stage() {
        let (code, out, err, stage) = run(&["1"]);
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert_eq!(stage, Stage::Done);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "======================================");
        assert_eq!(lines[1], "Pi approximation using Leibniz Formula");
        assert_eq!(lines[2], "Results:");
        assert_eq!(lines[4], "Approximation:       4.000000000000000");
        assert_eq!(lines[5], "Actual pi:           3.141592653589793");
        assert!(lines[9].starts_with("Computation Time:    "));
        assert!(lines[9].ends_with(" seconds"));
        assert_eq!(lines[11], "CSV Format: n, seconds");
        assert!(lines[12].starts_with("CSV_OUTPUT: 1,"));
    }

    #[test]
    fn test_csv_format_skips_banner() {
        let mut driver = Driver::new("pi_approx").with_format(ReportFormat::Csv);
        let mut out: Vec<u8> = Vec::new();
        let report = driver.execute(&["100"], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            format!("CSV Format: n, seconds\nCSV_OUTPUT: 100,{:.9}\n", report.seconds)
        );
    }

    #[test]
    fn test_report_values() {
        let mut out: Vec<u8> = Vec::new();
        let report = Driver::new("p").execute(&["2"], &mut out).unwrap();
        assert_eq!(report.terms.get(), 2);
        assert_eq!(format!("{:.15}", report.metrics.approximation), "2.666666666666667");
        assert!(report.seconds >= 0.0);
    }

    #[cfg(not(feature = "report-json"))]
    #[test]
    fn test_json_fallback_keeps_banner() {
        let mut driver = Driver::new("pi_approx").with_format(ReportFormat::Json);
        let mut out: Vec<u8> = Vec::new();
        driver.execute(&["1"], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "======================================");
        assert_eq!(lines[1], "Pi approximation using Leibniz Formula");
        assert_eq!(lines[2], "Results:");
    }
}
