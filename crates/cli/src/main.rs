//! pi_approx CLI
//!
//! Approximates π with the first `n` terms of the Gregory-Leibniz series and
//! prints the error against π and the time spent summing.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser as ClapParser, ValueEnum};
use clap_complete::{Shell, generate};
use leibniz_core::{Driver, ReportFormat, usage};
use std::io::{self, Write};
use std::process;
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "pi_approx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with the Gregory-Leibniz series", long_about = None)]
struct Cli {
    /// Number of terms to compute (positive integer)
    #[arg(value_name = "n", allow_negative_numbers = true)]
    terms: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Results block followed by the CSV line
    Human,
    /// Only the CSV header and data line
    Csv,
    /// A single JSON object
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => ReportFormat::Human,
            Format::Csv => ReportFormat::Csv,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    init_logging();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| "pi_approx".to_string());

    let (format, terms) = match Cli::try_parse_from(&argv) {
        Ok(cli) => {
            if let Some(shell) = cli.completions {
                run_completions(shell);
                return;
            }
            (cli.format, cli.terms)
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => match lone_argument(e.kind(), argv.get(1..).unwrap_or_default()) {
            Some(arg) => (Format::Human, vec![arg]),
            None => {
                // Unknown flags alongside other arguments are a usage error
                debug!(error = %e, "argument parsing failed");
                print!("{}", usage(&program));
                let _ = io::stdout().flush();
                process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = Driver::new(program).with_format(format.into()).run(
        terms.as_slice(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    process::exit(code);
}

/// A single token clap took for an unknown flag (`-abc`, `-x`) is still the
/// one term count argument, so it goes to validation instead of usage.
fn lone_argument(kind: ErrorKind, args: &[String]) -> Option<String> {
    match (kind, args) {
        (ErrorKind::UnknownArgument, [arg]) => Some(arg.clone()),
        _ => None,
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pi_approx", &mut io::stdout());
}

/// Diagnostics go to stderr so stdout stays machine-parsable.
/// Quiet unless `RUST_LOG` asks for more.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
