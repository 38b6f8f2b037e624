use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use keycheck::config::{default_reference_path, default_target_path};
use keycheck::{run_compare, CompareQuery, KeyMode, OutputFormat};

/// Exit status when `--strict` is set and the locales differ
const EXIT_MISMATCH: i32 = 2;

/// Keycheck - Compare the keys of two locale files
#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Reference locale file whose keys are the ground truth
    #[arg(value_name = "REFERENCE", default_value_os_t = default_reference_path())]
    reference: PathBuf,

    /// Target locale file checked against the reference
    #[arg(value_name = "TARGET", default_value_os_t = default_target_path())]
    target: PathBuf,

    /// Compare nested keys as dot-notation paths instead of top-level keys only
    #[arg(long)]
    nested: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 2 when keys are missing or extra
    #[arg(long)]
    strict: bool,

    /// Label for the reference locale (default: file name, uppercased)
    #[arg(long, value_name = "LABEL", requires = "target_label")]
    reference_label: Option<String>,

    /// Label for the target locale (default: file name, uppercased)
    #[arg(long, value_name = "LABEL", requires = "reference_label")]
    target_label: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Write the rendered report. A reader that closed the pipe early
/// (`keycheck | head -1`) is not an error.
fn write_report(out: &mut impl Write, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let key_mode = if cli.nested {
        KeyMode::Nested
    } else {
        KeyMode::TopLevel
    };

    let mut query = CompareQuery::new(cli.reference, cli.target).with_key_mode(key_mode);
    if let (Some(reference), Some(target)) = (cli.reference_label, cli.target_label) {
        query = query.with_labels(reference, target);
    }

    let report = match run_compare(query) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };

    let output = match keycheck::output::render(&report, cli.format) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{} failed to render report: {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };

    if let Err(e) = write_report(&mut io::stdout().lock(), &output) {
        eprintln!("{} failed to write report: {}", "error:".red().bold(), e);
        process::exit(1);
    }

    if cli.strict && !report.all_match {
        process::exit(EXIT_MISMATCH);
    }
}
