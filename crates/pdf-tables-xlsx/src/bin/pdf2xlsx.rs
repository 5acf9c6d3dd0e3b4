use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use pdf_tables_xlsx::{ConversionReport, ConvertOptions, PageErrorPolicy, convert_pdf_to_xlsx};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pdf2xlsx",
    version,
    about = "Extract ruled tables from PDFs into an XLSX workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert every detected table into its own worksheet.
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Input PDF path.
    #[arg(short, long)]
    input: PathBuf,

    /// Output XLSX path.
    #[arg(short, long)]
    output: PathBuf,

    /// What to do when a page cannot be read: skip or fail.
    #[arg(long, default_value = "skip")]
    page_errors: String,

    /// Refuse documents with more pages than this.
    #[arg(long)]
    max_pages: Option<usize>,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &ConvertArgs) -> Result<ConvertOptions> {
    let page_errors = PageErrorPolicy::from_str(&args.page_errors)
        .map_err(|error| anyhow!(error))
        .context("failed to parse --page-errors")?;

    if args.max_pages == Some(0) {
        anyhow::bail!("--max-pages must be at least 1");
    }

    Ok(ConvertOptions {
        page_errors,
        max_pages: args.max_pages,
    })
}

fn log_report(report: &ConversionReport, verbose: bool) {
    eprintln!(
        "wrote {} sheet(s) from {} page(s)",
        report.sheet_names.len(),
        report.page_count
    );

    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} page={:?}: {}",
                warning.code, warning.page, warning.message
            );
        }
    }
}

fn run_convert(args: &ConvertArgs) -> Result<ConversionReport> {
    let options = parse_options(args)?;
    convert_pdf_to_xlsx(&args.input, &args.output, &options)
        .with_context(|| format!("failed to convert '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdf_tables_xlsx=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => match run_convert(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                if report.table_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
