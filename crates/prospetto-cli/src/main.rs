//! Prospetto - financial analysis of Italian balance-sheet prospect PDFs.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use prospetto_core::error::{ExtractionError, ProspettoError};
use prospetto_core::pipeline::{analyze_pdf, analyze_text};
use prospetto_core::report;

/// Analyze a single Italian financial prospect document
#[derive(Parser)]
#[command(name = "prospetto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input document (PDF, or already-extracted text as .txt)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Directory to write one JSON chart descriptor per chart
    #[arg(long)]
    charts_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Plain text report
    Text,
    /// Full analysis as JSON
    Json,
    /// Markdown report with chart data tables
    Markdown,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let result = match extension.as_str() {
        "pdf" => {
            let data = fs::read(&cli.input)
                .with_context(|| format!("failed to read {}", cli.input.display()))?;
            analyze_pdf(&data)
        }
        "txt" => {
            let text = fs::read_to_string(&cli.input)
                .with_context(|| format!("failed to read {}", cli.input.display()))?;
            analyze_text(&text)
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    let document = match result {
        Ok(document) => document,
        Err(ProspettoError::Extraction(ExtractionError::NoData)) => {
            // A document with no recognizable fields gets the fixed
            // message instead of an error trace, but the run still
            // fails: no snapshot, no charts.
            write_output(cli.output.as_deref(), report::NO_DATA_MESSAGE)?;
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    for warning in &document.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    if let Some(dir) = &cli.charts_dir {
        fs::create_dir_all(dir)?;
        for (i, chart) in document.charts.iter().enumerate() {
            let path = dir.join(format!("chart_{:02}.json", i + 1));
            fs::write(&path, serde_json::to_string_pretty(chart)?)?;
        }
        eprintln!(
            "{} {} chart descriptors written to {}",
            style("✓").green(),
            document.charts.len(),
            dir.display()
        );
    }

    let output = match cli.format {
        OutputFormat::Text => document.report_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        OutputFormat::Markdown => document.report_markdown(),
    };
    write_output(cli.output.as_deref(), &output)?;

    Ok(())
}

fn write_output(path: Option<&std::path::Path>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }
    Ok(())
}
