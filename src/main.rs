//! labscan CLI: analyze the text of a lab report and print the result as JSON.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use labscan_lib::config::AnalyzerConfig;
use labscan_lib::models::report::QualityHint;

#[derive(Parser)]
#[command(
    name = "labscan",
    version,
    about = "Extract and classify lab parameters from medical report text",
    long_about = "Extract lab parameters from OCR or PDF text of a medical report, classify each \
                  against its reference range, and suggest follow-up diagnostic models.\n\n\
                  Output is JSON on stdout. Logs go to stderr (RUST_LOG to adjust)."
)]
struct Cli {
    /// Report text file, or "-" to read stdin.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Width in pixels of the scanned image the text came from.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Height in pixels of the scanned image the text came from.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Parameter catalog JSON (overrides LABSCAN_CATALOG).
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Always use the rule-based summary, even when LABSCAN_OLLAMA_URL is set.
    #[arg(long)]
    no_ai: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    labscan_lib::init_tracing();

    let mut config = AnalyzerConfig::from_env().context("invalid LABSCAN_* environment")?;
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    if cli.no_ai {
        config.ollama_url = None;
    }

    let text = read_input(&cli.input)?;
    let quality = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Some(QualityHint { width, height }),
        _ => None,
    };

    let result = labscan_lib::run(&config, &text, quality)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read report from stdin")?;
        return Ok(text);
    }
    // Lossy: OCR output is not always valid UTF-8.
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
