pub mod catalog;
pub mod config;
pub mod intelligence;
pub mod models;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

use crate::config::AnalyzerConfig;
use crate::models::report::{AnalysisResult, QualityHint};
use crate::pipeline::ProcessingError;

/// Install the global tracing subscriber (stderr, `RUST_LOG` or the default filter).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Analyze one report with an analyzer built from `config`.
pub fn run(
    config: &AnalyzerConfig,
    text: &str,
    quality: Option<QualityHint>,
) -> Result<AnalysisResult, ProcessingError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    let analyzer = pipeline::build_analyzer(config)?;
    Ok(analyzer.analyze(text, quality))
}
