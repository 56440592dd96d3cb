use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "labscan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reports shorter than this after cleaning are not analyzed.
pub const MIN_TEXT_CHARS: usize = 5;
/// Scans below this pixel count get a quality note (1 MP).
pub const MIN_IMAGE_PIXELS: u64 = 1_000_000;

pub const DEFAULT_SUMMARY_MODEL: &str = "llama3";
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 30;

const ENV_OLLAMA_URL: &str = "LABSCAN_OLLAMA_URL";
const ENV_SUMMARY_MODEL: &str = "LABSCAN_SUMMARY_MODEL";
const ENV_SUMMARY_TIMEOUT: &str = "LABSCAN_SUMMARY_TIMEOUT_SECS";
const ENV_CATALOG: &str = "LABSCAN_CATALOG";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "labscan=debug,labscan_lib=debug"
    } else {
        "labscan=info,labscan_lib=info"
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Runtime settings for the analyzer and its optional AI summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Ollama base URL. `None` disables the AI summary.
    pub ollama_url: Option<String>,
    pub summary_model: String,
    pub summary_timeout_secs: u64,
    /// Custom parameter catalog; `None` uses the bundled one.
    pub catalog_path: Option<PathBuf>,
    pub min_text_chars: usize,
    pub min_image_pixels: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ollama_url: None,
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            summary_timeout_secs: DEFAULT_SUMMARY_TIMEOUT_SECS,
            catalog_path: None,
            min_text_chars: MIN_TEXT_CHARS,
            min_image_pixels: MIN_IMAGE_PIXELS,
        }
    }
}

impl AnalyzerConfig {
    /// Read `LABSCAN_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        config.ollama_url = non_empty(ENV_OLLAMA_URL);
        if let Some(model) = non_empty(ENV_SUMMARY_MODEL) {
            config.summary_model = model;
        }
        if let Some(raw) = non_empty(ENV_SUMMARY_TIMEOUT) {
            config.summary_timeout_secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout {
                    var: ENV_SUMMARY_TIMEOUT,
                    value: raw,
                })?;
        }
        config.catalog_path = non_empty(ENV_CATALOG).map(PathBuf::from);

        Ok(config)
    }
}
