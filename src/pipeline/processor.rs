//! Report analysis orchestrator.
//!
//! Single entry point that drives the full pipeline:
//! clean → extract + classify → recommend → summarize → route.
//!
//! The summarizer is injected, so the analyzer stays fully testable with a
//! mock LLM client.

use std::sync::Arc;

use crate::catalog::{CatalogError, ParameterCatalog};
use crate::config::AnalyzerConfig;
use crate::intelligence::{rule_based_summary, MessageTemplates, DISCLAIMER};
use crate::models::enums::SummarySource;
use crate::models::report::{
    AnalysisResult, QualityHint, RiskAssessment, StatusCounts, SuggestedModel,
};
use crate::pipeline::extraction::orchestrator::ParameterExtractor;
use crate::pipeline::extraction::sanitize::clean_extracted_text;
use crate::pipeline::model_router::route_models;
use crate::pipeline::summarizer::{ClinicalSummarizer, OllamaClient, SummaryError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors building an analyzer. Analysis itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Parameter catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Summarizer setup failed: {0}")]
    Summarizer(#[from] SummaryError),
}

/// Analyzes report text. Shareable across threads.
pub struct ReportAnalyzer {
    extractor: ParameterExtractor,
    summarizer: ClinicalSummarizer,
    min_text_chars: usize,
    min_image_pixels: u64,
}

impl ReportAnalyzer {
    /// Rule-based analyzer over a catalog, with default thresholds.
    pub fn new(catalog: Arc<ParameterCatalog>) -> Self {
        let defaults = AnalyzerConfig::default();
        Self {
            extractor: ParameterExtractor::new(catalog),
            summarizer: ClinicalSummarizer::rule_based(),
            min_text_chars: defaults.min_text_chars,
            min_image_pixels: defaults.min_image_pixels,
        }
    }

    pub fn with_summarizer(mut self, summarizer: ClinicalSummarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Apply analysis thresholds from config.
    pub fn with_config(mut self, config: &AnalyzerConfig) -> Self {
        self.min_text_chars = config.min_text_chars;
        self.min_image_pixels = config.min_image_pixels;
        self
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        self.extractor.catalog()
    }

    /// Analyze raw report text. Never fails: degraded input yields an empty
    /// result carrying a guidance `message`.
    pub fn analyze(&self, text: &str, quality: Option<QualityHint>) -> AnalysisResult {
        let quality_note = quality.and_then(|hint| self.quality_note(hint));

        let cleaned = clean_extracted_text(text);
        let cleaned_chars = cleaned.trim().chars().count();
        if cleaned_chars < self.min_text_chars {
            tracing::warn!(
                raw_chars = text.chars().count(),
                cleaned_chars,
                min = self.min_text_chars,
                "Report text too short to analyze"
            );
            return empty_result(MessageTemplates::insufficient_text(), quality_note);
        }

        let parameters = self.extractor.extract(&cleaned);
        if parameters.is_empty() {
            tracing::info!(cleaned_chars, "No medical parameters detected");
            return empty_result(MessageTemplates::no_parameters(), quality_note);
        }

        let status_counts = StatusCounts::tally(&parameters);
        let risk_assessment = RiskAssessment::from_counts(&status_counts);
        let (clinical_summary, summary_source) = self.summarizer.summarize(&parameters);
        let suggested_models: Vec<SuggestedModel> =
            route_models(&parameters).iter().map(SuggestedModel::from).collect();

        tracing::info!(
            found = parameters.len(),
            abnormal = status_counts.abnormal,
            borderline = status_counts.borderline,
            summary_source = summary_source.as_str(),
            models = suggested_models.len(),
            "Report analyzed"
        );

        AnalysisResult {
            total_found: parameters.len(),
            parameters,
            status_counts,
            clinical_summary,
            summary_source,
            suggested_models,
            risk_assessment,
            message: None,
            quality_note,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    fn quality_note(&self, hint: QualityHint) -> Option<String> {
        let pixels = u64::from(hint.width) * u64::from(hint.height);
        if pixels >= self.min_image_pixels {
            return None;
        }
        tracing::warn!(
            width = hint.width,
            height = hint.height,
            "Low-resolution scan, OCR accuracy may be reduced"
        );
        Some(MessageTemplates::low_resolution(hint.width, hint.height))
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Build a `ReportAnalyzer` with production implementations.
///
/// - Catalog: `config.catalog_path` or the bundled catalog
/// - Summary: `OllamaClient` when `config.ollama_url` is set and serves
///   `config.summary_model`, rule-based otherwise
pub fn build_analyzer(config: &AnalyzerConfig) -> Result<ReportAnalyzer, ProcessingError> {
    let catalog = match &config.catalog_path {
        Some(path) => ParameterCatalog::load(path)?,
        None => ParameterCatalog::standard()?,
    };

    let summarizer = match &config.ollama_url {
        Some(url) => {
            let client = OllamaClient::new(url, config.summary_timeout_secs)?;
            tracing::debug!(url = %url, "Checking summary model");
            ClinicalSummarizer::checked(Box::new(client), &config.summary_model)
        }
        None => {
            tracing::info!("AI summary disabled, using rule-based summary");
            ClinicalSummarizer::rule_based()
        }
    };

    Ok(ReportAnalyzer::new(Arc::new(catalog))
        .with_summarizer(summarizer)
        .with_config(config))
}

fn empty_result(message: String, quality_note: Option<String>) -> AnalysisResult {
    let status_counts = StatusCounts::default();
    AnalysisResult {
        parameters: Vec::new(),
        total_found: 0,
        status_counts,
        clinical_summary: rule_based_summary(&[]),
        summary_source: SummarySource::RuleBased,
        suggested_models: Vec::new(),
        risk_assessment: RiskAssessment::from_counts(&status_counts),
        message: Some(message),
        quality_note,
        disclaimer: DISCLAIMER.to_string(),
    }
}
