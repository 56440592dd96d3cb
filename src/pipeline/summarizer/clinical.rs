use super::prompt::{build_summary_prompt, SUMMARY_SYSTEM_PROMPT};
use super::types::LlmClient;
use super::SummaryError;
use crate::intelligence::rule_based_summary;
use crate::models::enums::SummarySource;
use crate::models::lab::ExtractedParameter;

/// AI answers this short or shorter are discarded.
const MIN_AI_SUMMARY_CHARS: usize = 20;

/// Produces the clinical summary, preferring the LLM when one is configured.
///
/// Summary generation never fails: any client error or trivial answer falls
/// back to the rule-based summary.
pub struct ClinicalSummarizer {
    client: Option<Box<dyn LlmClient>>,
    model: String,
}

impl ClinicalSummarizer {
    /// Rule-based only; no LLM is contacted.
    pub fn rule_based() -> Self {
        Self {
            client: None,
            model: String::new(),
        }
    }

    pub fn with_client(client: Box<dyn LlmClient>, model: &str) -> Self {
        Self {
            client: Some(client),
            model: model.to_string(),
        }
    }

    /// Use `client` only if it serves `model`; otherwise stay rule-based.
    pub fn checked(client: Box<dyn LlmClient>, model: &str) -> Self {
        match client.is_model_available(model) {
            Ok(true) => {
                tracing::info!(model, "AI summary enabled");
                Self::with_client(client, model)
            }
            Ok(false) => {
                let available = client.list_models().unwrap_or_default();
                tracing::warn!(
                    model,
                    ?available,
                    "Summary model not installed, using rule-based summary"
                );
                Self::rule_based()
            }
            Err(e) => {
                tracing::warn!(
                    model,
                    error = %e,
                    "Summary model check failed, using rule-based summary"
                );
                Self::rule_based()
            }
        }
    }

    pub fn summarize(&self, parameters: &[ExtractedParameter]) -> (String, SummarySource) {
        let Some(client) = self.client.as_deref() else {
            return (rule_based_summary(parameters), SummarySource::RuleBased);
        };
        if parameters.is_empty() {
            return (rule_based_summary(parameters), SummarySource::RuleBased);
        }

        match self.ai_summary(client, parameters) {
            Ok(summary) => {
                tracing::info!(model = %self.model, chars = summary.len(), "AI summary accepted");
                (summary, SummarySource::Ai)
            }
            Err(e) => {
                tracing::warn!(
                    model = %self.model,
                    error = %e,
                    "AI summary unavailable, using rule-based summary"
                );
                (rule_based_summary(parameters), SummarySource::RuleBased)
            }
        }
    }

    fn ai_summary(
        &self,
        client: &dyn LlmClient,
        parameters: &[ExtractedParameter],
    ) -> Result<String, SummaryError> {
        let prompt = build_summary_prompt(parameters);
        let response = client.generate(&self.model, &prompt, SUMMARY_SYSTEM_PROMPT)?;
        let trimmed = response.trim();
        let chars = trimmed.chars().count();
        if chars <= MIN_AI_SUMMARY_CHARS {
            return Err(SummaryError::ResponseTooShort(chars));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for ClinicalSummarizer {
    fn default() -> Self {
        Self::rule_based()
    }
}
