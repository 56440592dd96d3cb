use super::SummaryError;

/// LLM client abstraction (allows mocking).
///
/// Shared across analysis threads, hence `Send + Sync`.
pub trait LlmClient: Send + Sync {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, SummaryError>;

    fn is_model_available(&self, model: &str) -> Result<bool, SummaryError>;

    fn list_models(&self) -> Result<Vec<String>, SummaryError>;
}
