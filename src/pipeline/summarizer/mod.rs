pub mod types;
pub mod prompt;
pub mod ollama;
pub mod clinical;

pub use types::*;
pub use prompt::*;
pub use ollama::*;
pub use clinical::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Ollama is not running at {0}")]
    OllamaConnection(String),

    #[error("Ollama returned error (status {status}): {body}")]
    OllamaError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Summary too short ({0} characters)")]
    ResponseTooShort(usize),
}
