pub mod extraction;
pub mod classify;
pub mod model_router;
pub mod summarizer;
pub mod processor; // Report analysis orchestrator

pub use processor::{build_analyzer, ProcessingError, ReportAnalyzer};
