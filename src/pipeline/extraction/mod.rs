pub mod types;
pub mod sanitize;
pub mod table_detect;
pub mod reference_range;
pub mod orchestrator;

pub use types::*;
pub use sanitize::*;
pub use orchestrator::*;
