pub mod messages;
pub mod recommendations;
pub mod summary;

pub use messages::{MessageTemplates, DISCLAIMER};
pub use recommendations::recommend;
pub use summary::rule_based_summary;
