//! Application services

pub mod report;
pub mod store;

pub use report::{agent_lines, summary, template_lines, Summary, NO_AGENTS, NO_TEMPLATES};
pub use store::DocumentStore;
