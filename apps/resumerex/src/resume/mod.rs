// Resume analysis: load → keywords → feedback → report.
// All completion calls go through llm_client::TextCompletion.

pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod loader;
pub mod pipeline;
pub mod report;
