// Job search: query → API → normalize → score → rank → export.
// All job-search calls go through client::JobSearch.

pub mod client;
pub mod export;
pub mod handlers;
pub mod posting;
pub mod query;
pub mod scoring;
pub mod search;
