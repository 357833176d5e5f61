//! Resume analysis: orchestrates the per-resume stages.
//!
//! Flow: extract_keywords (fallback on failure) → generate_feedback → build_report.
//! Stages run one after another; a failed stage degrades, it never aborts the run.

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::TextCompletion;
use crate::resume::feedback::generate_feedback;
use crate::resume::keywords::{extract_keywords, KeywordList};
use crate::resume::loader::ResumeDocument;
use crate::resume::report::build_report;

/// Whether the keyword list came from the document or from the fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSource {
    Extracted,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub keywords: KeywordList,
    pub keyword_source: KeywordSource,
    /// Set when extraction failed and the fallback list was substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_warning: Option<String>,
    pub feedback: String,
    pub report: String,
}

pub async fn analyze_resume(
    llm: &dyn TextCompletion,
    document: &ResumeDocument,
    keyword_count: usize,
) -> ResumeAnalysis {
    let text = document.text();
    info!(
        "Analyzing {:?} resume ({} chars)",
        document.format(),
        text.chars().count()
    );

    let (keywords, keyword_source, keyword_warning) =
        match extract_keywords(llm, text, keyword_count).await {
            Ok(keywords) => (keywords, KeywordSource::Extracted, None),
            Err(e) => {
                warn!("{e}; falling back to generic keywords");
                (
                    KeywordList::fallback(keyword_count),
                    KeywordSource::Fallback,
                    Some(e.to_string()),
                )
            }
        };
    info!("Using {} keywords ({:?})", keywords.len(), keyword_source);

    let feedback = generate_feedback(llm, text).await;
    let report = build_report(text, &keywords);

    ResumeAnalysis {
        keywords,
        keyword_source,
        keyword_warning,
        feedback,
        report,
    }
}
