//! Report Builder: naive extractive summary plus the keyword list.

use crate::resume::keywords::KeywordList;

const SUMMARY_SENTENCES: usize = 3;

/// First three `.`-separated segments with a trailing period, or the whole
/// trimmed text when there are fewer than three segments.
pub fn summarize(text: &str) -> String {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() >= SUMMARY_SENTENCES {
        format!("{}.", segments[..SUMMARY_SENTENCES].join(".").trim())
    } else {
        text.trim().to_string()
    }
}

pub fn build_report(text: &str, keywords: &KeywordList) -> String {
    let keyword_lines = if keywords.is_empty() {
        "(none)".to_string()
    } else {
        keywords
            .iter()
            .map(|k| format!("- {k}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Resume Summary:\n{}\n\nTop Keywords ({}):\n{}",
        summarize(text),
        keywords.len(),
        keyword_lines
    )
}
