//! Keyword Extractor: asks the completion service for job-search keywords.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::prompts::keyword_prompt;
use crate::llm_client::{LlmError, TextCompletion};

/// Generic keywords used when extraction fails, so the search path stays usable.
pub const FALLBACK_KEYWORDS: &[&str] = &[
    "Python",
    "SQL",
    "Data Analysis",
    "Machine Learning",
    "Communication",
];

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("Keyword extraction failed: {0}")]
    ExtractionFailed(#[from] LlmError),

    #[error("Keyword extraction failed: the model returned no usable keywords")]
    NoKeywords,
}

/// Ordered keywords, distinct under case-insensitive comparison, capped in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    /// Trims, drops empties, dedupes case-insensitively (first casing wins), caps at `cap`.
    pub fn from_terms<I, S>(terms: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for term in terms {
            if keywords.len() >= cap {
                break;
            }
            let term = term.as_ref().trim();
            if term.is_empty() {
                continue;
            }
            if seen.insert(term.to_lowercase()) {
                keywords.push(term.to_string());
            }
        }
        KeywordList(keywords)
    }

    pub fn fallback(cap: usize) -> Self {
        Self::from_terms(FALLBACK_KEYWORDS.iter().copied(), cap)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for KeywordList {
    fn from(terms: Vec<String>) -> Self {
        let cap = terms.len();
        Self::from_terms(terms, cap)
    }
}

impl From<KeywordList> for Vec<String> {
    fn from(list: KeywordList) -> Self {
        list.0
    }
}

/// Extracts up to `count` keywords from resume text.
///
/// Never substitutes a fallback; that policy belongs to the caller.
pub async fn extract_keywords(
    llm: &dyn TextCompletion,
    text: &str,
    count: usize,
) -> Result<KeywordList, KeywordError> {
    let prompt = keyword_prompt(text, count);
    let raw = llm.complete(&prompt).await?;
    debug!("Raw keyword response: {raw:?}");

    let keywords = parse_keyword_response(&raw, count);
    if keywords.is_empty() {
        return Err(KeywordError::NoKeywords);
    }

    info!("Extracted {} keywords", keywords.len());
    Ok(keywords)
}

/// Parses a comma-separated model response. Newlines also separate terms, and
/// list markers or quotes the model adds around a term are stripped.
pub fn parse_keyword_response(raw: &str, count: usize) -> KeywordList {
    let terms = raw
        .split(|c: char| c == ',' || c == '\n')
        .map(|fragment| {
            fragment
                .trim()
                .trim_start_matches(['-', '*', '•'])
                .trim()
                .trim_matches(['"', '\'', '`'])
                .trim()
        });
    KeywordList::from_terms(terms, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::CannedCompletion;

    fn assert_distinct_and_capped(list: &KeywordList, cap: usize) {
        assert!(list.len() <= cap);
        let lowered: HashSet<String> = list.iter().map(|k| k.to_lowercase()).collect();
        assert_eq!(lowered.len(), list.len(), "duplicates in {list:?}");
    }

    #[test]
    fn test_parse_trims_and_drops_empty_fragments() {
        let list = parse_keyword_response(" Rust , ,Docker,  ,Kubernetes ", 10);
        assert_eq!(list.as_slice(), ["Rust", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_parse_dedupes_case_insensitively_keeping_first_casing() {
        let list = parse_keyword_response("Python, SQL, python, PYTHON, sql, AWS", 10);
        assert_eq!(list.as_slice(), ["Python", "SQL", "AWS"]);
        assert_distinct_and_capped(&list, 10);
    }

    #[test]
    fn test_parse_truncates_after_dedup() {
        let list = parse_keyword_response("a, A, b, c, d, e", 3);
        assert_eq!(list.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_handles_bulleted_lines() {
        let list = parse_keyword_response("- Rust\n- \"Tokio\"\n* Axum", 10);
        assert_eq!(list.as_slice(), ["Rust", "Tokio", "Axum"]);
    }

    #[test]
    fn test_parse_strips_quotes_behind_bullets() {
        let list = parse_keyword_response("• 'Go'\n- `gRPC`\n* \"Data Analysis\"", 10);
        assert_eq!(list.as_slice(), ["Go", "gRPC", "Data Analysis"]);
    }

    #[test]
    fn test_zero_cap_yields_empty_list() {
        assert!(parse_keyword_response("Rust, Go", 0).is_empty());
    }

    #[test]
    fn test_deserialize_enforces_invariant() {
        let list: KeywordList = serde_json::from_str(r#"["Go", "go", " ", "Rust"]"#).unwrap();
        assert_eq!(list.as_slice(), ["Go", "Rust"]);
    }

    #[test]
    fn test_fallback_respects_cap() {
        let list = KeywordList::fallback(2);
        assert_eq!(list.as_slice(), ["Python", "SQL"]);
    }

    #[tokio::test]
    async fn test_extract_keywords_uses_model_order() {
        let llm = CannedCompletion::replying("Rust, Tokio, rust, PostgreSQL, Docker");
        let list = extract_keywords(&llm, "resume", 3).await.unwrap();
        assert_eq!(list.as_slice(), ["Rust", "Tokio", "PostgreSQL"]);
        assert_distinct_and_capped(&list, 3);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_extract_keywords_service_failure_is_extraction_failed() {
        let llm = CannedCompletion::failing();
        let err = extract_keywords(&llm, "resume", 10).await.unwrap_err();
        assert!(matches!(err, KeywordError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_extract_keywords_blank_reply_is_an_error() {
        let llm = CannedCompletion::replying(" , ,\n");
        let err = extract_keywords(&llm, "resume", 10).await.unwrap_err();
        assert!(matches!(err, KeywordError::NoKeywords));
    }
}
