use serde::{Deserialize, Serialize};

use crate::jobs::scoring::score_posting;
use crate::resume::keywords::KeywordList;

/// Placeholder for any field the job-search API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// A job record as returned by the `google_jobs` engine. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPosting {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub detected_extensions: DetectedExtensions,
    #[serde(default)]
    pub apply_options: Vec<ApplyOption>,
    pub share_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectedExtensions {
    pub posted_at: Option<String>,
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyOption {
    pub link: Option<String>,
}

/// A normalized, scored job posting. No field is ever missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted: String,
    pub salary: String,
    pub description: String,
    pub apply_link: String,
    /// Comma-joined keywords found in title + description.
    pub matched_skills: String,
    /// 0.0 – 100.0, one decimal.
    pub relevance_score: f64,
}

impl JobPosting {
    /// Fills sentinels, scores against the full description, then truncates it.
    pub fn from_raw(raw: RawPosting, keywords: &KeywordList, description_max_chars: usize) -> Self {
        let title = or_sentinel(raw.title);
        let full_description = raw.description.unwrap_or_default();
        let relevance = score_posting(keywords, &title, &full_description);

        let apply_link = raw
            .apply_options
            .into_iter()
            .find_map(|option| non_blank(option.link))
            .or_else(|| non_blank(raw.share_link));

        JobPosting {
            company: or_sentinel(raw.company_name),
            location: or_sentinel(raw.location),
            posted: or_sentinel(raw.detected_extensions.posted_at),
            salary: or_sentinel(raw.detected_extensions.salary),
            description: if full_description.trim().is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                truncate_chars(full_description.trim(), description_max_chars)
            },
            apply_link: or_sentinel(apply_link),
            matched_skills: relevance.matched.join(", "),
            relevance_score: relevance.score,
            title,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn or_sentinel(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", text[..byte_index].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keywords(terms: &[&str]) -> KeywordList {
        KeywordList::from_terms(terms.iter().copied(), 10)
    }

    #[test]
    fn test_full_record_normalizes() {
        let raw: RawPosting = serde_json::from_value(json!({
            "title": "Rust Engineer",
            "company_name": "Acme",
            "location": "Berlin, Germany",
            "description": "Tokio and Axum services.",
            "detected_extensions": {"posted_at": "3 days ago", "salary": "80K–100K a year"},
            "apply_options": [
                {"title": "LinkedIn", "link": "https://linkedin.example/job/1"},
                {"title": "Indeed", "link": "https://indeed.example/job/1"}
            ],
            "share_link": "https://google.example/share"
        }))
        .unwrap();

        let job = JobPosting::from_raw(raw, &keywords(&["Rust", "Axum", "Go"]), 300);
        assert_eq!(job.title, "Rust Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.location, "Berlin, Germany");
        assert_eq!(job.posted, "3 days ago");
        assert_eq!(job.salary, "80K–100K a year");
        assert_eq!(job.apply_link, "https://linkedin.example/job/1");
        assert_eq!(job.matched_skills, "Rust, Axum");
        assert_eq!(job.relevance_score, 66.7);
    }

    #[test]
    fn test_missing_company_becomes_sentinel() {
        let raw: RawPosting = serde_json::from_value(json!({"title": "Analyst"})).unwrap();
        let job = JobPosting::from_raw(raw, &keywords(&["SQL"]), 300);
        assert_eq!(job.company, NOT_AVAILABLE);
        assert_eq!(job.location, NOT_AVAILABLE);
        assert_eq!(job.posted, NOT_AVAILABLE);
        assert_eq!(job.salary, NOT_AVAILABLE);
        assert_eq!(job.description, NOT_AVAILABLE);
        assert_eq!(job.apply_link, NOT_AVAILABLE);
        assert_eq!(job.matched_skills, "");
        assert_eq!(job.relevance_score, 0.0);
    }

    #[test]
    fn test_empty_record_has_every_field() {
        let job = JobPosting::from_raw(RawPosting::default(), &keywords(&["SQL"]), 300);
        let value = serde_json::to_value(&job).unwrap();
        for field in [
            "title",
            "company",
            "location",
            "posted",
            "salary",
            "description",
            "apply_link",
            "matched_skills",
            "relevance_score",
        ] {
            assert!(!value[field].is_null(), "{field} is missing");
        }
        assert_eq!(job.title, NOT_AVAILABLE);
    }

    #[test]
    fn test_share_link_used_without_apply_options() {
        let raw = RawPosting {
            share_link: Some("https://google.example/share".to_string()),
            ..RawPosting::default()
        };
        let job = JobPosting::from_raw(raw, &KeywordList::default(), 300);
        assert_eq!(job.apply_link, "https://google.example/share");
    }

    #[test]
    fn test_scoring_sees_text_beyond_truncation() {
        let description = format!("{} Kubernetes", "filler ".repeat(100));
        let raw = RawPosting {
            title: Some("SRE".to_string()),
            description: Some(description),
            ..RawPosting::default()
        };
        let job = JobPosting::from_raw(raw, &keywords(&["Kubernetes"]), 50);
        assert_eq!(job.relevance_score, 100.0);
        assert!(job.description.ends_with("..."));
        assert!(!job.description.contains("Kubernetes"));
    }

    #[test]
    fn test_truncate_chars_respects_budget_and_utf8() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }
}
