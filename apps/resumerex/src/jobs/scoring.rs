//! Relevance scoring: how much of the keyword list a posting mentions.
//!
//! Algorithm:
//! 1. Lowercase `title + " " + description`.
//! 2. A keyword matches when its lowercase form is a substring of that text.
//! 3. score = matched / total × 100, rounded to one decimal.
//!
//! Matching is raw substring containment, so "java" also matches "javascript".

use crate::resume::keywords::KeywordList;

#[derive(Debug, Clone, PartialEq)]
pub struct Relevance {
    /// Matched keywords, in keyword-list order and original casing.
    pub matched: Vec<String>,
    /// 0.0 – 100.0
    pub score: f64,
}

pub fn score_posting(keywords: &KeywordList, title: &str, description: &str) -> Relevance {
    if keywords.is_empty() {
        return Relevance {
            matched: vec![],
            score: 0.0,
        };
    }

    let haystack = format!("{title} {description}").to_lowercase();
    let matched: Vec<String> = keywords
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    let ratio = matched.len() as f64 / keywords.len() as f64;
    Relevance {
        matched,
        score: round_one_decimal(ratio * 100.0),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
