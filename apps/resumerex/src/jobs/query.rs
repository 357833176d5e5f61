use serde::{Deserialize, Serialize};

use crate::resume::keywords::KeywordList;

/// Keywords considered for a query at all.
const MAX_QUERY_KEYWORDS: usize = 6;
/// Up to this many keywords are all required (AND).
const MAX_AND_KEYWORDS: usize = 3;
/// Keywords OR-joined when the list is too long to require all of them.
const MAX_OR_KEYWORDS: usize = 5;

/// How keywords are combined into a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// AND for short lists, OR otherwise.
    #[default]
    Auto,
    /// Always AND.
    Precise,
}

pub fn build_query(keywords: &KeywordList, mode: SearchMode) -> String {
    let terms: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .take(MAX_QUERY_KEYWORDS)
        .collect();

    if terms.len() <= MAX_AND_KEYWORDS || mode == SearchMode::Precise {
        terms.join(" AND ")
    } else {
        terms[..terms.len().min(MAX_OR_KEYWORDS)].join(" OR ")
    }
}

/// Trims the location; an empty location means "let the search engine decide".
///
/// No geocoding: free text such as "Berlin" or "Austin, TX" is passed through as-is.
pub fn normalize_location(location: &str) -> Option<String> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(terms: &[&str]) -> KeywordList {
        KeywordList::from_terms(terms.iter().copied(), 10)
    }

    #[test]
    fn test_seven_keywords_default_mode_ors_first_five() {
        let list = keywords(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(build_query(&list, SearchMode::Auto), "a OR b OR c OR d OR e");
    }

    #[test]
    fn test_two_keywords_are_anded() {
        let list = keywords(&["Rust", "Tokio"]);
        assert_eq!(build_query(&list, SearchMode::Auto), "Rust AND Tokio");
    }

    #[test]
    fn test_three_keywords_still_anded() {
        let list = keywords(&["Rust", "Tokio", "Axum"]);
        assert_eq!(
            build_query(&list, SearchMode::Auto),
            "Rust AND Tokio AND Axum"
        );
    }

    #[test]
    fn test_four_keywords_are_ored() {
        let list = keywords(&["a", "b", "c", "d"]);
        assert_eq!(build_query(&list, SearchMode::Auto), "a OR b OR c OR d");
    }

    #[test]
    fn test_four_fallback_keywords_are_ored() {
        let list = KeywordList::fallback(4);
        assert_eq!(
            build_query(&list, SearchMode::Auto),
            "Python OR SQL OR Data Analysis OR Machine Learning"
        );
    }

    #[test]
    fn test_precise_mode_ands_first_six() {
        let list = keywords(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(
            build_query(&list, SearchMode::Precise),
            "a AND b AND c AND d AND e AND f"
        );
    }

    #[test]
    fn test_empty_keywords_build_empty_query() {
        assert_eq!(build_query(&KeywordList::default(), SearchMode::Auto), "");
    }

    #[test]
    fn test_location_is_trimmed_and_passed_through() {
        assert_eq!(normalize_location("  Remote "), Some("Remote".to_string()));
        assert_eq!(
            normalize_location("Austin, TX"),
            Some("Austin, TX".to_string())
        );
        assert_eq!(normalize_location("   "), None);
    }

    #[test]
    fn test_search_mode_serde() {
        let mode: SearchMode = serde_json::from_str(r#""precise""#).unwrap();
        assert_eq!(mode, SearchMode::Precise);
        assert_eq!(SearchMode::default(), SearchMode::Auto);
    }
}
