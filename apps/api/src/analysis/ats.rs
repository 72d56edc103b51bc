//! ATS scoring: plain case-insensitive substring overlap between resume text
//! and a keyword list. No tokenization, stemming, or weighting.

use serde::Serialize;

/// Counts are omitted when scoring is degenerate, so the body is `{"score":0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_keywords: Option<usize>,
    /// Percentage of keywords found, 0-100.
    pub score: u32,
}

impl AtsScore {
    fn degenerate() -> Self {
        Self {
            matched_keywords: None,
            total_keywords: None,
            score: 0,
        }
    }
}

/// Scores `resume_text` against `keywords`.
///
/// Every keyword is counted, duplicates included. The score is
/// `floor(matched * 100 / total)`; empty text or an empty keyword list scores 0.
pub fn score_resume<S: AsRef<str>>(resume_text: &str, keywords: &[S]) -> AtsScore {
    if resume_text.is_empty() || keywords.is_empty() {
        return AtsScore::degenerate();
    }
    let total_keywords = keywords.len();

    let haystack = resume_text.to_lowercase();
    let matched_keywords = keywords
        .iter()
        .filter(|kw| {
            let keyword: &str = (*kw).as_ref();
            haystack.contains(&keyword.to_lowercase())
        })
        .count();

    // Integer arithmetic keeps the floor exact (29/100 must be 29, not 28).
    let score = (matched_keywords * 100 / total_keywords) as u32;

    AtsScore {
        matched_keywords: Some(matched_keywords),
        total_keywords: Some(total_keywords),
        score,
    }
}
