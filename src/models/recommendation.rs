use serde::{Deserialize, Serialize};

use super::Book;

/// Structured justification behind a recommendation
///
/// This is the source of truth for analytics and tests; the headline `reason`
/// string is picked for variety and may not name the strongest signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_count_for_genre: Option<u32>,
    pub community_rating: f64,
    pub popularity: i64,
}

impl ReasonDetails {
    pub fn is_fallback(&self) -> bool {
        self.fallback.unwrap_or(false)
    }
}

/// One ranked recommendation ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    pub book: Book,
    pub reason: String,
    pub reason_details: ReasonDetails,
    pub match_score: u8,
}
