use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::models::domain::{IssueTag, MatchTier};

/// Sizing recommendation returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendation: Option<String>,
    pub confidence: f64,
    pub reasoning: String,
    pub fit_tips: String,
    pub identified_issues: BTreeSet<IssueTag>,
    pub sister_sizes: Vec<String>,
    pub match_tier: MatchTier,
}

/// Either a complete recommendation or an error payload, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    Recommendation(RecommendationResult),
    Error(ErrorResponse),
}

impl RecommendationOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, RecommendationOutcome::Error(_))
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
