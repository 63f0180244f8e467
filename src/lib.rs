//! Bra Fit - sizing recommendations from free-text fit descriptions
//!
//! This library provides the recommendation engine behind the fitting service.
//! It extracts measurements and fit complaints from a query, scores them
//! against a knowledge base of fit profiles, and suggests a size with its
//! sister sizes.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{RecommendationEngine, RecommendationError, extract_measurements, detect_issues, sister_sizes};
pub use crate::models::{FitProfile, IssueTag, Measurements, RecommendationResult, RecommendationOutcome, ScoringWeights, RankingPolicy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let engine = RecommendationEngine::with_defaults(vec![FitProfile::new("32 underbust 34 overbust", "32D")]);
        assert!(!engine.get_recommendation("32 underbust 34 overbust").is_error());
        assert_eq!(sister_sizes("32D"), vec!["30DD", "34C"]);
    }
}
