// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Measurements, IssueTag, FitProfile, ScoredCandidate, MatchTier, ScoringWeights, RankingPolicy};
pub use requests::RecommendationRequest;
pub use responses::{RecommendationResult, RecommendationOutcome, HealthResponse, ErrorResponse};
