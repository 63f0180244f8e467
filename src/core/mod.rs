// Core algorithm exports
pub mod issues;
pub mod measurements;
pub mod ranker;
pub mod recommender;
pub mod scoring;
pub mod sizing;
pub mod text;

pub use issues::{detect_issues, ISSUE_PHRASES};
pub use measurements::extract_measurements;
pub use ranker::{rank, rank_profiles, best_candidate, RankOutcome};
pub use recommender::{RecommendationEngine, RecommendationError};
pub use scoring::{calculate_similarity, score_signals, TextSignals};
pub use sizing::{sister_sizes, BraSize, CUP_PROGRESSION};
