use std::collections::BTreeSet;
use thiserror::Error;
use crate::core::{
    issues::detect_issues,
    ranker::{rank, RankOutcome},
    scoring::{score_signals, TextSignals},
    sizing::sister_sizes,
};
use crate::models::{
    ErrorResponse, FitProfile, IssueTag, MatchTier, RankingPolicy, RecommendationOutcome,
    RecommendationResult, ScoredCandidate, ScoringWeights,
};

pub const EMPTY_QUERY_MESSAGE: &str = "Query cannot be empty";

pub const NO_SIGNAL_MESSAGE: &str =
    "Please include your underbust and overbust measurements or describe how your current bra fits";

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request. Please try again later.";

const TENTATIVE_PREFIX: &str =
    "This is a lower confidence match based on a partial similarity to our fitting guide.";

const NO_MATCH_REASONING: &str =
    "We couldn't find a close enough match for your measurements and fit description.";

const NO_MATCH_FIT_TIPS: &str = "Measure your underbust snugly around your ribcage and your overbust loosely at the fullest point of your bust, then try again with both numbers and a description of any fit problems.";

/// Errors that can occur while producing a recommendation
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("{0}")]
    Validation(String),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Query validation
/// 2. Measurement extraction and issue detection
/// 3. Similarity scoring against every knowledge base profile
/// 4. Tiered ranking
/// 5. Sister sizing and result assembly
///
/// The knowledge base is owned and never mutated, so one engine can serve
/// any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    profiles: Vec<FitProfile>,
    signals: Vec<TextSignals>,
    weights: ScoringWeights,
    policy: RankingPolicy,
}

impl RecommendationEngine {
    pub fn new(profiles: Vec<FitProfile>, weights: ScoringWeights, policy: RankingPolicy) -> Self {
        let signals = profiles
            .iter()
            .map(|profile| TextSignals::from_text(&profile.description))
            .collect();

        Self {
            profiles,
            signals,
            weights,
            policy,
        }
    }

    pub fn with_defaults(profiles: Vec<FitProfile>) -> Self {
        Self::new(profiles, ScoringWeights::default(), RankingPolicy::default())
    }

    pub fn profiles(&self) -> &[FitProfile] {
        &self.profiles
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Produce a recommendation or an error payload; never fails
    ///
    /// Unexpected failures are logged with their detail and reported to the
    /// caller with a generic message.
    pub fn get_recommendation(&self, query: &str) -> RecommendationOutcome {
        match self.recommend(query) {
            Ok(result) => RecommendationOutcome::Recommendation(result),
            Err(RecommendationError::Validation(message)) => {
                tracing::debug!("Rejected query: {}", message);
                RecommendationOutcome::Error(ErrorResponse::new(message))
            }
            Err(e @ RecommendationError::Unexpected(_)) => {
                tracing::error!("Recommendation failed: {}", e);
                RecommendationOutcome::Error(ErrorResponse::new(UNEXPECTED_ERROR_MESSAGE))
            }
        }
    }

    /// Produce a recommendation for a free-text fit description
    pub fn recommend(&self, query: &str) -> Result<RecommendationResult, RecommendationError> {
        if query.trim().is_empty() {
            return Err(RecommendationError::Validation(EMPTY_QUERY_MESSAGE.to_string()));
        }

        let query_signals = TextSignals::from_text(query);
        let identified_issues = detect_issues(query);

        tracing::debug!(
            "Extracted measurements {:?} and issues {:?}",
            query_signals.measurements,
            identified_issues
        );

        if query_signals.measurements.is_empty() && identified_issues.is_empty() {
            return Err(RecommendationError::Validation(NO_SIGNAL_MESSAGE.to_string()));
        }

        let candidates = self.score_all(&query_signals)?;

        let result = match rank(&candidates, &self.policy) {
            RankOutcome::Match { candidate, tier } => {
                self.build_match(candidate, tier, identified_issues)?
            }
            RankOutcome::NoMatch => no_match(identified_issues),
        };

        tracing::info!(
            "Recommended {:?} ({:?}, confidence {:.3}) from {} profiles",
            result.recommendation,
            result.match_tier,
            result.confidence,
            self.profiles.len()
        );

        Ok(result)
    }

    fn score_all(&self, query: &TextSignals) -> Result<Vec<ScoredCandidate<'_>>, RecommendationError> {
        self.profiles
            .iter()
            .zip(&self.signals)
            .enumerate()
            .map(|(index, (profile, signals))| {
                if profile.description.trim().is_empty() {
                    return Err(RecommendationError::Unexpected(format!(
                        "profile {} has no description",
                        index
                    )));
                }
                Ok(ScoredCandidate {
                    profile,
                    similarity: score_signals(query, signals, &self.weights),
                })
            })
            .collect()
    }

    fn build_match(
        &self,
        candidate: ScoredCandidate<'_>,
        tier: MatchTier,
        identified_issues: BTreeSet<IssueTag>,
    ) -> Result<RecommendationResult, RecommendationError> {
        let profile = candidate.profile;
        let recommendation = profile.recommendation.trim();
        if recommendation.is_empty() {
            return Err(RecommendationError::Unexpected(format!(
                "matched profile '{}' has no recommendation",
                profile.description
            )));
        }

        let reasoning = match tier {
            MatchTier::Tentative if profile.reasoning.is_empty() => TENTATIVE_PREFIX.to_string(),
            MatchTier::Tentative => format!("{} {}", TENTATIVE_PREFIX, profile.reasoning),
            _ => profile.reasoning.clone(),
        };

        Ok(RecommendationResult {
            recommendation: Some(recommendation.to_string()),
            confidence: candidate.similarity,
            reasoning,
            fit_tips: profile.fit_tips.clone(),
            identified_issues,
            sister_sizes: sister_sizes(recommendation),
            match_tier: tier,
        })
    }
}

fn no_match(identified_issues: BTreeSet<IssueTag>) -> RecommendationResult {
    RecommendationResult {
        recommendation: None,
        confidence: 0.0,
        reasoning: NO_MATCH_REASONING.to_string(),
        fit_tips: NO_MATCH_FIT_TIPS.to_string(),
        identified_issues,
        sister_sizes: Vec::new(),
        match_tier: MatchTier::Unmatched,
    }
}
