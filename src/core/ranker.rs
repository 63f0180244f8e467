use crate::core::scoring::calculate_similarity;
use crate::models::{FitProfile, MatchTier, RankingPolicy, ScoredCandidate, ScoringWeights};

/// Outcome of ranking the scored knowledge base
#[derive(Debug, Clone, Copy)]
pub enum RankOutcome<'a> {
    Match {
        candidate: ScoredCandidate<'a>,
        tier: MatchTier,
    },
    NoMatch,
}

impl RankingPolicy {
    /// Tiers in evaluation order, each with the similarity a candidate must exceed
    pub fn tiers(&self) -> [(MatchTier, f64); 2] {
        [
            (MatchTier::Confident, self.similarity_threshold),
            (MatchTier::Tentative, self.confidence_floor),
        ]
    }
}

/// Highest-similarity candidate; ties go to the earliest profile
pub fn best_candidate<'a>(candidates: &[ScoredCandidate<'a>]) -> Option<ScoredCandidate<'a>> {
    candidates.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if candidate.similarity <= current.similarity => Some(current),
        _ => Some(candidate),
    })
}

/// Apply the tiered policy to already scored candidates
///
/// The best candidate is checked against each tier top-down and the first
/// tier whose bound it exceeds wins. An empty candidate list is a no-match.
pub fn rank<'a>(candidates: &[ScoredCandidate<'a>], policy: &RankingPolicy) -> RankOutcome<'a> {
    let Some(best) = best_candidate(candidates) else {
        return RankOutcome::NoMatch;
    };

    policy
        .tiers()
        .into_iter()
        .find(|(_, bound)| best.similarity > *bound)
        .map_or(RankOutcome::NoMatch, |(tier, _)| RankOutcome::Match {
            candidate: best,
            tier,
        })
}

/// Score every profile against the query text and rank them
pub fn rank_profiles<'a>(
    query: &str,
    profiles: &'a [FitProfile],
    weights: &ScoringWeights,
    policy: &RankingPolicy,
) -> RankOutcome<'a> {
    let candidates: Vec<ScoredCandidate<'a>> = profiles
        .iter()
        .map(|profile| ScoredCandidate {
            profile,
            similarity: calculate_similarity(query, profile, weights),
        })
        .collect();

    rank(&candidates, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored<'a>(profiles: &'a [FitProfile], scores: &[f64]) -> Vec<ScoredCandidate<'a>> {
        profiles
            .iter()
            .zip(scores)
            .map(|(profile, similarity)| ScoredCandidate {
                profile,
                similarity: *similarity,
            })
            .collect()
    }

    fn profiles() -> Vec<FitProfile> {
        vec![
            FitProfile::new("first", "30B"),
            FitProfile::new("second", "32C"),
            FitProfile::new("third", "34D"),
        ]
    }

    #[test]
    fn test_confident_tier() {
        let profiles = profiles();
        let candidates = scored(&profiles, &[0.2, 0.7, 0.5]);

        match rank(&candidates, &RankingPolicy::default()) {
            RankOutcome::Match { candidate, tier } => {
                assert_eq!(tier, MatchTier::Confident);
                assert_eq!(candidate.profile.recommendation, "32C");
                assert_eq!(candidate.similarity, 0.7);
            }
            RankOutcome::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_ties_go_to_first_profile() {
        let profiles = profiles();
        let candidates = scored(&profiles, &[0.6, 0.6, 0.6]);

        match rank(&candidates, &RankingPolicy::default()) {
            RankOutcome::Match { candidate, .. } => {
                assert_eq!(candidate.profile.recommendation, "30B");
            }
            RankOutcome::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let profiles = profiles();
        let candidates = scored(&profiles, &[0.3, 0.1, 0.0]);

        match rank(&candidates, &RankingPolicy::default()) {
            RankOutcome::Match { candidate, tier } => {
                assert_eq!(tier, MatchTier::Tentative);
                assert_eq!(candidate.profile.recommendation, "30B");
            }
            RankOutcome::NoMatch => panic!("expected a tentative match"),
        }
    }

    #[test]
    fn test_below_floor_is_no_match() {
        let profiles = profiles();
        let candidates = scored(&profiles, &[0.1, 0.05, 0.0]);

        assert!(matches!(
            rank(&candidates, &RankingPolicy::default()),
            RankOutcome::NoMatch
        ));
    }

    #[test]
    fn test_empty_knowledge_base() {
        assert!(matches!(rank(&[], &RankingPolicy::default()), RankOutcome::NoMatch));
        assert!(matches!(
            rank_profiles("32 band", &[], &ScoringWeights::default(), &RankingPolicy::default()),
            RankOutcome::NoMatch
        ));
    }

    #[test]
    fn test_custom_policy() {
        let profiles = profiles();
        let candidates = scored(&profiles, &[0.25, 0.0, 0.0]);
        let policy = RankingPolicy {
            similarity_threshold: 0.2,
            confidence_floor: 0.1,
        };

        match rank(&candidates, &policy) {
            RankOutcome::Match { tier, .. } => assert_eq!(tier, MatchTier::Confident),
            RankOutcome::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_rank_profiles_scores_text() {
        let profiles = vec![
            FitProfile::new("36 underbust 42 overbust", "36DDD"),
            FitProfile::new("32 underbust 34 overbust", "32D"),
        ];

        match rank_profiles(
            "32 underbust 34 overbust",
            &profiles,
            &ScoringWeights::default(),
            &RankingPolicy::default(),
        ) {
            RankOutcome::Match { candidate, tier } => {
                assert_eq!(tier, MatchTier::Confident);
                assert_eq!(candidate.profile.recommendation, "32D");
            }
            RankOutcome::NoMatch => panic!("expected a match"),
        }
    }
}
