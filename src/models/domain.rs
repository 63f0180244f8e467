use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Underbust/overbust measurements in whole inches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub underbust: Option<u32>,
    pub overbust: Option<u32>,
}

impl Measurements {
    pub fn new(underbust: Option<u32>, overbust: Option<u32>) -> Self {
        Self { underbust, overbust }
    }

    /// True when neither field was found
    pub fn is_empty(&self) -> bool {
        self.underbust.is_none() && self.overbust.is_none()
    }

    /// True when at least one field was found
    pub fn has_any(&self) -> bool {
        !self.is_empty()
    }
}

/// Canonical fit problem categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    BandRidingUp,
    StrapsFalling,
    StrapsDigging,
    CupWrinkling,
    CupGapping,
    Quadraboob,
    WirePoking,
    GoreFloating,
}

impl IssueTag {
    pub const ALL: [IssueTag; 8] = [
        IssueTag::BandRidingUp,
        IssueTag::StrapsFalling,
        IssueTag::StrapsDigging,
        IssueTag::CupWrinkling,
        IssueTag::CupGapping,
        IssueTag::Quadraboob,
        IssueTag::WirePoking,
        IssueTag::GoreFloating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueTag::BandRidingUp => "band_riding_up",
            IssueTag::StrapsFalling => "straps_falling",
            IssueTag::StrapsDigging => "straps_digging",
            IssueTag::CupWrinkling => "cup_wrinkling",
            IssueTag::CupGapping => "cup_gapping",
            IssueTag::Quadraboob => "quadraboob",
            IssueTag::WirePoking => "wire_poking",
            IssueTag::GoreFloating => "gore_floating",
        }
    }
}

impl fmt::Display for IssueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knowledge base record describing one fit situation and the size that solves it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitProfile {
    pub description: String,
    pub recommendation: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub fit_tips: String,
    #[serde(default)]
    pub common_issues: BTreeSet<IssueTag>,
}

impl FitProfile {
    /// Build a profile with empty reasoning, tips and issues
    pub fn new(description: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            recommendation: recommendation.into(),
            reasoning: String::new(),
            fit_tips: String::new(),
            common_issues: BTreeSet::new(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_fit_tips(mut self, fit_tips: impl Into<String>) -> Self {
        self.fit_tips = fit_tips.into();
        self
    }
}

/// A profile paired with its similarity to the current query
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub profile: &'a FitProfile,
    pub similarity: f64,
}

/// Which ranking tier produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Best candidate cleared the similarity threshold
    Confident,
    /// Best candidate only cleared the absolute floor
    Tentative,
    /// Nothing cleared the floor
    #[serde(rename = "none")]
    Unmatched,
}

/// Similarity scoring weights and tolerances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Numeric weight when both sides carry measurements
    pub measured_numeric: f64,
    /// Lexical weight when both sides carry measurements
    pub measured_lexical: f64,
    /// Lexical weight when either side lacks measurements
    pub unmeasured_lexical: f64,
    /// Numeric weight when either side lacks measurements
    pub unmeasured_numeric: f64,
    /// Underbust difference (inches) at which closeness reaches zero
    pub underbust_tolerance: f64,
    /// Overbust difference (inches) at which closeness reaches zero
    pub overbust_tolerance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            measured_numeric: 0.6,
            measured_lexical: 0.4,
            unmeasured_lexical: 0.8,
            unmeasured_numeric: 0.2,
            underbust_tolerance: 2.0,
            overbust_tolerance: 3.0,
        }
    }
}

/// Thresholds for the tiered ranking policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingPolicy {
    /// Similarity a candidate must exceed to be a confident match
    pub similarity_threshold: f64,
    /// Similarity a candidate must exceed to be returned at all
    pub confidence_floor: f64,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            confidence_floor: 0.1,
        }
    }
}
