use std::collections::HashSet;
use crate::core::{measurements::extract_measurements, text::words};
use crate::models::{FitProfile, Measurements, ScoringWeights};

/// Signals the scorer needs from one piece of text
///
/// Knowledge base descriptions never change, so the engine builds these once
/// per profile and reuses them for every query.
#[derive(Debug, Clone, Default)]
pub struct TextSignals {
    pub words: HashSet<String>,
    pub measurements: Measurements,
}

impl TextSignals {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: words(text).into_iter().collect(),
            measurements: extract_measurements(text),
        }
    }
}

/// Calculate the similarity (0-1) between a query and a fit profile
///
/// Scoring formula, when both sides carry at least one measurement:
/// score = numeric * 0.6 + lexical * 0.4
///
/// otherwise:
/// score = lexical * 0.8 + numeric * 0.2   (numeric is 0 here)
pub fn calculate_similarity(query: &str, profile: &FitProfile, weights: &ScoringWeights) -> f64 {
    let query_signals = TextSignals::from_text(query);
    let profile_signals = TextSignals::from_text(&profile.description);
    score_signals(&query_signals, &profile_signals, weights)
}

/// Similarity between two sets of precomputed signals, clamped to [0, 1]
pub fn score_signals(query: &TextSignals, profile: &TextSignals, weights: &ScoringWeights) -> f64 {
    let lexical = jaccard(&query.words, &profile.words);
    let numeric = measurement_similarity(&query.measurements, &profile.measurements, weights);

    let score = if query.measurements.has_any() && profile.measurements.has_any() {
        numeric * weights.measured_numeric + lexical * weights.measured_lexical
    } else {
        lexical * weights.unmeasured_lexical + numeric * weights.unmeasured_numeric
    };

    clamp_unit(score)
}

/// Jaccard overlap of two word sets; 0 when either is empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Average closeness of the measurement fields present on both sides
pub fn measurement_similarity(
    query: &Measurements,
    profile: &Measurements,
    weights: &ScoringWeights,
) -> f64 {
    let fields = [
        (query.underbust, profile.underbust, weights.underbust_tolerance),
        (query.overbust, profile.overbust, weights.overbust_tolerance),
    ];

    let scores: Vec<f64> = fields
        .iter()
        .filter_map(|(q, p, tolerance)| Some(closeness((*q)?, (*p)?, *tolerance)))
        .collect();

    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Calculate closeness score (0-1)
/// 1.0 at equal values, falling linearly to 0.0 at `tolerance` inches apart
#[inline]
fn closeness(a: u32, b: u32, tolerance: f64) -> f64 {
    let difference = f64::from(a.abs_diff(b));
    if tolerance <= 0.0 {
        return if difference == 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit(1.0 - difference / tolerance)
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
