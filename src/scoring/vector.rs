//! Primary calculator: weighted embedding similarity with logistic rescaling.

use crate::domain::{CandidateProfile, RequesterProfile};

use super::features::{FeatureSet, extract};

/// Steepness of the logistic curve applied to the raw score.
pub const LOGISTIC_STEEPNESS: f64 = 0.1;
/// Raw score at the logistic midpoint.
pub const LOGISTIC_MIDPOINT: f64 = 50.0;

/// Outcome of one vector comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorScore {
    /// Weighted similarity on a 0..=100 scale, before rescaling.
    pub raw: f64,
    pub score: u8,
    pub features_compared: usize,
}

/// Scores `candidate` against `requester` with the embedding model.
#[must_use]
pub fn vector_score(requester: &RequesterProfile, candidate: &CandidateProfile) -> VectorScore {
    let features = extract(requester, candidate);
    let features_compared = features.len();

    match weighted_similarity(&features) {
        Some(raw) => VectorScore {
            raw,
            score: to_score(logistic_rescale(raw)),
            features_compared,
        },
        // 比較できる特徴がない場合は 0 点（互換性を主張しない）
        None => VectorScore {
            raw: 0.0,
            score: 0,
            features_compared,
        },
    }
}

/// `100 * Σ(sim·w) / Σw` over the shared features, or `None` when nothing is
/// shared.
#[must_use]
pub fn weighted_similarity(features: &FeatureSet) -> Option<f64> {
    let (weighted, total_weight) = features.pairs().iter().fold(
        (0.0_f64, 0.0_f64),
        |(weighted, total), (feature, pair)| {
            let weight = feature.weight();
            (weighted + pair.similarity() * weight, total + weight)
        },
    );

    if total_weight <= 0.0 {
        return None;
    }

    Some(100.0 * weighted / total_weight)
}

/// Logistic curve centred at 50, rescaled so that 0 stays 0 and 100 stays 100.
///
/// Differences near the middle of the range are stretched; the tails are
/// compressed.
#[must_use]
pub fn logistic_rescale(raw: f64) -> f64 {
    let low = sigmoid(0.0);
    let high = sigmoid(100.0);
    100.0 * (sigmoid(raw) - low) / (high - low)
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-LOGISTIC_STEEPNESS * (x - LOGISTIC_MIDPOINT)).exp())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
