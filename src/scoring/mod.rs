//! Compatibility scoring engine.
//!
//! `score` is the single entry point. It picks one of two calculators:
//!
//! | calculator | used when |
//! |------------|-----------|
//! | vector (embedding similarity + logistic) | requester has ≥1 preference and either ≥`min_vector_preferences` preferences or any demographic data |
//! | rule table | otherwise |
//!
//! Both are pure functions of their inputs and never fail; missing or
//! unusable data degrades to a lower score, down to 0.

pub mod embedding;
pub mod features;
pub mod rules;
pub mod similarity;
pub mod vector;
pub mod weights;

use std::fmt;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::domain::{CandidateProfile, RequesterProfile};

pub use embedding::{EMBEDDING_DIM, Embedding, embed, embedding};
pub use features::{FeaturePair, FeatureSet, extract};
pub use similarity::{cosine_similarity, scalar_similarity};
pub use weights::{Feature, category_weight};

/// Which calculator produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Vector,
    RuleTable,
}

impl Algorithm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Vector => "vector",
            Algorithm::RuleTable => "rule_table",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score plus the details needed to explain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub algorithm: Algorithm,
    pub features_compared: usize,
}

/// Compatibility of `candidate` with `requester`, 0..=100, using default
/// engine settings.
#[must_use]
pub fn score(requester: &RequesterProfile, candidate: &CandidateProfile) -> u8 {
    evaluate(requester, candidate, &EngineConfig::default()).score
}

#[must_use]
pub fn score_with(
    requester: &RequesterProfile,
    candidate: &CandidateProfile,
    config: &EngineConfig,
) -> u8 {
    evaluate(requester, candidate, config).score
}

/// Data-sufficiency gate.
#[must_use]
pub fn select_algorithm(requester: &RequesterProfile, config: &EngineConfig) -> Algorithm {
    let answered = requester.preferences.len();
    if answered == 0 {
        return Algorithm::RuleTable;
    }

    if answered >= config.min_vector_preferences || !requester.demographic.is_empty() {
        Algorithm::Vector
    } else {
        Algorithm::RuleTable
    }
}

#[must_use]
pub fn evaluate(
    requester: &RequesterProfile,
    candidate: &CandidateProfile,
    config: &EngineConfig,
) -> ScoreBreakdown {
    let algorithm = select_algorithm(requester, config);

    let breakdown = match algorithm {
        Algorithm::Vector => {
            let result = vector::vector_score(requester, candidate);
            tracing::trace!(
                candidate_id = %candidate.id,
                raw_score = result.raw,
                "vector similarity computed"
            );
            ScoreBreakdown {
                score: result.score,
                algorithm,
                features_compared: result.features_compared,
            }
        }
        Algorithm::RuleTable => {
            let result = rules::rule_score(requester, candidate);
            tracing::trace!(
                candidate_id = %candidate.id,
                total = result.total,
                max_possible = result.max_possible,
                "rule table evaluated"
            );
            ScoreBreakdown {
                score: result.score,
                algorithm,
                features_compared: result.features_compared,
            }
        }
    };

    tracing::debug!(
        requester_id = %requester.id,
        candidate_id = %candidate.id,
        algorithm = %breakdown.algorithm,
        features = breakdown.features_compared,
        score = breakdown.score,
        "compatibility scored"
    );

    breakdown
}
