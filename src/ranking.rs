//! Ranking a candidate pool against one requester.

use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::cache::ScoreCache;
use crate::config::EngineConfig;
use crate::domain::{CandidateProfile, RequesterProfile};
use crate::presentation::{ColorBand, MatchLabel};
use crate::scoring::{Algorithm, evaluate};

/// Post-sort filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Drop candidates scoring below this.
    pub min_score: Option<u8>,
    /// Keep at most this many candidates.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub score: u8,
    /// `None` when the score came from the cache.
    pub algorithm: Option<Algorithm>,
    pub label: MatchLabel,
    pub band: ColorBand,
}

impl<'a> RankedCandidate<'a> {
    fn new(candidate: &'a CandidateProfile, score: u8, algorithm: Option<Algorithm>) -> Self {
        Self {
            candidate,
            score,
            algorithm,
            label: MatchLabel::for_score(score),
            band: ColorBand::for_score(score),
        }
    }
}

/// Ranked candidates sharing a color band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tier<'a> {
    pub band: ColorBand,
    pub members: Vec<RankedCandidate<'a>>,
}

/// Scores every candidate and sorts by descending score.
///
/// Pools of at least `config.parallel_threshold` candidates are scored on the
/// rayon pool. The sort is stable, so equal scores keep their input order.
#[instrument(skip_all, fields(requester_id = %requester.id, candidates = candidates.len()))]
pub fn rank<'a>(
    requester: &RequesterProfile,
    candidates: &'a [CandidateProfile],
    config: &EngineConfig,
    options: RankOptions,
) -> Vec<RankedCandidate<'a>> {
    let score_one = |candidate: &'a CandidateProfile| {
        let breakdown = evaluate(requester, candidate, config);
        RankedCandidate::new(candidate, breakdown.score, Some(breakdown.algorithm))
    };

    let scored = score_pool(candidates, config, score_one);
    finish(scored, options)
}

/// Like [`rank`], reading scores from `cache` when present and storing the
/// ones it computes.
#[instrument(skip_all, fields(requester_id = %requester.id, candidates = candidates.len()))]
pub fn rank_cached<'a>(
    requester: &RequesterProfile,
    candidates: &'a [CandidateProfile],
    config: &EngineConfig,
    options: RankOptions,
    cache: &ScoreCache,
) -> Vec<RankedCandidate<'a>> {
    let score_one = |candidate: &'a CandidateProfile| {
        // キャッシュヒット時は算出方式が分からないため None のまま
        let mut algorithm = None;
        let score = cache.get_or_compute(&requester.id, &candidate.id, || {
            let breakdown = evaluate(requester, candidate, config);
            algorithm = Some(breakdown.algorithm);
            breakdown.score
        });
        RankedCandidate::new(candidate, score, algorithm)
    };

    let scored = score_pool(candidates, config, score_one);
    finish(scored, options)
}

/// Groups a ranking by color band, strongest first. Empty bands are omitted.
#[must_use]
pub fn tiers<'a>(ranking: &[RankedCandidate<'a>]) -> Vec<Tier<'a>> {
    ColorBand::ALL
        .into_iter()
        .filter_map(|band| {
            let members: Vec<RankedCandidate<'a>> = ranking
                .iter()
                .filter(|ranked| ranked.band == band)
                .cloned()
                .collect();
            (!members.is_empty()).then_some(Tier { band, members })
        })
        .collect()
}

fn score_pool<'a, F>(
    candidates: &'a [CandidateProfile],
    config: &EngineConfig,
    score_one: F,
) -> Vec<RankedCandidate<'a>>
where
    F: Fn(&'a CandidateProfile) -> RankedCandidate<'a> + Sync + Send,
{
    if candidates.len() >= config.parallel_threshold {
        tracing::debug!(
            threshold = config.parallel_threshold,
            "scoring candidate pool in parallel"
        );
        // indexed par_iter の collect は入力順を保持する
        candidates.par_iter().map(score_one).collect()
    } else {
        candidates.iter().map(score_one).collect()
    }
}

fn finish(mut scored: Vec<RankedCandidate<'_>>, options: RankOptions) -> Vec<RankedCandidate<'_>> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(min_score) = options.min_score {
        scored.retain(|ranked| ranked.score >= min_score);
    }
    if let Some(limit) = options.limit {
        scored.truncate(limit);
    }

    tracing::info!(
        ranked = scored.len(),
        top_score = scored.first().map(|ranked| ranked.score),
        "candidate pool ranked"
    );
    scored
}
