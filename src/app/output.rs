//! Rendering ranked results for the terminal.

use std::io::{self, Write};

use serde::Serialize;

use crate::ranking::{RankedCandidate, Tier, tiers};
use crate::scoring::Algorithm;

#[derive(Debug, Serialize)]
struct Report<'a, 'r> {
    requester_id: &'r str,
    results: &'r [RankedCandidate<'a>],
    tiers: Vec<TierSummary<'r>>,
}

#[derive(Debug, Serialize)]
struct TierSummary<'r> {
    band: &'static str,
    css_class: &'static str,
    candidate_ids: Vec<&'r str>,
}

impl<'r> TierSummary<'r> {
    fn from_tier(tier: &Tier<'r>) -> Self {
        Self {
            band: tier.band.as_str(),
            css_class: tier.band.css_class(),
            candidate_ids: tier
                .members
                .iter()
                .map(|ranked| ranked.candidate.id.as_str())
                .collect(),
        }
    }
}

pub fn write_table<W: Write>(out: &mut W, ranking: &[RankedCandidate<'_>]) -> io::Result<()> {
    if ranking.is_empty() {
        return writeln!(out, "no candidates to show");
    }

    let name_width = ranking
        .iter()
        .map(|ranked| ranked.candidate.display_name().chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(
        out,
        "{:>4}  {:<name_width$}  {:>5}  {:<17}  {:<15}  ALGORITHM",
        "#", "NAME", "SCORE", "LABEL", "BAND"
    )?;
    for (position, ranked) in ranking.iter().enumerate() {
        let algorithm = ranked.algorithm.map_or("cached", Algorithm::as_str);
        writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>5}  {:<17}  {:<15}  {}",
            position + 1,
            ranked.candidate.display_name(),
            ranked.score,
            ranked.label.as_str(),
            ranked.band.as_str(),
            algorithm
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    requester_id: &str,
    ranking: &[RankedCandidate<'_>],
) -> serde_json::Result<()> {
    let grouped = tiers(ranking);
    let report = Report {
        requester_id,
        results: ranking,
        tiers: grouped.iter().map(TierSummary::from_tier).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::domain::{CandidateProfile, Preference, PreferenceSet, RequesterProfile, Smoking};
    use crate::ranking::{RankOptions, rank};

    fn prefs(value: Smoking) -> PreferenceSet {
        [Preference::from(value)].into_iter().collect()
    }

    fn fixture() -> (RequesterProfile, Vec<CandidateProfile>) {
        let requester = RequesterProfile::new("me", prefs(Smoking::NonSmoker));
        let candidates = vec![
            CandidateProfile::new("a", prefs(Smoking::NonSmoker)).with_name("Alex"),
            CandidateProfile::new("b", prefs(Smoking::Smoker)).with_name("Jordan"),
        ];
        (requester, candidates)
    }

    #[test]
    fn table_lists_candidates_in_rank_order() {
        let (requester, candidates) = fixture();
        let config = EngineConfig::default();
        let ranking = rank(&requester, &candidates, &config, RankOptions::default());

        let mut buffer = Vec::new();
        write_table(&mut buffer, &ranking).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Alex"));
        assert!(lines[1].contains("Perfect Match"));
        assert!(lines[2].contains("Jordan"));
        assert!(lines[2].contains("Low Compatibility"));
    }

    #[test]
    fn empty_table_says_so() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "no candidates to show\n");
    }

    #[test]
    fn json_report_carries_labels_and_tiers() {
        let (requester, candidates) = fixture();
        let config = EngineConfig::default();
        let ranking = rank(&requester, &candidates, &config, RankOptions::default());

        let mut buffer = Vec::new();
        write_json(&mut buffer, &requester.id, &ranking).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["requester_id"], "me");
        assert_eq!(value["results"][0]["candidate"]["id"], "a");
        assert_eq!(value["results"][0]["score"], 100);
        assert_eq!(value["results"][0]["label"], "Perfect Match");
        assert_eq!(value["results"][0]["band"], "strong-positive");
        assert_eq!(value["tiers"][0]["css_class"], "bg-green-500");
        assert_eq!(value["tiers"][1]["candidate_ids"][0], "b");
    }
}
