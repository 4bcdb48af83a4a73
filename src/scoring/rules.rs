//! Fallback calculator driven by a hand-written compatibility table.
//!
//! Used when the requester has answered too little for the embedding model.
//! Each compared feature contributes `(points, max_points)`; the final score is
//! the ratio of the totals.

use crate::domain::{
    Budget, CandidateProfile, Category, Cleanliness, Pets, Preference, RequesterProfile,
    SleepingHabits, Smoking,
};

use super::features::{location_similarity, same_gender};
use super::vector::to_score;
use super::weights::category_weight;

/// Points for an exact match before weighting.
pub const FULL_MATCH_POINTS: f64 = 10.0;
/// Points for a pair with no table entry: moderate compatibility.
pub const DEFAULT_PAIR_POINTS: f64 = 6.0;

const DEMOGRAPHIC_MAX_POINTS: f64 = 10.0;
const SAME_GENDER_POINTS: f64 = 8.0;
const DIFFERENT_GENDER_POINTS: f64 = 5.0;

/// Known conflict pairs and their 0..=10 rating. Looked up in both orders.
const CONFLICT_TABLE: [(Preference, Preference, f64); 4] = [
    (
        Preference::SleepingHabits(SleepingHabits::EarlyRiser),
        Preference::SleepingHabits(SleepingHabits::NightOwl),
        3.0,
    ),
    (
        Preference::Cleanliness(Cleanliness::VeryNeat),
        Preference::Cleanliness(Cleanliness::Relaxed),
        2.0,
    ),
    (
        Preference::Smoking(Smoking::NonSmoker),
        Preference::Smoking(Smoking::Smoker),
        1.0,
    ),
    (
        Preference::Pets(Pets::Allergic),
        Preference::Pets(Pets::Love),
        1.0,
    ),
];

/// Outcome of one rule-table comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleScore {
    pub total: f64,
    pub max_possible: f64,
    pub score: u8,
    pub features_compared: usize,
}

#[must_use]
pub fn rule_score(requester: &RequesterProfile, candidate: &CandidateProfile) -> RuleScore {
    let mut total = 0.0;
    let mut max_possible = 0.0;
    let mut features_compared = 0;

    for category in Category::ALL {
        let (Some(mine), Some(theirs)) = (
            requester.preferences.get(category),
            candidate.preferences.get(category),
        ) else {
            continue;
        };

        let weight = category_weight(category);
        total += pair_points(mine, theirs) * weight;
        max_possible += FULL_MATCH_POINTS * weight;
        features_compared += 1;
    }

    if let (Some(mine), Some(theirs)) = (requester.location(), candidate.location_str()) {
        total += DEMOGRAPHIC_MAX_POINTS * location_similarity(mine, theirs);
        max_possible += DEMOGRAPHIC_MAX_POINTS;
        features_compared += 1;
    }

    if let (Some(mine), Some(theirs)) = (requester.age(), candidate.age) {
        total += age_points(mine, theirs);
        max_possible += DEMOGRAPHIC_MAX_POINTS;
        features_compared += 1;
    }

    if let (Some(mine), Some(theirs)) = (requester.gender(), candidate.gender_str()) {
        total += if same_gender(mine, theirs) {
            SAME_GENDER_POINTS
        } else {
            DIFFERENT_GENDER_POINTS
        };
        max_possible += DEMOGRAPHIC_MAX_POINTS;
        features_compared += 1;
    }

    let score = if max_possible > 0.0 {
        to_score(100.0 * total / max_possible)
    } else {
        0
    };

    RuleScore {
        total,
        max_possible,
        score,
        features_compared,
    }
}

/// Unweighted 0..=10 points for two values of the same category.
///
/// Budget may go below the usual range; the result is not clamped.
#[must_use]
pub fn pair_points(a: Preference, b: Preference) -> f64 {
    if a == b {
        return FULL_MATCH_POINTS;
    }

    match (a, b) {
        (Preference::Budget(x), Preference::Budget(y)) => budget_points(x, y),
        _ => conflict_rating(a, b).unwrap_or(DEFAULT_PAIR_POINTS),
    }
}

fn conflict_rating(a: Preference, b: Preference) -> Option<f64> {
    CONFLICT_TABLE
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, rating)| *rating)
}

fn budget_points(a: Budget, b: Budget) -> f64 {
    let diff = f64::from(budget_tier(a).abs_diff(budget_tier(b)));
    if diff <= 1.0 {
        FULL_MATCH_POINTS - 2.0 * diff
    } else {
        5.0 - diff
    }
}

const fn budget_tier(budget: Budget) -> u8 {
    match budget {
        Budget::Low => 1,
        Budget::Medium => 2,
        Budget::High => 3,
        Budget::Luxury => 4,
    }
}

fn age_points(a: u32, b: u32) -> f64 {
    let gap = f64::from(a.abs_diff(b));
    (DEMOGRAPHIC_MAX_POINTS - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Diet, PreferenceSet};
    use rstest::rstest;

    fn prefs(values: &[Preference]) -> PreferenceSet {
        values.iter().copied().collect()
    }

    #[rstest]
    #[case(SleepingHabits::EarlyRiser.into(), SleepingHabits::NightOwl.into(), 3.0)]
    #[case(SleepingHabits::NightOwl.into(), SleepingHabits::EarlyRiser.into(), 3.0)]
    #[case(Cleanliness::Relaxed.into(), Cleanliness::VeryNeat.into(), 2.0)]
    #[case(Smoking::NonSmoker.into(), Smoking::Smoker.into(), 1.0)]
    #[case(Pets::Love.into(), Pets::Allergic.into(), 1.0)]
    #[case(Smoking::NonSmoker.into(), Smoking::OutsideOnly.into(), 6.0)]
    #[case(Diet::Vegan.into(), Diet::Vegan.into(), 10.0)]
    fn pair_points_table(#[case] a: Preference, #[case] b: Preference, #[case] expected: f64) {
        assert_eq!(pair_points(a, b), expected);
    }

    #[rstest]
    #[case(Budget::Low, Budget::Low, 10.0)]
    #[case(Budget::Low, Budget::Medium, 8.0)]
    #[case(Budget::Luxury, Budget::Medium, 3.0)]
    #[case(Budget::Low, Budget::Luxury, 2.0)]
    fn budget_points_by_tier_distance(
        #[case] a: Budget,
        #[case] b: Budget,
        #[case] expected: f64,
    ) {
        assert_eq!(pair_points(a.into(), b.into()), expected);
    }

    #[test]
    fn two_conflicts_score_low() {
        let requester = RequesterProfile::new(
            "me",
            prefs(&[Smoking::NonSmoker.into(), Cleanliness::VeryNeat.into()]),
        );
        let candidate = CandidateProfile::new(
            "b",
            prefs(&[Smoking::Smoker.into(), Cleanliness::Relaxed.into()]),
        );

        let result = rule_score(&requester, &candidate);
        // (1*2 + 2*2) / (10*2 + 10*2) = 6 / 40
        assert_eq!(result.total, 6.0);
        assert_eq!(result.max_possible, 40.0);
        assert_eq!(result.score, 15);
        assert_eq!(result.features_compared, 2);
    }

    #[test]
    fn demographic_bonuses_are_raw_points() {
        let requester = RequesterProfile::new("me", PreferenceSet::new())
            .with_age(24)
            .with_gender("female")
            .with_location("Queens, New York");
        let candidate = CandidateProfile::new("c", PreferenceSet::new())
            .with_age(27)
            .with_gender("Male")
            .with_location("Brooklyn, New York");

        let result = rule_score(&requester, &candidate);
        // location 7 + age 7 + gender 5 = 19 of 30
        assert!((result.total - 19.0).abs() < 1e-9);
        assert_eq!(result.max_possible, 30.0);
        assert_eq!(result.score, 63);
    }

    #[test]
    fn empty_basis_scores_zero() {
        let requester = RequesterProfile::new("me", PreferenceSet::new());
        let candidate = CandidateProfile::new("c", prefs(&[Smoking::Smoker.into()]));

        let result = rule_score(&requester, &candidate);
        assert_eq!(result.max_possible, 0.0);
        assert_eq!(result.score, 0);
    }
}
