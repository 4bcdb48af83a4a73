//! Feature extraction: aligns what the requester and the candidate both have.

use crate::domain::{CandidateProfile, Category, RequesterProfile};

use super::embedding::{Embedding, embedding};
use super::similarity::{cosine_similarity, scalar_similarity};
use super::weights::Feature;

/// Age gap (years) at which age similarity reaches zero.
pub const AGE_SPAN_YEARS: f64 = 50.0;

pub const SAME_GENDER: f64 = 1.0;
pub const DIFFERENT_GENDER: f64 = 0.5;

pub const SAME_CITY: f64 = 1.0;
pub const SAME_REGION: f64 = 0.7;
pub const DISTANT_LOCATION: f64 = 0.2;

/// One compared feature, holding the requester side and the candidate side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeaturePair {
    /// Preference embeddings, compared by cosine similarity.
    Vectors(Embedding, Embedding),
    /// Values normalized to `[0, 1]`, compared by scalar similarity.
    Scalars(f64, f64),
    /// Attributes that only make sense as a pair (gender, location); the
    /// similarity is fixed at extraction time and identical for both sides.
    Matched(f64),
}

impl FeaturePair {
    #[must_use]
    pub fn similarity(&self) -> f64 {
        match self {
            FeaturePair::Vectors(a, b) => cosine_similarity(a, b),
            FeaturePair::Scalars(a, b) => scalar_similarity(*a, *b),
            FeaturePair::Matched(similarity) => *similarity,
        }
    }
}

/// Features present on both profiles, in vocabulary order followed by
/// age, gender and location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    pairs: Vec<(Feature, FeaturePair)>,
}

impl FeatureSet {
    #[must_use]
    pub fn pairs(&self) -> &[(Feature, FeaturePair)] {
        &self.pairs
    }

    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<&FeaturePair> {
        self.pairs
            .iter()
            .find_map(|(key, pair)| (*key == feature).then_some(pair))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds the aligned feature set for a requester/candidate pair.
#[must_use]
pub fn extract(requester: &RequesterProfile, candidate: &CandidateProfile) -> FeatureSet {
    let mut pairs = Vec::with_capacity(Category::ALL.len() + 3);

    for category in Category::ALL {
        if let (Some(mine), Some(theirs)) = (
            requester.preferences.get(category),
            candidate.preferences.get(category),
        ) {
            pairs.push((
                Feature::Preference(category),
                FeaturePair::Vectors(embedding(mine), embedding(theirs)),
            ));
        }
    }

    if let (Some(mine), Some(theirs)) = (requester.age(), candidate.age) {
        pairs.push((
            Feature::Age,
            FeaturePair::Scalars(
                f64::from(mine) / AGE_SPAN_YEARS,
                f64::from(theirs) / AGE_SPAN_YEARS,
            ),
        ));
    }

    if let (Some(mine), Some(theirs)) = (requester.gender(), candidate.gender_str()) {
        pairs.push((
            Feature::Gender,
            FeaturePair::Matched(gender_similarity(mine, theirs)),
        ));
    }

    if let (Some(mine), Some(theirs)) = (requester.location(), candidate.location_str()) {
        pairs.push((
            Feature::Location,
            FeaturePair::Matched(location_similarity(mine, theirs)),
        ));
    }

    FeatureSet { pairs }
}

/// `max(0, 1 - |a - b| / 50)`.
#[must_use]
pub fn age_similarity(a: u32, b: u32) -> f64 {
    let gap = f64::from(a.abs_diff(b));
    (1.0 - gap / AGE_SPAN_YEARS).max(0.0)
}

#[must_use]
pub fn same_gender(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[must_use]
pub fn gender_similarity(a: &str, b: &str) -> f64 {
    if same_gender(a, b) {
        SAME_GENDER
    } else {
        DIFFERENT_GENDER
    }
}

/// Compares two `"city, region"` strings.
///
/// Same city scores 1.0. A different city scores 0.7 when the requester's
/// location mentions the candidate's region, or when the candidate gives no
/// region at all. A region the requester never mentions scores 0.2.
#[must_use]
pub fn location_similarity(requester: &str, candidate: &str) -> f64 {
    let requester = requester.to_lowercase();
    let candidate = candidate.to_lowercase();

    let mut requester_parts = requester.split(',');
    let mut candidate_parts = candidate.split(',');

    let requester_city = requester_parts.next().unwrap_or_default().trim();
    let candidate_city = candidate_parts.next().unwrap_or_default().trim();
    if requester_city == candidate_city {
        return SAME_CITY;
    }

    match candidate_parts.next().map(str::trim) {
        Some(region) if !region.is_empty() && !requester.contains(region) => DISTANT_LOCATION,
        _ => SAME_REGION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cleanliness, Pets, Preference, PreferenceSet, Smoking};

    fn prefs(values: &[Preference]) -> PreferenceSet {
        values.iter().copied().collect()
    }

    #[test]
    fn only_shared_categories_are_extracted() {
        let requester = RequesterProfile::new(
            "me",
            prefs(&[Smoking::NonSmoker.into(), Cleanliness::Neat.into()]),
        );
        let candidate = CandidateProfile::new(
            "c1",
            prefs(&[Smoking::Smoker.into(), Pets::Love.into()]),
        );

        let features = extract(&requester, &candidate);
        assert_eq!(features.len(), 1);
        let compared = |category| features.get(Feature::Preference(category)).is_some();
        assert!(compared(Category::Smoking));
        assert!(!compared(Category::Cleanliness));
        assert!(!compared(Category::Pets));
    }

    #[test]
    fn demographics_need_both_sides() {
        let requester = RequesterProfile::new("me", PreferenceSet::new()).with_age(25);
        let candidate = CandidateProfile::new("c1", PreferenceSet::new())
            .with_gender("Female")
            .with_location("Mumbai, Maharashtra");

        assert!(extract(&requester, &candidate).is_empty());
    }

    #[test]
    fn age_pair_reproduces_age_similarity() {
        let requester = RequesterProfile::new("me", PreferenceSet::new()).with_age(25);
        let candidate = CandidateProfile::new("c1", PreferenceSet::new()).with_age(35);

        let features = extract(&requester, &candidate);
        let pair = features.get(Feature::Age).unwrap();
        assert!((pair.similarity() - age_similarity(25, 35)).abs() < 1e-12);
        assert!((age_similarity(25, 35) - 0.8).abs() < 1e-12);
        assert_eq!(age_similarity(20, 80), 0.0);
    }

    #[test]
    fn gender_comparison_ignores_case() {
        assert_eq!(gender_similarity("Female", " female"), SAME_GENDER);
        assert_eq!(gender_similarity("Male", "Female"), DIFFERENT_GENDER);
    }

    #[test]
    fn location_tiers() {
        assert_eq!(
            location_similarity("Brooklyn, New York", "brooklyn, NY"),
            SAME_CITY
        );
        assert_eq!(
            location_similarity("Brooklyn, New York", "Queens, New York"),
            SAME_REGION
        );
        assert_eq!(
            location_similarity("Pune, Maharashtra", "Bengaluru, Karnataka"),
            DISTANT_LOCATION
        );
        // 地域の記載がない候補者は同一地域として扱う
        assert_eq!(
            location_similarity("Brooklyn, New York", "New York"),
            SAME_REGION
        );
        assert_eq!(
            location_similarity("Brooklyn, New York", "Austin,  "),
            SAME_REGION
        );
    }

    #[test]
    fn region_less_candidate_feature_is_same_region() {
        let requester = RequesterProfile::new("me", prefs(&[Smoking::NonSmoker.into()]))
            .with_location("Brooklyn, New York");
        let candidate = CandidateProfile::new("c1", prefs(&[Smoking::NonSmoker.into()]))
            .with_location("New York");

        let features = extract(&requester, &candidate);
        let location = features.get(Feature::Location);
        assert_eq!(location, Some(&FeaturePair::Matched(SAME_REGION)));
    }
}
