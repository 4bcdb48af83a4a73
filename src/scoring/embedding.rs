//! Hand-authored embeddings for every preference value.
//!
//! 各ベクトルは同カテゴリ内の他の値との近さを表す。意味的に近い値
//! (例: `outside_only` と `occasional`) ほどコサイン類似度が高くなる。

use crate::domain::{
    Budget, Category, Cleanliness, Diet, Drinking, NoiseTolerance, Pets, Preference, Schedule,
    Security, SleepingHabits, Smoking, SocialHabits,
};

pub const EMBEDDING_DIM: usize = 4;

pub type Embedding = [f64; EMBEDDING_DIM];

/// Embedding for an answered preference.
#[must_use]
pub fn embedding(preference: Preference) -> Embedding {
    match preference {
        Preference::SleepingHabits(value) => match value {
            SleepingHabits::EarlyRiser => [1.0, 0.0, 0.0, 0.5],
            SleepingHabits::Regular => [0.5, 1.0, 0.0, 0.5],
            SleepingHabits::NightOwl => [0.0, 0.0, 1.0, 0.5],
            SleepingHabits::Varies => [0.5, 0.5, 0.5, 1.0],
        },
        Preference::Cleanliness(value) => match value {
            Cleanliness::VeryNeat => [1.0, 0.7, 0.3, 0.0],
            Cleanliness::Neat => [0.7, 1.0, 0.5, 0.2],
            Cleanliness::Average => [0.3, 0.5, 1.0, 0.7],
            Cleanliness::Relaxed => [0.0, 0.2, 0.7, 1.0],
        },
        Preference::SocialHabits(value) => match value {
            SocialHabits::Introvert => [1.0, 0.5, 0.1, 0.4],
            SocialHabits::Balanced => [0.5, 1.0, 0.5, 0.8],
            SocialHabits::Extrovert => [0.1, 0.5, 1.0, 0.4],
            SocialHabits::Varies => [0.4, 0.8, 0.4, 1.0],
        },
        Preference::Smoking(value) => match value {
            Smoking::NonSmoker => [1.0, 0.6, 0.3, 0.1],
            Smoking::OutsideOnly => [0.6, 1.0, 0.7, 0.5],
            Smoking::Occasional => [0.3, 0.7, 1.0, 0.8],
            Smoking::Smoker => [0.1, 0.5, 0.8, 1.0],
        },
        Preference::Drinking(value) => match value {
            Drinking::None => [1.0, 0.7, 0.3, 0.1],
            Drinking::Rarely => [0.7, 1.0, 0.6, 0.4],
            Drinking::Social => [0.3, 0.6, 1.0, 0.7],
            Drinking::Regular => [0.1, 0.4, 0.7, 1.0],
        },
        Preference::Schedule(value) => match value {
            Schedule::Regular => [1.0, 0.7, 0.5, 0.3],
            Schedule::Flexible => [0.7, 1.0, 0.7, 0.7],
            Schedule::Student => [0.5, 0.7, 1.0, 0.5],
            Schedule::Shifts => [0.3, 0.7, 0.5, 1.0],
        },
        Preference::Budget(value) => match value {
            Budget::Low => [1.0, 0.7, 0.3, 0.1],
            Budget::Medium => [0.7, 1.0, 0.7, 0.4],
            Budget::High => [0.3, 0.7, 1.0, 0.7],
            Budget::Luxury => [0.1, 0.4, 0.7, 1.0],
        },
        Preference::NoiseTolerance(value) => match value {
            NoiseTolerance::Low => [1.0, 0.5, 0.2, 0.4],
            NoiseTolerance::Medium => [0.5, 1.0, 0.5, 0.5],
            NoiseTolerance::High => [0.2, 0.5, 1.0, 0.4],
            NoiseTolerance::Varies => [0.4, 0.5, 0.4, 1.0],
        },
        Preference::Diet(value) => match value {
            Diet::None => [1.0, 0.8, 0.7, 0.9],
            Diet::Vegetarian => [0.8, 1.0, 0.9, 0.6],
            Diet::Vegan => [0.7, 0.9, 1.0, 0.5],
            Diet::Other => [0.9, 0.6, 0.5, 1.0],
        },
        Preference::Pets(value) => match value {
            Pets::Love => [1.0, 0.8, 0.1, 0.3],
            Pets::Ok => [0.8, 1.0, 0.4, 0.6],
            Pets::Allergic => [0.1, 0.4, 1.0, 0.8],
            Pets::NoPets => [0.3, 0.6, 0.8, 1.0],
        },
        Preference::Security(value) => match value {
            Security::Low => [1.0, 0.7, 0.4, 0.2],
            Security::Medium => [0.7, 1.0, 0.7, 0.5],
            Security::High => [0.4, 0.7, 1.0, 0.8],
            Security::Critical => [0.2, 0.5, 0.8, 1.0],
        },
    }
}

/// String-keyed lookup. `None` means the pair is outside the vocabulary and
/// the category should be skipped.
#[must_use]
pub fn embed(category: &str, value: &str) -> Option<Embedding> {
    let category = Category::parse(category)?;
    Preference::parse(category, value).map(embedding)
}
