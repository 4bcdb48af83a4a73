//! Domain layer for roommate-compat.
//!
//! Contains the canonical types shared across all modules:
//! - `Category` / `Preference` and the per-category value enums
//! - `PreferenceSet`: answered questionnaire
//! - `RequesterProfile` / `CandidateProfile`
//! - `VocabularyError`: strict parsing failures

pub mod error;
pub mod preferences;
pub mod profile;
pub mod vocabulary;

pub use error::VocabularyError;
pub use preferences::PreferenceSet;
pub use profile::{CandidateProfile, Demographics, RequesterProfile};
pub use vocabulary::{
    Budget, Category, Cleanliness, Diet, Drinking, NoiseTolerance, Pets, Preference, Schedule,
    Security, SleepingHabits, Smoking, SocialHabits, Vocabulary,
};
