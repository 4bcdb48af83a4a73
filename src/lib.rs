//! Roommate compatibility scoring.
//!
//! ```
//! use roommate_compat::{
//!     CandidateProfile, Preference, PreferenceSet, RequesterProfile, Smoking, label, score,
//! };
//!
//! let prefs: PreferenceSet = [Preference::from(Smoking::NonSmoker)].into_iter().collect();
//! let requester = RequesterProfile::new("me", prefs.clone());
//! let candidate = CandidateProfile::new("alex", prefs);
//!
//! let value = score(&requester, &candidate);
//! assert_eq!(value, 100);
//! assert_eq!(label(value), "Perfect Match");
//! ```

#![deny(rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // Scores are clamped to 0..=100 before narrowing
    clippy::cast_sign_loss,           // Same
    clippy::missing_errors_doc,       // Error enums document themselves
    clippy::module_name_repetitions,  // e.g. ConfigError in config module
    clippy::doc_markdown
)]

pub mod app;
pub mod cache;
pub mod config;
pub mod domain;
pub mod observability;
pub mod presentation;
pub mod ranking;
pub mod scoring;

pub use cache::ScoreCache;
pub use config::{ConfigError, EngineConfig};
pub use domain::{
    Budget, CandidateProfile, Category, Cleanliness, Demographics, Diet, Drinking, NoiseTolerance,
    Pets, Preference, PreferenceSet, RequesterProfile, Schedule, Security, SleepingHabits, Smoking,
    SocialHabits, Vocabulary, VocabularyError,
};
pub use presentation::{ColorBand, MatchLabel, NO_DATA, color_band, describe, label};
pub use ranking::{RankOptions, RankedCandidate, Tier, rank, rank_cached, tiers};
pub use scoring::{Algorithm, ScoreBreakdown, evaluate, score, score_with, select_algorithm};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
