use thiserror::Error;

use super::vocabulary::Category;

/// Raised when questionnaire input falls outside the preference vocabulary.
///
/// Scoring never surfaces this; it only comes back from the strict parsing API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("unknown preference category: {0}")]
    UnknownCategory(String),

    #[error("unknown value '{value}' for category {category}")]
    UnknownValue { category: Category, value: String },
}
