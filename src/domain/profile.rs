use serde::{Deserialize, Serialize};

use super::preferences::PreferenceSet;

/// Optional demographic attributes of the person asking for matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Demographics {
    /// True when no attribute carries usable data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && present(self.gender.as_deref()).is_none()
            && present(self.location.as_deref()).is_none()
    }
}

/// The user whose preferences candidates are ranked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterProfile {
    #[serde(alias = "userId")]
    pub id: String,
    #[serde(default)]
    pub preferences: PreferenceSet,
    #[serde(default, alias = "profileData")]
    pub demographic: Demographics,
}

impl RequesterProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, preferences: PreferenceSet) -> Self {
        Self {
            id: id.into(),
            preferences,
            demographic: Demographics::default(),
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.demographic.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.demographic.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.demographic.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn age(&self) -> Option<u32> {
        self.demographic.age
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        present(self.demographic.gender.as_deref())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        present(self.demographic.location.as_deref())
    }
}

/// A potential roommate from the candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub preferences: PreferenceSet,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CandidateProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, preferences: PreferenceSet) -> Self {
        Self {
            id: id.into(),
            preferences,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub fn gender_str(&self) -> Option<&str> {
        present(self.gender.as_deref())
    }

    #[must_use]
    pub fn location_str(&self) -> Option<&str> {
        present(self.location.as_deref())
    }
}

// 空文字列は未入力として扱う
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
