//! The set of answered lifestyle preferences for one person.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::VocabularyError;
use super::vocabulary::{
    Budget, Category, Cleanliness, Diet, Drinking, NoiseTolerance, Pets, Preference, Schedule,
    Security, SleepingHabits, Smoking, SocialHabits, Vocabulary,
};

/// At most one selected value per category. Every category is optional.
///
/// Deserialization is lenient: a value outside the vocabulary is logged and
/// dropped so that one bad answer never rejects a whole profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    #[serde(
        default,
        alias = "sleeping",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub sleeping_habits: Option<SleepingHabits>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub cleanliness: Option<Cleanliness>,
    #[serde(
        default,
        alias = "social",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub social_habits: Option<SocialHabits>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub smoking: Option<Smoking>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub drinking: Option<Drinking>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub budget: Option<Budget>,
    #[serde(
        default,
        alias = "noise",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub noise_tolerance: Option<NoiseTolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub diet: Option<Diet>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub pets: Option<Pets>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub security: Option<Security>,
}

impl PreferenceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<Preference> {
        match category {
            Category::SleepingHabits => self.sleeping_habits.map(Preference::from),
            Category::Cleanliness => self.cleanliness.map(Preference::from),
            Category::SocialHabits => self.social_habits.map(Preference::from),
            Category::Smoking => self.smoking.map(Preference::from),
            Category::Drinking => self.drinking.map(Preference::from),
            Category::Schedule => self.schedule.map(Preference::from),
            Category::Budget => self.budget.map(Preference::from),
            Category::NoiseTolerance => self.noise_tolerance.map(Preference::from),
            Category::Diet => self.diet.map(Preference::from),
            Category::Pets => self.pets.map(Preference::from),
            Category::Security => self.security.map(Preference::from),
        }
    }

    /// Sets the value for the preference's category, returning the previous one.
    pub fn set(&mut self, preference: Preference) -> Option<Preference> {
        let previous = self.get(preference.category());
        match preference {
            Preference::SleepingHabits(v) => self.sleeping_habits = Some(v),
            Preference::Cleanliness(v) => self.cleanliness = Some(v),
            Preference::SocialHabits(v) => self.social_habits = Some(v),
            Preference::Smoking(v) => self.smoking = Some(v),
            Preference::Drinking(v) => self.drinking = Some(v),
            Preference::Schedule(v) => self.schedule = Some(v),
            Preference::Budget(v) => self.budget = Some(v),
            Preference::NoiseTolerance(v) => self.noise_tolerance = Some(v),
            Preference::Diet(v) => self.diet = Some(v),
            Preference::Pets(v) => self.pets = Some(v),
            Preference::Security(v) => self.security = Some(v),
        }
        previous
    }

    pub fn remove(&mut self, category: Category) -> Option<Preference> {
        let previous = self.get(category);
        match category {
            Category::SleepingHabits => self.sleeping_habits = None,
            Category::Cleanliness => self.cleanliness = None,
            Category::SocialHabits => self.social_habits = None,
            Category::Smoking => self.smoking = None,
            Category::Drinking => self.drinking = None,
            Category::Schedule => self.schedule = None,
            Category::Budget => self.budget = None,
            Category::NoiseTolerance => self.noise_tolerance = None,
            Category::Diet => self.diet = None,
            Category::Pets => self.pets = None,
            Category::Security => self.security = None,
        }
        previous
    }

    /// Records a raw questionnaire answer.
    ///
    /// # Errors
    /// Returns [`VocabularyError`] when the category or the value is not part
    /// of the vocabulary. The set is left unchanged in that case.
    pub fn insert_raw(
        &mut self,
        category: &str,
        value: &str,
    ) -> Result<Preference, VocabularyError> {
        let parsed_category = Category::parse(category)
            .ok_or_else(|| VocabularyError::UnknownCategory(category.to_string()))?;
        let preference = Preference::parse(parsed_category, value).ok_or_else(|| {
            VocabularyError::UnknownValue {
                category: parsed_category,
                value: value.to_string(),
            }
        })?;
        self.set(preference);
        Ok(preference)
    }

    /// Builds a set from raw `(category, value)` answers, failing on the first
    /// answer outside the vocabulary.
    ///
    /// # Errors
    /// See [`PreferenceSet::insert_raw`].
    pub fn from_raw_pairs<'a, I>(pairs: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (category, value) in pairs {
            set.insert_raw(category, value)?;
        }
        Ok(set)
    }

    /// Answered preferences in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = Preference> + '_ {
        Category::ALL.into_iter().filter_map(|category| self.get(category))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Preference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Preference>>(iter: I) -> Self {
        let mut set = Self::new();
        for preference in iter {
            set.set(preference);
        }
        set
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Vocabulary,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let parsed = T::parse(&raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            tracing::warn!(
                category = %T::CATEGORY,
                value = %raw,
                "skipping preference value outside the vocabulary"
            );
        }
        parsed
    }))
}
