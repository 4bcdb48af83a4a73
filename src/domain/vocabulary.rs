//! Preference vocabulary: the closed set of categories and their values.
//!
//! Every category is its own enum so that the embedding and rule tables are
//! checked for exhaustiveness at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preference categories asked by the lifestyle questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    SleepingHabits,
    Cleanliness,
    SocialHabits,
    Smoking,
    Drinking,
    Schedule,
    Budget,
    NoiseTolerance,
    Diet,
    Pets,
    Security,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::SleepingHabits,
        Category::Cleanliness,
        Category::SocialHabits,
        Category::Smoking,
        Category::Drinking,
        Category::Schedule,
        Category::Budget,
        Category::NoiseTolerance,
        Category::Diet,
        Category::Pets,
        Category::Security,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::SleepingHabits => "sleepingHabits",
            Category::Cleanliness => "cleanliness",
            Category::SocialHabits => "socialHabits",
            Category::Smoking => "smoking",
            Category::Drinking => "drinking",
            Category::Schedule => "schedule",
            Category::Budget => "budget",
            Category::NoiseTolerance => "noiseTolerance",
            Category::Diet => "diet",
            Category::Pets => "pets",
            Category::Security => "security",
        }
    }

    /// カテゴリ名を解釈する。
    ///
    /// camelCase / snake_case のどちらも受け付け、質問票の短い ID
    /// (`sleeping`, `social`, `noise`) もエイリアスとして扱う。
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sleepinghabits" | "sleeping" => Some(Category::SleepingHabits),
            "cleanliness" => Some(Category::Cleanliness),
            "socialhabits" | "social" => Some(Category::SocialHabits),
            "smoking" => Some(Category::Smoking),
            "drinking" => Some(Category::Drinking),
            "schedule" => Some(Category::Schedule),
            "budget" => Some(Category::Budget),
            "noisetolerance" | "noise" => Some(Category::NoiseTolerance),
            "diet" => Some(Category::Diet),
            "pets" => Some(Category::Pets),
            "security" => Some(Category::Security),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared behaviour of the per-category value enums.
pub trait Vocabulary: Copy + Eq + 'static {
    const CATEGORY: Category;
    const ALL: &'static [Self];

    /// Canonical token, e.g. `very_neat`.
    fn as_str(self) -> &'static str;

    /// Display label shown by the client, e.g. `Very Neat`.
    fn label(self) -> &'static str;

    /// Parses a canonical token or a display label, ignoring ASCII case.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|value| {
            value.as_str().eq_ignore_ascii_case(raw) || value.label().eq_ignore_ascii_case(raw)
        })
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident in $category:ident {
            $( $variant:ident => $token:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant, )+
        }

        impl Vocabulary for $name {
            const CATEGORY: Category = Category::$category;
            const ALL: &'static [Self] = &[ $( $name::$variant, )+ ];

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(Vocabulary::as_str(*self))
            }
        }

        impl From<$name> for Preference {
            fn from(value: $name) -> Self {
                Preference::$category(value)
            }
        }
    };
}

vocabulary! {
    SleepingHabits in SleepingHabits {
        EarlyRiser => "early_riser", "Early Riser";
        Regular => "regular", "Regular Hours";
        NightOwl => "night_owl", "Night Owl";
        Varies => "varies", "Varies";
    }
}

vocabulary! {
    Cleanliness in Cleanliness {
        VeryNeat => "very_neat", "Very Neat";
        Neat => "neat", "Neat";
        Average => "average", "Average";
        Relaxed => "relaxed", "Relaxed";
    }
}

vocabulary! {
    SocialHabits in SocialHabits {
        Introvert => "introvert", "Introvert";
        Balanced => "balanced", "Balanced";
        Extrovert => "extrovert", "Extrovert";
        Varies => "varies", "Varies";
    }
}

vocabulary! {
    Smoking in Smoking {
        NonSmoker => "non_smoker", "Non-smoker";
        OutsideOnly => "outside_only", "Outside Only";
        Occasional => "occasional", "Occasional";
        Smoker => "smoker", "Smoker";
    }
}

vocabulary! {
    Drinking in Drinking {
        None => "none", "None";
        Rarely => "rarely", "Rarely";
        Social => "social", "Social";
        Regular => "regular", "Regular";
    }
}

vocabulary! {
    Schedule in Schedule {
        Regular => "regular", "Regular";
        Flexible => "flexible", "Flexible";
        Student => "student", "Student";
        Shifts => "shifts", "Shifts";
    }
}

vocabulary! {
    /// Monthly rent tier.
    Budget in Budget {
        Low => "low", "$500-$800";
        Medium => "medium", "$800-$1,200";
        High => "high", "$1,200-$1,500";
        Luxury => "luxury", "$1,500+";
    }
}

vocabulary! {
    NoiseTolerance in NoiseTolerance {
        Low => "low", "Low";
        Medium => "medium", "Medium";
        High => "high", "High";
        Varies => "varies", "Varies";
    }
}

vocabulary! {
    Diet in Diet {
        None => "none", "No Preference";
        Vegetarian => "vegetarian", "Vegetarian";
        Vegan => "vegan", "Vegan";
        Other => "other", "Other";
    }
}

vocabulary! {
    Pets in Pets {
        Love => "love", "Loves Pets";
        Ok => "ok", "OK with pets";
        Allergic => "allergic", "Allergic";
        NoPets => "no_pets", "No Pets";
    }
}

vocabulary! {
    Security in Security {
        Low => "low", "Low Priority";
        Medium => "medium", "Medium Priority";
        High => "high", "High Priority";
        Critical => "critical", "Critical";
    }
}

/// A single answered preference: a category together with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    SleepingHabits(SleepingHabits),
    Cleanliness(Cleanliness),
    SocialHabits(SocialHabits),
    Smoking(Smoking),
    Drinking(Drinking),
    Schedule(Schedule),
    Budget(Budget),
    NoiseTolerance(NoiseTolerance),
    Diet(Diet),
    Pets(Pets),
    Security(Security),
}

impl Preference {
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Preference::SleepingHabits(_) => Category::SleepingHabits,
            Preference::Cleanliness(_) => Category::Cleanliness,
            Preference::SocialHabits(_) => Category::SocialHabits,
            Preference::Smoking(_) => Category::Smoking,
            Preference::Drinking(_) => Category::Drinking,
            Preference::Schedule(_) => Category::Schedule,
            Preference::Budget(_) => Category::Budget,
            Preference::NoiseTolerance(_) => Category::NoiseTolerance,
            Preference::Diet(_) => Category::Diet,
            Preference::Pets(_) => Category::Pets,
            Preference::Security(_) => Category::Security,
        }
    }

    /// Parses `raw` as a value of `category`.
    #[must_use]
    pub fn parse(category: Category, raw: &str) -> Option<Self> {
        match category {
            Category::SleepingHabits => SleepingHabits::parse(raw).map(Self::from),
            Category::Cleanliness => Cleanliness::parse(raw).map(Self::from),
            Category::SocialHabits => SocialHabits::parse(raw).map(Self::from),
            Category::Smoking => Smoking::parse(raw).map(Self::from),
            Category::Drinking => Drinking::parse(raw).map(Self::from),
            Category::Schedule => Schedule::parse(raw).map(Self::from),
            Category::Budget => Budget::parse(raw).map(Self::from),
            Category::NoiseTolerance => NoiseTolerance::parse(raw).map(Self::from),
            Category::Diet => Diet::parse(raw).map(Self::from),
            Category::Pets => Pets::parse(raw).map(Self::from),
            Category::Security => Security::parse(raw).map(Self::from),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::SleepingHabits(v) => v.as_str(),
            Preference::Cleanliness(v) => v.as_str(),
            Preference::SocialHabits(v) => v.as_str(),
            Preference::Smoking(v) => v.as_str(),
            Preference::Drinking(v) => v.as_str(),
            Preference::Schedule(v) => v.as_str(),
            Preference::Budget(v) => v.as_str(),
            Preference::NoiseTolerance(v) => v.as_str(),
            Preference::Diet(v) => v.as_str(),
            Preference::Pets(v) => v.as_str(),
            Preference::Security(v) => v.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preference::SleepingHabits(v) => v.label(),
            Preference::Cleanliness(v) => v.label(),
            Preference::SocialHabits(v) => v.label(),
            Preference::Smoking(v) => v.label(),
            Preference::Drinking(v) => v.label(),
            Preference::Schedule(v) => v.label(),
            Preference::Budget(v) => v.label(),
            Preference::NoiseTolerance(v) => v.label(),
            Preference::Diet(v) => v.label(),
            Preference::Pets(v) => v.label(),
            Preference::Security(v) => v.label(),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category(), self.as_str())
    }
}
