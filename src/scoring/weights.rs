//! Importance weights per compared feature.

use std::fmt;

use crate::domain::Category;

/// Anything two profiles can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Preference(Category),
    Age,
    Gender,
    Location,
}

impl Feature {
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Feature::Preference(category) => category_weight(category),
            Feature::Age => 1.2,
            Feature::Gender => 0.8,
            Feature::Location => 1.6,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Feature::Preference(category) => category.as_str(),
            Feature::Age => "age",
            Feature::Gender => "gender",
            Feature::Location => "location",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生活習慣カテゴリごとの重み。衝突しやすいカテゴリ（喫煙・清潔さ）ほど大きい。
#[must_use]
pub const fn category_weight(category: Category) -> f64 {
    match category {
        Category::SleepingHabits => 1.5,
        Category::Cleanliness => 2.0,
        Category::SocialHabits => 1.5,
        Category::Smoking => 2.0,
        Category::Drinking => 1.0,
        Category::Schedule => 1.0,
        Category::Budget => 1.5,
        Category::NoiseTolerance => 1.0,
        Category::Diet => 0.75,
        Category::Pets => 1.0,
        Category::Security => 1.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_strictly_positive() {
        for category in Category::ALL {
            assert!(Feature::Preference(category).weight() > 0.0, "{category}");
        }
        for feature in [Feature::Age, Feature::Gender, Feature::Location] {
            assert!(feature.weight() > 0.0, "{feature}");
        }
    }

    #[test]
    fn conflict_prone_categories_weigh_most() {
        let max = Category::ALL
            .into_iter()
            .map(category_weight)
            .fold(f64::MIN, f64::max);
        assert_eq!(category_weight(Category::Smoking), max);
        assert_eq!(category_weight(Category::Cleanliness), max);
    }
}
