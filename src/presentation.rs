//! Score -> label / color band mappers for display.

use std::fmt;

use serde::{Serialize, Serializer};

/// Shown when no score has been computed for a pair.
pub const NO_DATA: &str = "No Data";

/// Qualitative label for a score, evaluated top-down.
///
/// Serializes as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchLabel {
    LowCompatibility,
    AverageMatch,
    FairMatch,
    GoodMatch,
    GreatMatch,
    ExcellentMatch,
    PerfectMatch,
}

impl MatchLabel {
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        match score {
            90.. => MatchLabel::PerfectMatch,
            80..=89 => MatchLabel::ExcellentMatch,
            70..=79 => MatchLabel::GreatMatch,
            60..=69 => MatchLabel::GoodMatch,
            50..=59 => MatchLabel::FairMatch,
            40..=49 => MatchLabel::AverageMatch,
            _ => MatchLabel::LowCompatibility,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchLabel::PerfectMatch => "Perfect Match",
            MatchLabel::ExcellentMatch => "Excellent Match",
            MatchLabel::GreatMatch => "Great Match",
            MatchLabel::GoodMatch => "Good Match",
            MatchLabel::FairMatch => "Fair Match",
            MatchLabel::AverageMatch => "Average Match",
            MatchLabel::LowCompatibility => "Low Compatibility",
        }
    }
}

impl Serialize for MatchLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color band for a score. Declared strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorBand {
    StrongPositive,
    Positive,
    Neutral,
    Warning,
    Negative,
}

impl ColorBand {
    pub const ALL: [ColorBand; 5] = [
        ColorBand::StrongPositive,
        ColorBand::Positive,
        ColorBand::Neutral,
        ColorBand::Warning,
        ColorBand::Negative,
    ];

    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        match score {
            80.. => ColorBand::StrongPositive,
            60..=79 => ColorBand::Positive,
            50..=59 => ColorBand::Neutral,
            40..=49 => ColorBand::Warning,
            _ => ColorBand::Negative,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorBand::StrongPositive => "strong-positive",
            ColorBand::Positive => "positive",
            ColorBand::Neutral => "neutral",
            ColorBand::Warning => "warning",
            ColorBand::Negative => "negative",
        }
    }

    /// Background class used by the web client for this band.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            ColorBand::StrongPositive => "bg-green-500",
            ColorBand::Positive => "bg-emerald-500",
            ColorBand::Neutral => "bg-yellow-500",
            ColorBand::Warning => "bg-orange-500",
            ColorBand::Negative => "bg-red-500",
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub const fn label(score: u8) -> &'static str {
    MatchLabel::for_score(score).as_str()
}

#[must_use]
pub const fn color_band(score: u8) -> ColorBand {
    ColorBand::for_score(score)
}

/// Label for a possibly missing score. A missing score is never replaced by
/// a made-up number.
#[must_use]
pub const fn describe(score: Option<u8>) -> &'static str {
    match score {
        Some(score) => label(score),
        None => NO_DATA,
    }
}
