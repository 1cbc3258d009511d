//! Score-to-label tables.

use derive_more::Display;
use peerscore_primitives::{Dimension, ScoreResult, TrafficLight};
use serde::Serialize;

/// Label of a quality, growth or stability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(into = "&'static str")]
pub enum Rating {
    /// 90 to 100.
    #[display("excellent")]
    Excellent,
    /// 75 to 89.
    #[display("very high")]
    VeryHigh,
    /// 60 to 74.
    #[display("high")]
    High,
    /// 40 to 59.
    #[display("solid")]
    Solid,
    /// 25 to 39, and the fallback.
    #[display("moderate")]
    Moderate,
    /// 10 to 24.
    #[display("weak")]
    Weak,
    /// 0 to 9.
    #[display("very weak")]
    VeryWeak,
}

/// Inclusive ranges, scanned in order. Scores between two ranges (such as
/// 89.5) match nothing and take the fallback.
const RATING_TABLE: [(f64, f64, Rating); 7] = [
    (90.0, 100.0, Rating::Excellent),
    (75.0, 89.0, Rating::VeryHigh),
    (60.0, 74.0, Rating::High),
    (40.0, 59.0, Rating::Solid),
    (25.0, 39.0, Rating::Moderate),
    (10.0, 24.0, Rating::Weak),
    (0.0, 9.0, Rating::VeryWeak),
];

impl Rating {
    /// Every label, best first.
    pub const ALL: [Self; 7] = [
        Self::Excellent,
        Self::VeryHigh,
        Self::High,
        Self::Solid,
        Self::Moderate,
        Self::Weak,
        Self::VeryWeak,
    ];

    /// Look up the label of a score. Unmatched scores are [`Rating::Moderate`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        lookup(&RATING_TABLE, score).unwrap_or(Self::Moderate)
    }

    /// Label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Solid => "solid",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::VeryWeak => "very weak",
        }
    }

    /// Excellent, very high or high.
    #[must_use]
    pub const fn is_strength(self) -> bool {
        matches!(self, Self::Excellent | Self::VeryHigh | Self::High)
    }

    /// Weak or very weak.
    #[must_use]
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::Weak | Self::VeryWeak)
    }
}

impl From<Rating> for &'static str {
    fn from(r: Rating) -> Self {
        r.as_str()
    }
}

/// Label of a valuation score. High scores are cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(into = "&'static str")]
pub enum ValuationRating {
    /// 90 to 100.
    #[display("very favorable")]
    VeryFavorable,
    /// 75 to 89.
    #[display("favorable")]
    Favorable,
    /// 60 to 74, and the fallback.
    #[display("fair")]
    Fair,
    /// 40 to 59.
    #[display("slightly elevated")]
    SlightlyElevated,
    /// 25 to 39.
    #[display("elevated")]
    Elevated,
    /// 10 to 24.
    #[display("demanding")]
    Demanding,
    /// 0 to 9.
    #[display("very demanding")]
    VeryDemanding,
}

const VALUATION_TABLE: [(f64, f64, ValuationRating); 7] = [
    (90.0, 100.0, ValuationRating::VeryFavorable),
    (75.0, 89.0, ValuationRating::Favorable),
    (60.0, 74.0, ValuationRating::Fair),
    (40.0, 59.0, ValuationRating::SlightlyElevated),
    (25.0, 39.0, ValuationRating::Elevated),
    (10.0, 24.0, ValuationRating::Demanding),
    (0.0, 9.0, ValuationRating::VeryDemanding),
];

impl ValuationRating {
    /// Every label, cheapest first.
    pub const ALL: [Self; 7] = [
        Self::VeryFavorable,
        Self::Favorable,
        Self::Fair,
        Self::SlightlyElevated,
        Self::Elevated,
        Self::Demanding,
        Self::VeryDemanding,
    ];

    /// Look up the label of a score. Unmatched scores are
    /// [`ValuationRating::Fair`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        lookup(&VALUATION_TABLE, score).unwrap_or(Self::Fair)
    }

    /// Label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryFavorable => "very favorable",
            Self::Favorable => "favorable",
            Self::Fair => "fair",
            Self::SlightlyElevated => "slightly elevated",
            Self::Elevated => "elevated",
            Self::Demanding => "demanding",
            Self::VeryDemanding => "very demanding",
        }
    }

    /// Very favorable or favorable.
    #[must_use]
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::VeryFavorable | Self::Favorable)
    }

    /// Demanding or very demanding.
    #[must_use]
    pub const fn is_demanding(self) -> bool {
        matches!(self, Self::Demanding | Self::VeryDemanding)
    }

    /// Elevated or slightly elevated.
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Elevated | Self::SlightlyElevated)
    }
}

impl From<ValuationRating> for &'static str {
    fn from(r: ValuationRating) -> Self {
        r.as_str()
    }
}

fn lookup<T: Copy>(table: &[(f64, f64, T)], score: f64) -> Option<T> {
    table
        .iter()
        .find(|(low, high, _)| *low <= score && score <= *high)
        .map(|(_, _, label)| *label)
}

/// Traffic-light color of a total score.
#[must_use]
pub fn traffic_light(total: f64) -> TrafficLight {
    TrafficLight::from_score(total)
}

/// Labels of all four dimensions of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionLabels {
    /// Quality label.
    pub quality: Rating,
    /// Growth label.
    pub growth: Rating,
    /// Stability label.
    pub stability: Rating,
    /// Valuation label.
    pub valuation: ValuationRating,
}

impl DimensionLabels {
    /// Label every dimension of a score.
    #[must_use]
    pub fn from_result(result: &ScoreResult) -> Self {
        Self {
            quality: Rating::from_score(result.dimension(Dimension::Quality)),
            growth: Rating::from_score(result.dimension(Dimension::Growth)),
            stability: Rating::from_score(result.dimension(Dimension::Stability)),
            valuation: ValuationRating::from_score(result.dimension(Dimension::Valuation)),
        }
    }
}
