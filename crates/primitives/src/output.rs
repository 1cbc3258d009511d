//! Externally visible output records.
//!
//! Nothing in this module carries a raw metric value. Scores appear only as
//! whole numbers or qualitative text.

use derive_more::Display;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::{Dimension, Sector, Symbol};

/// Total score at or above which a profile is green.
pub const GREEN_THRESHOLD: f64 = 70.0;
/// Total score at or above which a profile is yellow.
pub const YELLOW_THRESHOLD: f64 = 50.0;

/// Three-color summary of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    /// Total of 70 or more.
    #[display("green")]
    Green,
    /// Total from 50 up to 70.
    #[display("yellow")]
    Yellow,
    /// Total below 50.
    #[display("red")]
    Red,
}

impl TrafficLight {
    /// Color for a total score.
    #[must_use]
    pub fn from_score(total: f64) -> Self {
        if total >= GREEN_THRESHOLD {
            Self::Green
        } else if total >= YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    /// One-line description of the overall profile.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Green => "Attractive overall profile",
            Self::Yellow => "Balanced overall profile",
            Self::Red => "Weak overall profile",
        }
    }
}

/// The scoring record handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOutput {
    /// Company symbol.
    pub symbol: Symbol,
    /// Company sector.
    pub sector: Sector,
    /// Total score rounded to a whole number.
    pub score_total: u8,
    /// Quality label.
    pub score_quality: String,
    /// Growth label.
    pub score_growth: String,
    /// Stability label.
    pub score_stability: String,
    /// Valuation label.
    pub score_valuation: String,
    /// Sector percentile rounded to a whole number.
    pub sector_percentile: u8,
    /// Color of the total score.
    pub traffic_light: TrafficLight,
    /// Three-sentence qualitative summary.
    pub summary_text: String,
}

/// Count of sector members per traffic-light band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// Totals of 70 or more.
    pub high: usize,
    /// Totals from 50 up to 70.
    pub medium: usize,
    /// Totals below 50.
    pub low: usize,
}

impl ScoreDistribution {
    /// Add one total to its band.
    pub fn record(&mut self, total: f64) {
        match TrafficLight::from_score(total) {
            TrafficLight::Green => self.high += 1,
            TrafficLight::Yellow => self.medium += 1,
            TrafficLight::Red => self.low += 1,
        }
    }

    /// Number of recorded totals.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Summary of one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorOverview {
    /// Sector name as requested.
    pub sector: String,
    /// Number of scored companies.
    pub company_count: usize,
    /// Up to three best symbols, best first.
    pub top_performers: Vec<Symbol>,
    /// Totals per traffic-light band.
    pub score_distribution: ScoreDistribution,
}

impl SectorOverview {
    /// Overview of a sector with no scored companies.
    #[must_use]
    pub fn empty(sector: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            company_count: 0,
            top_performers: Vec::new(),
            score_distribution: ScoreDistribution::default(),
        }
    }
}

/// A dimension score relative to the sector median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relative {
    /// More than ten points above the median.
    Above,
    /// Within ten points of the median.
    InLine,
    /// More than ten points below the median.
    Below,
}

impl Relative {
    /// Width of the band around the median, in score points.
    pub const BAND: f64 = 10.0;

    /// Compare a score against a median.
    #[must_use]
    pub fn classify(score: f64, median: f64) -> Self {
        if score > median + Self::BAND {
            Self::Above
        } else if score < median - Self::BAND {
            Self::Below
        } else {
            Self::InLine
        }
    }

    /// Wording for a given dimension.
    ///
    /// A high valuation score means a cheap company, so valuation uses its
    /// own vocabulary.
    #[must_use]
    pub const fn describe(self, dimension: Dimension) -> &'static str {
        match (dimension, self) {
            (Dimension::Valuation, Self::Above) => "cheaper than average",
            (Dimension::Valuation, Self::InLine) => "average valuation",
            (Dimension::Valuation, Self::Below) => "more expensive than average",
            (_, Self::Above) => "above average",
            (_, Self::InLine) => "average",
            (_, Self::Below) => "below average",
        }
    }
}

/// Every dimension of a company compared with its sector medians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorComparison {
    /// Quality vs sector.
    pub quality: Relative,
    /// Growth vs sector.
    pub growth: Relative,
    /// Stability vs sector.
    pub stability: Relative,
    /// Valuation vs sector.
    pub valuation: Relative,
}

impl SectorComparison {
    /// Relation of one dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> Relative {
        match dimension {
            Dimension::Quality => self.quality,
            Dimension::Growth => self.growth,
            Dimension::Stability => self.stability,
            Dimension::Valuation => self.valuation,
        }
    }

    /// Wording of one dimension.
    #[must_use]
    pub const fn describe(&self, dimension: Dimension) -> &'static str {
        self.get(dimension).describe(dimension)
    }
}

impl Serialize for SectorComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SectorComparison", 4)?;
        s.serialize_field("quality", self.describe(Dimension::Quality))?;
        s.serialize_field("growth", self.describe(Dimension::Growth))?;
        s.serialize_field("stability", self.describe(Dimension::Stability))?;
        s.serialize_field("valuation", self.describe(Dimension::Valuation))?;
        s.end()
    }
}
