//! Numeric scoring results.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Dimension, Sector, Symbol};

/// Score of one company relative to its sector peers.
///
/// Dimension scores and the total carry one decimal; the sector percentile is
/// a whole number. All values lie in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Scored company.
    pub symbol: Symbol,
    /// Sector of the peer set.
    pub sector: Sector,
    /// Quality dimension score.
    pub quality: f64,
    /// Growth dimension score.
    pub growth: f64,
    /// Stability dimension score.
    pub stability: f64,
    /// Valuation dimension score.
    pub valuation: f64,
    /// Weighted total score.
    pub total: f64,
    /// Share of peers with a strictly lower total.
    pub sector_percentile: f64,
}

impl ScoreResult {
    /// Score of one dimension.
    #[must_use]
    pub const fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Quality => self.quality,
            Dimension::Growth => self.growth,
            Dimension::Stability => self.stability,
            Dimension::Valuation => self.valuation,
        }
    }
}

/// Qualitative position within a sector, derived from the sector percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorPosition {
    /// Percentile 90 and above.
    #[display("top group")]
    TopGroup,
    /// Percentile 75 to 90.
    #[display("upper quartile")]
    UpperQuartile,
    /// Percentile 66 to 75.
    #[display("upper third")]
    UpperThird,
    /// Percentile 50 to 66.
    #[display("upper half")]
    UpperHalf,
    /// Percentile 33 to 50.
    #[display("lower half")]
    LowerHalf,
    /// Percentile 25 to 33.
    #[display("lower third")]
    LowerThird,
    /// Below percentile 25.
    #[display("lower quartile")]
    LowerQuartile,
}

impl SectorPosition {
    /// Bucket a sector percentile.
    #[must_use]
    pub fn from_percentile(percentile: f64) -> Self {
        match percentile {
            p if p >= 90.0 => Self::TopGroup,
            p if p >= 75.0 => Self::UpperQuartile,
            p if p >= 66.0 => Self::UpperThird,
            p if p >= 50.0 => Self::UpperHalf,
            p if p >= 33.0 => Self::LowerHalf,
            p if p >= 25.0 => Self::LowerThird,
            _ => Self::LowerQuartile,
        }
    }
}

/// Rank of a company inside its sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRanking {
    /// Ranked company.
    pub symbol: Symbol,
    /// Sector of the peer set.
    pub sector: Sector,
    /// 1-based rank, 1 being the best total.
    pub rank: usize,
    /// Number of companies in the sector.
    pub total_companies: usize,
    /// Sector percentile of the company's total.
    pub percentile: f64,
    /// Qualitative bucket of the percentile.
    pub position: SectorPosition,
}
