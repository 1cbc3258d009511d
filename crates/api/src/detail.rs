//! Extended company view.

use peerscore_narrative::Interpretations;
use peerscore_primitives::{ScoringOutput, SectorComparison, SectorPosition};
use serde::Serialize;

/// The scoring record of a company plus descriptive context.
///
/// Like [`ScoringOutput`], it carries no raw metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    /// The standard scoring record.
    #[serde(flatten)]
    pub score: ScoringOutput,
    /// One sentence per dimension.
    pub interpretations: Interpretations,
    /// One-line description of the overall profile.
    pub short_description: &'static str,
    /// Qualitative position within the sector.
    pub sector_position: SectorPosition,
    /// 1-based rank within the sector.
    pub sector_rank: usize,
    /// Number of companies in the sector.
    pub sector_peers: usize,
    /// Each dimension against the sector median.
    pub comparison: SectorComparison,
}
