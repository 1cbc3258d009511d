#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::MetricError;

mod financials;
pub use financials::CompanyFinancials;

mod metric;
pub use metric::{Dimension, Direction, Metric, Metrics};

mod output;
pub use output::{
    GREEN_THRESHOLD, Relative, ScoreDistribution, ScoringOutput, SectorComparison,
    SectorOverview, TrafficLight, YELLOW_THRESHOLD,
};

mod scores;
pub use scores::{ScoreResult, SectorPosition, SectorRanking};

mod sector;
pub use sector::Sector;

mod symbol;
pub use symbol::Symbol;

mod weights;
pub use weights::{ScoreWeights, WEIGHT_SUM_TOLERANCE};

/// Snapshot date type.
pub type Date = chrono::NaiveDate;
