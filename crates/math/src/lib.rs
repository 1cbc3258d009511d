#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod winsorize;
pub use winsorize::{DEFAULT_LOWER_PCT, DEFAULT_UPPER_PCT, Winsorizer, winsorize};

mod percentile;
pub use percentile::{NEUTRAL_SCORE, PeerDistribution, percentile_score, sector_percentile};

mod stats;
pub use stats::{mean, median, round0, round1};

mod error;
pub use error::MathError;
