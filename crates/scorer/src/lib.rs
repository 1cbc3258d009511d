#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::ScorerConfig;

mod matrix;
pub use matrix::PeerMatrix;

mod scorer;
pub use scorer::Scorer;

mod error;
pub use error::ScorerError;
