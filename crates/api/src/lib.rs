#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod api;
pub use api::ScoringApi;

mod config;
pub use config::{EngineConfig, WinsorizeConfig};

mod detail;
pub use detail::CompanyDetail;

mod error;
pub use error::ApiError;
