#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod compliance;
pub use compliance::{FORBIDDEN_TERMS, forbidden_term};

mod labels;
pub use labels::{DimensionLabels, Rating, ValuationRating, traffic_light};

mod narrator;
pub use narrator::{Interpretations, Narrator};

mod phrases;
pub use phrases::DISCLAIMER;
