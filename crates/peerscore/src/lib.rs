//! # peerscore
//!
//! Sector-relative company scoring.
//!
//! Companies are scored against the peers of their own sector on quality,
//! growth, stability and valuation. The result is published only as whole
//! numbers, qualitative labels, a traffic-light color and a short summary.
//!
//! This crate re-exports the workspace crates behind feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `cli` (default): The `peerscore` binary
//! - `primitives`: Core type definitions
//! - `traits`: The metric source abstraction
//! - `math`: Winsorizing and percentile ranking
//! - `source`: The mock metric source
//! - `scorer`: Dimension and total scores
//! - `ranker`: Sector ranking and the sector cache
//! - `narrative`: Labels and summary text
//! - `api`: The orchestrating scoring API
//!
//! ## Example
//!
//! ```rust,ignore
//! use peerscore::api::{EngineConfig, ScoringApi};
//!
//! let api = ScoringApi::from_config(&EngineConfig::default())?;
//! if let Some(score) = api.get_company_score("MSFT") {
//!     println!("{} {} {}", score.symbol, score.score_total, score.traffic_light);
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/peerscore/peerscore/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use peerscore_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use peerscore_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use peerscore_math as math;
#[cfg(feature = "source")]
#[doc(inline)]
pub use peerscore_source as source;
#[cfg(feature = "scorer")]
#[doc(inline)]
pub use peerscore_scorer as scorer;
#[cfg(feature = "ranker")]
#[doc(inline)]
pub use peerscore_ranker as ranker;
#[cfg(feature = "narrative")]
#[doc(inline)]
pub use peerscore_narrative as narrative;
#[cfg(feature = "api")]
#[doc(inline)]
pub use peerscore_api as api;
