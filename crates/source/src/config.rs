//! Source selection.

use std::sync::Arc;

use peerscore_primitives::Date;
use peerscore_traits::{MetricSource, SourceError};
use serde::{Deserialize, Serialize};

use crate::MockSource;

/// Which metric source to build.
///
/// Deserializes from a table tagged by `kind`:
///
/// ```toml
/// [source]
/// kind = "mock"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// The bundled demonstration universe.
    #[default]
    Mock,
    /// A live market-data backend. None ships with this crate.
    Api {
        /// Endpoint the backend would talk to.
        #[serde(default)]
        endpoint: Option<String>,
    },
}

/// Build the configured source.
///
/// Mock records are stamped with `as_of`, or with today's date when none is
/// given.
///
/// # Errors
/// Returns `SourceError::Unconfigured` for [`SourceConfig::Api`], and
/// propagates validation errors from the mock universe.
pub fn build_source(
    config: &SourceConfig,
    as_of: Option<Date>,
) -> Result<Arc<dyn MetricSource>, SourceError> {
    match config {
        SourceConfig::Mock => {
            let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
            let source = MockSource::universe()?.with_as_of(as_of);
            tracing::info!(companies = source.len(), %as_of, "built mock metric source");
            Ok(Arc::new(source))
        }
        SourceConfig::Api { endpoint } => {
            let target = endpoint.as_deref().unwrap_or("<none>");
            Err(SourceError::Unconfigured(format!(
                "real data API is not implemented (endpoint {target}); use kind = \"mock\""
            )))
        }
    }
}
