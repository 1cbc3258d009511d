//! Point-in-time company snapshot.

use serde::{Deserialize, Serialize};

use crate::{Date, Metric, MetricError, Metrics, Sector, Symbol};

/// One company's metric snapshot.
///
/// Immutable once built. Construction rejects empty identifiers and any
/// non-finite metric, so scoring code never sees NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFinancials", into = "RawFinancials")]
pub struct CompanyFinancials {
    symbol: Symbol,
    name: String,
    sector: Sector,
    metrics: Metrics,
    as_of: Option<Date>,
}

impl CompanyFinancials {
    /// Create a validated snapshot.
    ///
    /// # Errors
    /// Returns an error if the symbol or name is empty, or if any metric is
    /// NaN or infinite.
    pub fn new(
        symbol: impl Into<Symbol>,
        name: impl Into<String>,
        sector: Sector,
        metrics: Metrics,
    ) -> Result<Self, MetricError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(MetricError::EmptySymbol);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MetricError::EmptyName(symbol.to_string()));
        }
        if let Some((metric, value)) = metrics.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MetricError::NonFinite {
                symbol: symbol.to_string(),
                metric,
                value,
            });
        }
        Ok(Self {
            symbol,
            name,
            sector,
            metrics,
            as_of: None,
        })
    }

    /// Attach the snapshot date.
    #[must_use]
    pub const fn with_as_of(mut self, as_of: Date) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Normalized ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sector the company is compared within.
    #[must_use]
    pub const fn sector(&self) -> Sector {
        self.sector
    }

    /// All fourteen raw metrics.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Value of a single metric.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> f64 {
        metric.value(&self.metrics)
    }

    /// Snapshot date, when known.
    #[must_use]
    pub const fn as_of(&self) -> Option<Date> {
        self.as_of
    }
}

#[derive(Serialize, Deserialize)]
struct RawFinancials {
    symbol: String,
    name: String,
    sector: Sector,
    #[serde(flatten)]
    metrics: Metrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    as_of: Option<Date>,
}

impl TryFrom<RawFinancials> for CompanyFinancials {
    type Error = MetricError;

    fn try_from(raw: RawFinancials) -> Result<Self, Self::Error> {
        let company = Self::new(raw.symbol, raw.name, raw.sector, raw.metrics)?;
        Ok(match raw.as_of {
            Some(date) => company.with_as_of(date),
            None => company,
        })
    }
}

impl From<CompanyFinancials> for RawFinancials {
    fn from(c: CompanyFinancials) -> Self {
        Self {
            symbol: c.symbol.into(),
            name: c.name,
            sector: c.sector,
            metrics: c.metrics,
            as_of: c.as_of,
        }
    }
}
