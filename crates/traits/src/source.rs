//! Metric source trait definitions.

use peerscore_primitives::{CompanyFinancials, MetricError, Sector, Symbol};

/// Errors that can occur while building a metric source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A record failed validation.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] MetricError),

    /// Two records share a symbol.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(Symbol),

    /// The selected source kind has no working backend.
    #[error("data source not configured: {0}")]
    Unconfigured(String),
}

impl SourceError {
    /// Returns whether this error is recoverable.
    ///
    /// None are: a broken source cannot serve any request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

/// Read-only provider of company snapshots.
///
/// Symbol lookups are case-insensitive. Records are immutable; the engine
/// never writes back.
pub trait MetricSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Look up a company by symbol.
    fn get_company(&self, symbol: &str) -> Option<CompanyFinancials>;

    /// All companies of a sector, in a stable enumeration order.
    ///
    /// The result includes every company whose sector matches, so a peer set
    /// for a known company always contains that company.
    fn get_sector_peers(&self, sector: Sector) -> Vec<CompanyFinancials>;

    /// Every company, in enumeration order.
    fn get_all_companies(&self) -> Vec<CompanyFinancials>;

    /// Symbols of every company, in enumeration order.
    fn list_symbols(&self) -> Vec<Symbol> {
        self.get_all_companies()
            .into_iter()
            .map(|c| c.symbol().clone())
            .collect()
    }

    /// Sectors with at least one company, in canonical sector order.
    fn list_sectors(&self) -> Vec<Sector> {
        let companies = self.get_all_companies();
        Sector::ALL
            .into_iter()
            .filter(|s| companies.iter().any(|c| c.sector() == *s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use peerscore_primitives::Metrics;

    use super::*;

    struct TwoCompanies(Vec<CompanyFinancials>);

    impl MetricSource for TwoCompanies {
        fn name(&self) -> &str {
            "two"
        }

        fn get_company(&self, symbol: &str) -> Option<CompanyFinancials> {
            let wanted = Symbol::new(symbol);
            self.0.iter().find(|c| *c.symbol() == wanted).cloned()
        }

        fn get_sector_peers(&self, sector: Sector) -> Vec<CompanyFinancials> {
            self.0
                .iter()
                .filter(|c| c.sector() == sector)
                .cloned()
                .collect()
        }

        fn get_all_companies(&self) -> Vec<CompanyFinancials> {
            self.0.clone()
        }
    }

    fn source() -> TwoCompanies {
        let m = Metrics::default();
        TwoCompanies(vec![
            CompanyFinancials::new("XOM", "Exxon Mobil", Sector::Energy, m).unwrap(),
            CompanyFinancials::new("AAPL", "Apple Inc.", Sector::Technology, m).unwrap(),
        ])
    }

    #[test]
    fn default_listings() {
        let src = source();
        let symbols = vec![Symbol::new("XOM"), Symbol::new("AAPL")];
        assert_eq!(src.list_symbols(), symbols);
        assert_eq!(src.list_sectors(), vec![Sector::Technology, Sector::Energy]);
        assert!(src.get_company("aapl").is_some());
    }

    #[test]
    fn source_error_display() {
        let err = SourceError::Unconfigured("api".to_string());
        assert_eq!(err.to_string(), "data source not configured: api");
        assert!(!err.is_recoverable());

        let err: SourceError = MetricError::EmptySymbol.into();
        assert_eq!(err.to_string(), "invalid record: empty symbol");
    }
}
