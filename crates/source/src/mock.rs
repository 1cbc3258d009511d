//! In-memory metric source.

use std::collections::HashMap;

use peerscore_primitives::{CompanyFinancials, Date, Sector, Symbol};
use peerscore_traits::{MetricSource, SourceError};

use crate::universe;

/// Metric source backed by an in-memory list of companies.
///
/// Enumeration order is insertion order, which fixes the tie-breaking order
/// of sector rankings.
#[derive(Debug, Clone)]
pub struct MockSource {
    companies: Vec<CompanyFinancials>,
    index: HashMap<Symbol, usize>,
}

impl MockSource {
    /// The bundled 33-company universe.
    ///
    /// # Errors
    /// Returns an error only if the bundled table fails validation.
    pub fn universe() -> Result<Self, SourceError> {
        Self::from_companies(universe::companies()?)
    }

    /// Build a source from arbitrary companies.
    ///
    /// # Errors
    /// Returns `SourceError::DuplicateSymbol` if two companies share a symbol.
    pub fn from_companies(companies: Vec<CompanyFinancials>) -> Result<Self, SourceError> {
        let mut index = HashMap::with_capacity(companies.len());
        for (i, c) in companies.iter().enumerate() {
            if index.insert(c.symbol().clone(), i).is_some() {
                return Err(SourceError::DuplicateSymbol(c.symbol().clone()));
            }
        }
        Ok(Self { companies, index })
    }

    /// Stamp every record with a snapshot date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: Date) -> Self {
        self.companies = self
            .companies
            .into_iter()
            .map(|c| c.with_as_of(as_of))
            .collect();
        self
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl MetricSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn get_company(&self, symbol: &str) -> Option<CompanyFinancials> {
        let found = self
            .index
            .get(&Symbol::new(symbol))
            .map(|&i| self.companies[i].clone());
        if found.is_none() {
            tracing::debug!(symbol, "symbol not in mock universe");
        }
        found
    }

    fn get_sector_peers(&self, sector: Sector) -> Vec<CompanyFinancials> {
        self.companies
            .iter()
            .filter(|c| c.sector() == sector)
            .cloned()
            .collect()
    }

    fn get_all_companies(&self) -> Vec<CompanyFinancials> {
        self.companies.clone()
    }
}
