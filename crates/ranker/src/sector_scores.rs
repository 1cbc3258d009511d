//! Scored sector snapshot.

use peerscore_math::median;
use peerscore_primitives::{
    Dimension, Relative, ScoreDistribution, ScoreResult, Sector, SectorComparison, Symbol,
};

/// Score results of every company in one sector, in source enumeration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorScores {
    sector: Sector,
    results: Vec<ScoreResult>,
}

impl SectorScores {
    /// Wrap the results of a sector scoring pass.
    #[must_use]
    pub const fn new(sector: Sector, results: Vec<ScoreResult>) -> Self {
        Self { sector, results }
    }

    /// Sector these scores belong to.
    #[must_use]
    pub const fn sector(&self) -> Sector {
        self.sector
    }

    /// Results in enumeration order.
    #[must_use]
    pub fn results(&self) -> &[ScoreResult] {
        &self.results
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result of one company.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&ScoreResult> {
        self.results.iter().find(|r| r.symbol == *symbol)
    }

    /// Results sorted by total, best first. The sort is stable, so equal
    /// totals keep enumeration order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoreResult> {
        let mut ranked: Vec<&ScoreResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
        ranked
    }

    /// 1-based rank of a company.
    #[must_use]
    pub fn rank_of(&self, symbol: &Symbol) -> Option<usize> {
        self.ranked()
            .iter()
            .position(|r| r.symbol == *symbol)
            .map(|i| i + 1)
    }

    /// Up to `n` best symbols, best first.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<Symbol> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|r| r.symbol.clone())
            .collect()
    }

    /// Totals per traffic-light band.
    #[must_use]
    pub fn distribution(&self) -> ScoreDistribution {
        let mut dist = ScoreDistribution::default();
        for r in &self.results {
            dist.record(r.total);
        }
        dist
    }

    /// Median of one dimension across the sector.
    #[must_use]
    pub fn median(&self, dimension: Dimension) -> Option<f64> {
        let values: Vec<f64> = self
            .results
            .iter()
            .map(|r| r.dimension(dimension))
            .collect();
        median(&values)
    }

    /// Compare one company with the sector medians.
    #[must_use]
    pub fn compare(&self, symbol: &Symbol) -> Option<SectorComparison> {
        let result = self.get(symbol)?;
        let relative = |dim: Dimension| {
            self.median(dim).map_or(Relative::InLine, |m| {
                Relative::classify(result.dimension(dim), m)
            })
        };
        Some(SectorComparison {
            quality: relative(Dimension::Quality),
            growth: relative(Dimension::Growth),
            stability: relative(Dimension::Stability),
            valuation: relative(Dimension::Valuation),
        })
    }
}
