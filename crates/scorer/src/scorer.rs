//! Sector-relative company scoring.

use peerscore_math::{NEUTRAL_SCORE, PeerDistribution, Winsorizer, mean, round1, sector_percentile};
use peerscore_primitives::{CompanyFinancials, Dimension, Metrics, ScoreResult};

use crate::{PeerMatrix, ScorerConfig, ScorerError};

/// Scores companies relative to a peer set.
///
/// Three independent layers: each metric is percentile-ranked within the
/// peers, metrics average into dimension scores, and dimensions combine into
/// a weighted total that is ranked again against the peers' totals.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScorerConfig,
    winsorizer: Winsorizer,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// Create a scorer with default weights and 5/95 winsorizing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
            winsorizer: Winsorizer::default(),
        }
    }

    /// Create a scorer from a configuration.
    ///
    /// # Errors
    /// Returns `ScorerError` if the weights or winsorize bounds are invalid.
    pub fn with_config(config: ScorerConfig) -> Result<Self, ScorerError> {
        config.validate()?;
        let winsorizer = config.winsorizer()?;
        if config.lower_pct == config.upper_pct {
            tracing::warn!(
                pct = config.lower_pct,
                "winsorize bounds are equal, every metric collapses to one value"
            );
        }
        Ok(Self { config, winsorizer })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Unrounded score of one dimension against `peers`.
    ///
    /// Empty or single-company peer sets score 50.
    #[must_use]
    pub fn dimension_score(
        &self,
        dimension: Dimension,
        company: &CompanyFinancials,
        peers: &[CompanyFinancials],
    ) -> f64 {
        let scores: Vec<f64> = dimension
            .metrics()
            .iter()
            .map(|&metric| {
                let values = peers.iter().map(|p| p.metric(metric));
                let dist = PeerDistribution::new(values, &self.winsorizer);
                dist.score(company.metric(metric), metric.direction().is_inverse())
            })
            .collect();
        mean(&scores).unwrap_or(NEUTRAL_SCORE)
    }

    /// Quality score: margins and return on capital.
    #[must_use]
    pub fn quality_score(&self, company: &CompanyFinancials, peers: &[CompanyFinancials]) -> f64 {
        self.dimension_score(Dimension::Quality, company, peers)
    }

    /// Growth score: three-year revenue, earnings and cash-flow growth.
    #[must_use]
    pub fn growth_score(&self, company: &CompanyFinancials, peers: &[CompanyFinancials]) -> f64 {
        self.dimension_score(Dimension::Growth, company, peers)
    }

    /// Stability score: leverage, coverage and earnings consistency.
    #[must_use]
    pub fn stability_score(
        &self,
        company: &CompanyFinancials,
        peers: &[CompanyFinancials],
    ) -> f64 {
        self.dimension_score(Dimension::Stability, company, peers)
    }

    /// Valuation score. Every valuation metric is lower-is-better, so a high
    /// score means a cheap company.
    #[must_use]
    pub fn valuation_score(
        &self,
        company: &CompanyFinancials,
        peers: &[CompanyFinancials],
    ) -> f64 {
        self.dimension_score(Dimension::Valuation, company, peers)
    }

    /// Weighted total of the four dimension scores, rounded to one decimal.
    #[must_use]
    pub fn total_score(&self, quality: f64, growth: f64, stability: f64, valuation: f64) -> f64 {
        let w = &self.config.weights;
        round1(
            w.get(Dimension::Quality) * quality
                + w.get(Dimension::Growth) * growth
                + w.get(Dimension::Stability) * stability
                + w.get(Dimension::Valuation) * valuation,
        )
    }

    /// Share of `totals` strictly below `total`, as a whole-number percentile.
    #[must_use]
    pub fn sector_percentile(&self, total: f64, totals: &[f64]) -> f64 {
        sector_percentile(total, totals)
    }

    /// Score one company against its sector peers.
    ///
    /// `peers` must contain `company`. Every peer's total is computed to
    /// place the company within the sector.
    #[must_use]
    pub fn score_company(
        &self,
        company: &CompanyFinancials,
        peers: &[CompanyFinancials],
    ) -> ScoreResult {
        debug_assert!(
            peers.iter().any(|p| p.symbol() == company.symbol()),
            "peer set for {} does not contain it",
            company.symbol()
        );
        let dists = PeerMatrix::from_companies(peers).distributions(&self.winsorizer);
        let dims = dimension_scores(&dists, company.metrics());
        let total = self.weighted_total(&dims);
        let totals: Vec<f64> = peers
            .iter()
            .map(|p| {
                if p.symbol() == company.symbol() {
                    total
                } else {
                    self.weighted_total(&dimension_scores(&dists, p.metrics()))
                }
            })
            .collect();
        result(
            company,
            &dims,
            total,
            self.sector_percentile(total, &totals),
        )
    }

    /// Score every company of a peer set, in peer order.
    ///
    /// Identical to calling [`Scorer::score_company`] for each peer, with
    /// the peer distributions and totals computed once.
    #[must_use]
    pub fn score_sector(&self, peers: &[CompanyFinancials]) -> Vec<ScoreResult> {
        let dists = PeerMatrix::from_companies(peers).distributions(&self.winsorizer);
        let dims: Vec<[f64; 4]> = peers
            .iter()
            .map(|p| dimension_scores(&dists, p.metrics()))
            .collect();
        let totals: Vec<f64> = dims.iter().map(|d| self.weighted_total(d)).collect();
        tracing::debug!(peers = peers.len(), "scored peer set");
        peers
            .iter()
            .zip(dims.iter().zip(&totals))
            .map(|(p, (d, &total))| result(p, d, total, self.sector_percentile(total, &totals)))
            .collect()
    }

    fn weighted_total(&self, dims: &[f64; 4]) -> f64 {
        self.total_score(dims[0], dims[1], dims[2], dims[3])
    }
}

/// Unrounded dimension scores in [`Dimension::ALL`] order.
fn dimension_scores(dists: &[PeerDistribution], metrics: &Metrics) -> [f64; 4] {
    Dimension::ALL.map(|dim| {
        let scores: Vec<f64> = dim
            .metrics()
            .iter()
            .map(|&m| dists[m.index()].score(m.value(metrics), m.direction().is_inverse()))
            .collect();
        mean(&scores).unwrap_or(NEUTRAL_SCORE)
    })
}

fn result(company: &CompanyFinancials, dims: &[f64; 4], total: f64, pct: f64) -> ScoreResult {
    ScoreResult {
        symbol: company.symbol().clone(),
        sector: company.sector(),
        quality: round1(dims[0]),
        growth: round1(dims[1]),
        stability: round1(dims[2]),
        valuation: round1(dims[3]),
        total,
        sector_percentile: pct,
    }
}
