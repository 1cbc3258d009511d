//! Sector ranker with a per-sector score cache.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use peerscore_primitives::{Sector, SectorComparison, SectorOverview, SectorPosition, SectorRanking};
use peerscore_scorer::Scorer;
use peerscore_traits::MetricSource;

use crate::SectorScores;

/// Number of symbols listed in a sector overview.
const TOP_PERFORMERS: usize = 3;

/// Ranks companies within their sector.
///
/// Sector score sets are computed lazily and cached until
/// [`SectorRanker::clear_cache`]. Empty sectors are never cached.
pub struct SectorRanker {
    source: Arc<dyn MetricSource>,
    scorer: Arc<Scorer>,
    cache: Mutex<HashMap<Sector, Arc<SectorScores>>>,
}

impl fmt::Debug for SectorRanker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectorRanker")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer)
            .field("cached_sectors", &self.cached_sectors())
            .finish()
    }
}

impl SectorRanker {
    /// Create a ranker over a metric source.
    #[must_use]
    pub fn new(source: Arc<dyn MetricSource>, scorer: Arc<Scorer>) -> Self {
        Self {
            source,
            scorer,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Scores of every company in a sector, computing them on first use.
    ///
    /// Returns `None` when the source has no company in the sector.
    #[must_use]
    pub fn sector_scores(&self, sector: Sector) -> Option<Arc<SectorScores>> {
        let mut cache = self.cache.lock();
        if let Some(scores) = cache.get(&sector) {
            tracing::debug!(%sector, "sector cache hit");
            return Some(Arc::clone(scores));
        }
        tracing::debug!(%sector, "sector cache miss");

        let peers = self.source.get_sector_peers(sector);
        if peers.is_empty() {
            return None;
        }
        let scores = Arc::new(SectorScores::new(sector, self.scorer.score_sector(&peers)));
        cache.insert(sector, Arc::clone(&scores));
        tracing::debug!(%sector, companies = scores.len(), "cached sector scores");
        Some(scores)
    }

    /// Rank of a company within its sector.
    ///
    /// Returns `None` for unknown symbols.
    #[must_use]
    pub fn get_sector_ranking(&self, symbol: &str) -> Option<SectorRanking> {
        let company = self.source.get_company(symbol)?;
        let scores = self.sector_scores(company.sector())?;
        let result = scores.get(company.symbol())?;
        let rank = scores.rank_of(company.symbol()).unwrap_or(scores.len());

        Some(SectorRanking {
            symbol: company.symbol().clone(),
            sector: company.sector(),
            rank,
            total_companies: scores.len(),
            percentile: result.sector_percentile,
            position: SectorPosition::from_percentile(result.sector_percentile),
        })
    }

    /// Company count, best three symbols and score distribution of a sector.
    ///
    /// Sectors without companies yield an empty overview.
    #[must_use]
    pub fn get_sector_overview(&self, sector: Sector) -> SectorOverview {
        let Some(scores) = self.sector_scores(sector) else {
            return SectorOverview::empty(sector.to_string());
        };
        SectorOverview {
            sector: sector.to_string(),
            company_count: scores.len(),
            top_performers: scores.top(TOP_PERFORMERS),
            score_distribution: scores.distribution(),
        }
    }

    /// Each dimension of a company against the sector median.
    ///
    /// Returns `None` for unknown symbols.
    #[must_use]
    pub fn compare_to_sector(&self, symbol: &str) -> Option<SectorComparison> {
        let company = self.source.get_company(symbol)?;
        self.sector_scores(company.sector())?
            .compare(company.symbol())
    }

    /// Drop every cached sector.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        let dropped = cache.len();
        cache.clear();
        tracing::info!(sectors = dropped, "cleared sector score cache");
    }

    /// Number of sectors currently cached.
    #[must_use]
    pub fn cached_sectors(&self) -> usize {
        self.cache.lock().len()
    }
}
