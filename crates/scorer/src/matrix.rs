//! Peer metric matrix.

use ndarray::{Array2, ArrayView1};
use peerscore_math::{PeerDistribution, Winsorizer};
use peerscore_primitives::{CompanyFinancials, Metric};

/// Raw metrics of a peer set, one row per company and one column per
/// [`Metric`] in [`Metric::ALL`] order.
#[derive(Debug, Clone)]
pub struct PeerMatrix {
    values: Array2<f64>,
}

impl PeerMatrix {
    /// Collect the metrics of a peer set.
    #[must_use]
    pub fn from_companies(peers: &[CompanyFinancials]) -> Self {
        let values = Array2::from_shape_fn((peers.len(), Metric::ALL.len()), |(i, j)| {
            Metric::ALL[j].value(peers[i].metrics())
        });
        Self { values }
    }

    /// Values of one metric across all peers.
    #[must_use]
    pub fn column(&self, metric: Metric) -> ArrayView1<'_, f64> {
        self.values.column(metric.index())
    }

    /// Winsorized distribution of every metric, indexed by [`Metric::index`].
    #[must_use]
    pub fn distributions(&self, winsorizer: &Winsorizer) -> Vec<PeerDistribution> {
        Metric::ALL
            .iter()
            .map(|&metric| PeerDistribution::new(self.column(metric).iter().copied(), winsorizer))
            .collect()
    }
}
