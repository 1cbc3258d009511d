//! Percentile ranking against a peer sample.

use crate::Winsorizer;
use crate::stats::round0;
use crate::winsorize::clamp;

/// Score returned for degenerate samples (fewer than two values).
pub const NEUTRAL_SCORE: f64 = 50.0;

/// A winsorized, sorted peer sample that values can be ranked against.
///
/// Sorting happens once at construction; each [`PeerDistribution::score`] is
/// a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerDistribution {
    sorted: Vec<f64>,
}

impl PeerDistribution {
    /// Winsorize and sort a peer sample.
    pub fn new(peers: impl IntoIterator<Item = f64>, winsorizer: &Winsorizer) -> Self {
        let mut sorted: Vec<f64> = peers.into_iter().collect();
        sorted.sort_by(f64::total_cmp);
        winsorizer.apply_sorted(&mut sorted);
        Self { sorted }
    }

    /// Number of peers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Percentile score of a value within this sample, in `[0, 100]`.
    ///
    /// The value is first clamped into the winsorized range, then scored as
    /// the share of peers strictly below it. Ties do not count. With
    /// `inverse` the score is mirrored so that low values rank high.
    #[must_use]
    pub fn score(&self, value: f64, inverse: bool) -> f64 {
        let n = self.sorted.len();
        if n < 2 {
            return NEUTRAL_SCORE;
        }
        let bounded = clamp(value, self.sorted[0], self.sorted[n - 1]);
        let below = self.sorted.partition_point(|p| *p < bounded);
        let pct = below as f64 / n as f64 * 100.0;
        if inverse { 100.0 - pct } else { pct }
    }
}

/// Percentile score of `value` within `peers` using the default 5/95
/// winsorize bounds.
///
/// Fewer than two peers score [`NEUTRAL_SCORE`].
#[must_use]
pub fn percentile_score(value: f64, peers: &[f64], inverse: bool) -> f64 {
    PeerDistribution::new(peers.iter().copied(), &Winsorizer::default()).score(value, inverse)
}

/// Sector percentile of a total score: share of `totals` strictly below
/// `total`, rounded to a whole number.
///
/// No winsorizing, no inversion. Fewer than two totals score
/// [`NEUTRAL_SCORE`].
#[must_use]
pub fn sector_percentile(total: f64, totals: &[f64]) -> f64 {
    if totals.len() < 2 {
        return NEUTRAL_SCORE;
    }
    let below = totals.iter().filter(|t| **t < total).count();
    round0(below as f64 / totals.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    fn tens() -> Vec<f64> {
        (1..=10).map(|i| f64::from(i) * 10.0).collect()
    }

    #[test]
    fn extremes_of_linear_peers() {
        let peers = tens();
        assert!(percentile_score(100.0, &peers, false) >= 80.0);
        assert!(percentile_score(10.0, &peers, false) <= 20.0);
        assert_relative_eq!(percentile_score(100.0, &peers, false), 80.0);
        assert_relative_eq!(percentile_score(10.0, &peers, true), 100.0);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[5.0])]
    fn degenerate_peers_are_neutral(#[case] peers: &[f64]) {
        assert_relative_eq!(percentile_score(1.0, peers, false), NEUTRAL_SCORE);
        assert_relative_eq!(percentile_score(1.0, peers, true), NEUTRAL_SCORE);
    }

    #[test]
    fn inverse_with_small_sample() {
        let peers = [10.0, 20.0, 30.0, 40.0, 50.0];
        // bounds 10 and 40; 10 has nothing below it, 50 clamps to 40
        assert_relative_eq!(percentile_score(10.0, &peers, true), 100.0);
        assert_relative_eq!(percentile_score(50.0, &peers, true), 40.0);
    }

    #[test]
    fn ties_are_not_counted() {
        let peers = [1.0, 2.0, 2.0, 2.0, 3.0];
        assert_relative_eq!(percentile_score(2.0, &peers, false), 20.0);
    }

    #[test]
    fn value_clamped_into_range() {
        let peers = tens();
        assert_relative_eq!(
            percentile_score(1e9, &peers, false),
            percentile_score(90.0, &peers, false)
        );
        assert_relative_eq!(percentile_score(-1e9, &peers, false), 0.0);
    }

    #[test]
    fn inverse_complements_for_distinct_peers() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n: i32 = rng.gen_range(2..30);
            let peers: Vec<f64> = (0..n).map(|i| f64::from(i) * 3.0 + 0.5).collect();
            let x = f64::from(rng.gen_range(-10..100));
            let sum = percentile_score(x, &peers, false) + percentile_score(x, &peers, true);
            assert_relative_eq!(sum, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn score_is_monotone() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let n = rng.gen_range(2..25);
            let peers: Vec<f64> = (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let dist = PeerDistribution::new(peers.iter().copied(), &Winsorizer::default());
            let mut xs: Vec<f64> = (0..40).map(|_| rng.gen_range(-80.0..80.0)).collect();
            xs.sort_by(f64::total_cmp);
            for pair in xs.windows(2) {
                assert!(dist.score(pair[0], false) <= dist.score(pair[1], false));
                assert!(dist.score(pair[0], true) >= dist.score(pair[1], true));
            }
            for x in xs {
                let s = dist.score(x, false);
                assert!((0.0..=100.0).contains(&s));
            }
        }
    }

    #[test]
    fn distribution_matches_free_function() {
        let peers = [4.0, -2.0, 9.0, 9.0, 0.5, 13.0, 7.0];
        let dist = PeerDistribution::new(peers.iter().copied(), &Winsorizer::default());
        assert_eq!(dist.len(), 7);
        for x in [-5.0, 0.5, 4.0, 9.0, 20.0] {
            assert_relative_eq!(dist.score(x, false), percentile_score(x, &peers, false));
        }
    }

    #[rstest]
    #[case(90.0, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 15.0], 90.0)]
    #[case(10.0, &[10.0, 20.0, 30.0], 0.0)]
    #[case(20.0, &[10.0, 20.0, 30.0], 33.0)]
    #[case(30.0, &[10.0, 20.0, 30.0], 67.0)]
    #[case(55.0, &[55.0], 50.0)]
    fn sector_percentile_cases(#[case] total: f64, #[case] totals: &[f64], #[case] expected: f64) {
        assert_relative_eq!(sector_percentile(total, totals), expected);
    }
}
