//! Template-driven summary text.

use peerscore_primitives::{Dimension, ScoreResult, TrafficLight};
use serde::Serialize;

use crate::{DimensionLabels, Rating, phrases, traffic_light};

/// One interpretation sentence per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretations {
    /// Quality sentence.
    pub quality: &'static str,
    /// Growth sentence.
    pub growth: &'static str,
    /// Stability sentence.
    pub stability: &'static str,
    /// Valuation sentence.
    pub valuation: &'static str,
}

/// Writes descriptive text about a score.
///
/// The summary has three sentences: the company's strengths, its first
/// weakness, and its position in the sector. Each sentence is picked from a
/// fixed phrase table by the dimension labels, so the text never carries a
/// figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator;

impl Narrator {
    /// Create a narrator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Labels of all four dimensions.
    #[must_use]
    pub fn labels(&self, result: &ScoreResult) -> DimensionLabels {
        DimensionLabels::from_result(result)
    }

    /// Traffic light of the total score.
    #[must_use]
    pub fn traffic_light(&self, result: &ScoreResult) -> TrafficLight {
        traffic_light(result.total)
    }

    /// Three-sentence summary.
    #[must_use]
    pub fn summary(&self, result: &ScoreResult) -> String {
        let labels = self.labels(result);
        let strengths: Vec<Dimension> = [
            (Dimension::Quality, labels.quality),
            (Dimension::Growth, labels.growth),
            (Dimension::Stability, labels.stability),
        ]
        .into_iter()
        .filter(|(_, rating)| rating.is_strength())
        .map(|(dim, _)| dim)
        .collect();

        let opening = opening(&labels, &strengths);
        let weakness = weakness(&labels, strengths.len());
        let closing = phrases::position(result.sector_percentile);
        format!("{opening} {weakness} {closing}")
    }

    /// Interpretation sentence of each dimension.
    #[must_use]
    pub fn interpretations(&self, result: &ScoreResult) -> Interpretations {
        let labels = self.labels(result);
        Interpretations {
            quality: phrases::quality(labels.quality),
            growth: phrases::growth(labels.growth),
            stability: phrases::stability(labels.stability),
            valuation: phrases::valuation(labels.valuation),
        }
    }

    /// One-line description of the overall profile.
    #[must_use]
    pub fn short_description(&self, result: &ScoreResult) -> &'static str {
        self.traffic_light(result).description()
    }
}

fn opening(labels: &DimensionLabels, strengths: &[Dimension]) -> String {
    match strengths {
        [] if labels.quality == Rating::Solid => phrases::QUALITY_IN_LINE.to_owned(),
        [] if labels.stability == Rating::Solid => {
            if labels.valuation.is_favorable() {
                phrases::STABILITY_WITH_LOW_VALUATION.to_owned()
            } else {
                phrases::STABILITY_IN_LINE.to_owned()
            }
        }
        [] => phrases::MIDDLE_PROFILE.to_owned(),
        [Dimension::Growth] => phrases::STRENGTH_GROWTH.to_owned(),
        [Dimension::Stability] => phrases::STRENGTH_STABILITY.to_owned(),
        [_] => phrases::STRENGTH_QUALITY.to_owned(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!(
                "{} {} and {last}.",
                phrases::STRENGTHS_LEAD,
                init.join(", ")
            )
        }
    }
}

/// First weakness in the order quality, growth, valuation.
fn weakness(labels: &DimensionLabels, strengths: usize) -> &'static str {
    if labels.quality.is_weak() {
        phrases::WEAK_QUALITY
    } else if labels.growth.is_weak() || labels.growth == Rating::Moderate {
        phrases::WEAK_GROWTH
    } else if labels.valuation.is_demanding() {
        if strengths >= 2 {
            phrases::VALUATION_WELL_ABOVE_DESPITE
        } else {
            phrases::VALUATION_WELL_ABOVE
        }
    } else if labels.valuation.is_elevated() {
        phrases::VALUATION_SLIGHTLY_ABOVE
    } else {
        phrases::NO_WEAKNESS
    }
}

#[cfg(test)]
mod tests {
    use peerscore_primitives::{Sector, Symbol};
    use rstest::rstest;

    use super::*;
    use crate::{DISCLAIMER, forbidden_term};

    fn result(q: f64, g: f64, s: f64, v: f64, total: f64, pct: f64) -> ScoreResult {
        ScoreResult {
            symbol: Symbol::new("TEST"),
            sector: Sector::Technology,
            quality: q,
            growth: g,
            stability: s,
            valuation: v,
            total,
            sector_percentile: pct,
        }
    }

    fn sentences(text: &str) -> Vec<&str> {
        text.split_inclusive(". ").map(str::trim).collect()
    }

    #[test]
    fn three_strengths_with_demanding_valuation() {
        let text = Narrator::new().summary(&result(80.0, 80.0, 90.0, 15.0, 75.0, 90.0));
        assert_eq!(
            text,
            "The company shows values well above the industry level in quality, growth and \
             stability. However, valuation is also well above the sector average. Overall, it \
             is clearly positioned in the upper segment of its sector."
        );
    }

    #[test]
    fn two_strengths() {
        let text = Narrator::new().summary(&result(75.0, 70.0, 45.0, 66.7, 67.5, 90.0));
        assert!(text.starts_with(
            "The company shows values well above the industry level in quality and growth."
        ));
        assert!(text.contains(phrases::NO_WEAKNESS));
    }

    #[test]
    fn single_demanding_valuation_has_no_contrast() {
        let text = Narrator::new().summary(&result(80.0, 45.0, 45.0, 20.0, 59.2, 80.0));
        assert!(text.starts_with(phrases::STRENGTH_QUALITY));
        assert!(text.contains(phrases::VALUATION_WELL_ABOVE));
        assert!(!text.contains("However"));
    }

    #[rstest]
    #[case(50.0, 50.0, 50.0, 50.0, phrases::QUALITY_IN_LINE)]
    #[case(30.0, 50.0, 50.0, 80.0, phrases::STABILITY_WITH_LOW_VALUATION)]
    #[case(30.0, 50.0, 50.0, 50.0, phrases::STABILITY_IN_LINE)]
    #[case(30.0, 50.0, 30.0, 50.0, phrases::MIDDLE_PROFILE)]
    #[case(30.0, 65.0, 30.0, 50.0, phrases::STRENGTH_GROWTH)]
    #[case(30.0, 50.0, 95.0, 50.0, phrases::STRENGTH_STABILITY)]
    fn opening_sentence(
        #[case] q: f64,
        #[case] g: f64,
        #[case] s: f64,
        #[case] v: f64,
        #[case] expected: &str,
    ) {
        let text = Narrator::new().summary(&result(q, g, s, v, 45.0, 50.0));
        assert_eq!(sentences(&text)[0], expected);
    }

    #[rstest]
    #[case(5.0, 30.0, 10.0, phrases::WEAK_QUALITY)]
    #[case(50.0, 30.0, 10.0, phrases::WEAK_GROWTH)]
    #[case(50.0, 50.0, 10.0, phrases::VALUATION_WELL_ABOVE)]
    #[case(50.0, 50.0, 30.0, phrases::VALUATION_SLIGHTLY_ABOVE)]
    #[case(50.0, 50.0, 45.0, phrases::VALUATION_SLIGHTLY_ABOVE)]
    #[case(50.0, 50.0, 70.0, phrases::NO_WEAKNESS)]
    fn first_weakness(#[case] q: f64, #[case] g: f64, #[case] v: f64, #[case] expected: &str) {
        let text = Narrator::new().summary(&result(q, g, 50.0, v, 45.0, 50.0));
        assert_eq!(sentences(&text)[1], expected);
    }

    #[rstest]
    #[case(100.0, "upper segment")]
    #[case(60.0, "upper midfield")]
    #[case(40.0, "middle range of its sector")]
    #[case(20.0, "below-average position")]
    #[case(0.0, "lower range")]
    fn closing_sentence(#[case] pct: f64, #[case] fragment: &str) {
        let text = Narrator::new().summary(&result(50.0, 50.0, 50.0, 50.0, 50.0, pct));
        let parts = sentences(&text);
        assert_eq!(parts.len(), 3);
        assert!(parts[2].contains(fragment), "{}", parts[2]);
    }

    #[test]
    fn label_gap_uses_fallback_in_text() {
        let narrator = Narrator::new();
        let r = result(89.5, 89.5, 89.5, 89.5, 89.5, 90.0);
        let labels = narrator.labels(&r);
        assert_eq!(labels.quality, Rating::Moderate);
        assert_eq!(narrator.summary(&r).split(". ").count(), 3);
        assert_eq!(
            narrator.interpretations(&r).quality,
            phrases::quality(Rating::Moderate)
        );
    }

    #[test]
    fn interpretations_follow_labels() {
        let i = Narrator::new().interpretations(&result(95.0, 12.0, 62.0, 5.0, 50.0, 50.0));
        assert_eq!(
            i.quality,
            "Profitability is well above the industry average."
        );
        assert_eq!(
            i.growth,
            "Revenue and earnings development is below the sector average."
        );
        assert_eq!(
            i.stability,
            "Cash flow stability is above the sector level."
        );
        assert_eq!(
            i.valuation,
            "The valuation level is well above the industry average."
        );
    }

    #[test]
    fn short_description_tracks_traffic_light() {
        let narrator = Narrator::new();
        let r = result(50.0, 50.0, 50.0, 50.0, 72.0, 50.0);
        assert_eq!(narrator.traffic_light(&r), TrafficLight::Green);
        assert_eq!(narrator.short_description(&r), "Attractive overall profile");
    }

    #[test]
    fn every_summary_is_compliant() {
        let narrator = Narrator::new();
        let grid = [0.0, 9.5, 15.0, 30.0, 45.0, 65.0, 80.0, 95.0];
        for q in grid {
            for g in grid {
                for s in grid {
                    for v in grid {
                        let r = result(q, g, s, v, 50.0, q);
                        let text = narrator.summary(&r);
                        assert_eq!(forbidden_term(&text), None, "{text}");
                        assert_eq!(sentences(&text).len(), 3, "{text}");
                    }
                }
            }
        }
        assert_eq!(forbidden_term(DISCLAIMER), None);
    }
}
