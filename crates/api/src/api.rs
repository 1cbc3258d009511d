//! Scoring API.

use std::fmt;
use std::sync::Arc;

use peerscore_math::round0;
use peerscore_narrative::{DISCLAIMER, Narrator};
use peerscore_primitives::{
    ScoreResult, ScoringOutput, Sector, SectorComparison, SectorOverview, SectorRanking, Symbol,
};
use peerscore_ranker::SectorRanker;
use peerscore_scorer::Scorer;
use peerscore_source::build_source;
use peerscore_traits::MetricSource;
use serde::Serialize;

use crate::{ApiError, CompanyDetail, EngineConfig};

/// Orchestrates source, scorer, ranker and narrator.
///
/// Lookups take `&self` and the type is `Send + Sync`, so one instance can
/// serve many threads.
pub struct ScoringApi {
    source: Arc<dyn MetricSource>,
    scorer: Arc<Scorer>,
    ranker: SectorRanker,
    narrator: Narrator,
}

impl fmt::Debug for ScoringApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringApi")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer)
            .field("ranker", &self.ranker)
            .finish_non_exhaustive()
    }
}

impl ScoringApi {
    /// Build the API from a configuration.
    ///
    /// # Errors
    /// Returns `ApiError::Config` for invalid weights or winsorize bounds and
    /// `ApiError::Source` if the source cannot be built.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ApiError> {
        let scorer = Scorer::with_config(config.scorer_config())?;
        let source = build_source(&config.source, config.as_of)?;
        Ok(Self::with_parts(source, scorer))
    }

    /// Build the API from an existing source and scorer.
    #[must_use]
    pub fn with_parts(source: Arc<dyn MetricSource>, scorer: Scorer) -> Self {
        let scorer = Arc::new(scorer);
        let ranker = SectorRanker::new(Arc::clone(&source), Arc::clone(&scorer));
        Self {
            source,
            scorer,
            ranker,
            narrator: Narrator::new(),
        }
    }

    /// Score one company against its sector.
    ///
    /// Returns `None` for unknown symbols.
    #[must_use]
    pub fn get_company_score(&self, symbol: &str) -> Option<ScoringOutput> {
        self.score_result(symbol).map(|r| self.output(&r))
    }

    /// Score several companies, skipping unknown symbols.
    #[must_use]
    pub fn batch_score<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<ScoringOutput> {
        let outputs: Vec<ScoringOutput> = symbols
            .iter()
            .filter_map(|s| self.get_company_score(s.as_ref()))
            .collect();
        tracing::debug!(
            requested = symbols.len(),
            scored = outputs.len(),
            "batch scored"
        );
        outputs
    }

    /// Drop cached sector scores.
    pub fn refresh_cache(&self) {
        self.ranker.clear_cache();
    }

    /// Overview of a sector by name.
    ///
    /// Unknown names and sectors without companies yield an empty overview
    /// carrying the requested name.
    #[must_use]
    pub fn get_sector_overview(&self, sector: &str) -> SectorOverview {
        match sector.parse::<Sector>() {
            Ok(s) => self.ranker.get_sector_overview(s),
            Err(err) => {
                tracing::debug!(%err, "overview of unknown sector");
                SectorOverview::empty(sector)
            }
        }
    }

    /// Rank of a company within its sector.
    #[must_use]
    pub fn get_sector_ranking(&self, symbol: &str) -> Option<SectorRanking> {
        self.ranker.get_sector_ranking(symbol)
    }

    /// Each dimension of a company against its sector medians.
    #[must_use]
    pub fn compare_to_sector(&self, symbol: &str) -> Option<SectorComparison> {
        self.ranker.compare_to_sector(symbol)
    }

    /// Scoring record with interpretations, sector position and comparison.
    #[must_use]
    pub fn get_company_detail(&self, symbol: &str) -> Option<CompanyDetail> {
        let result = self.score_result(symbol)?;
        let ranking = self.ranker.get_sector_ranking(symbol)?;
        let comparison = self.ranker.compare_to_sector(symbol)?;
        Some(CompanyDetail {
            score: self.output(&result),
            interpretations: self.narrator.interpretations(&result),
            short_description: self.narrator.short_description(&result),
            sector_position: ranking.position,
            sector_rank: ranking.rank,
            sector_peers: ranking.total_companies,
            comparison,
        })
    }

    /// Pretty-printed JSON of [`ScoringApi::get_company_score`], or `{}` for
    /// unknown symbols.
    #[must_use]
    pub fn get_company_score_json(&self, symbol: &str) -> String {
        to_json(self.get_company_score(symbol).as_ref())
    }

    /// Pretty-printed JSON of [`ScoringApi::get_sector_overview`].
    #[must_use]
    pub fn get_sector_overview_json(&self, sector: &str) -> String {
        to_json(Some(&self.get_sector_overview(sector)))
    }

    /// Symbols the source knows, in enumeration order.
    #[must_use]
    pub fn available_symbols(&self) -> Vec<Symbol> {
        self.source.list_symbols()
    }

    /// Sectors with at least one company.
    #[must_use]
    pub fn available_sectors(&self) -> Vec<Sector> {
        self.source.list_sectors()
    }

    /// Notice to publish with every assessment.
    #[must_use]
    pub const fn disclaimer() -> &'static str {
        DISCLAIMER
    }

    fn score_result(&self, symbol: &str) -> Option<ScoreResult> {
        let company = self.source.get_company(symbol)?;
        let peers = self.source.get_sector_peers(company.sector());
        Some(self.scorer.score_company(&company, &peers))
    }

    fn output(&self, result: &ScoreResult) -> ScoringOutput {
        let labels = self.narrator.labels(result);
        ScoringOutput {
            symbol: result.symbol.clone(),
            sector: result.sector,
            score_total: whole(result.total),
            score_quality: labels.quality.to_string(),
            score_growth: labels.growth.to_string(),
            score_stability: labels.stability.to_string(),
            score_valuation: labels.valuation.to_string(),
            sector_percentile: whole(result.sector_percentile),
            traffic_light: self.narrator.traffic_light(result),
            summary_text: self.narrator.summary(result),
        }
    }
}

/// Round a 0-100 score to a whole number.
fn whole(score: f64) -> u8 {
    round0(score).clamp(0.0, 100.0) as u8
}

fn to_json<T: Serialize>(value: Option<&T>) -> String {
    value
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_else(|| "{}".to_owned())
}

#[cfg(test)]
mod tests {
    use peerscore_primitives::{SectorPosition, TrafficLight};
    use peerscore_source::MockSource;
    use rstest::rstest;

    use super::*;
    use crate::WinsorizeConfig;

    fn api() -> ScoringApi {
        ScoringApi::with_parts(Arc::new(MockSource::universe().unwrap()), Scorer::new())
    }

    #[test]
    fn score_of_msft() {
        let out = api().get_company_score("msft").unwrap();
        assert_eq!(out.symbol, "MSFT");
        assert_eq!(out.sector, Sector::Technology);
        assert_eq!(out.score_total, 68);
        assert_eq!(out.sector_percentile, 90);
        assert_eq!(out.traffic_light, TrafficLight::Yellow);
        assert_eq!(out.score_quality, "very high");
        assert_eq!(out.score_growth, "high");
        assert_eq!(out.score_stability, "high");
        assert_eq!(out.score_valuation, "slightly elevated");
        let lead = "The company shows values well above the industry level in quality, growth and \
                    stability.";
        assert!(out.summary_text.starts_with(lead));
        assert!(out.summary_text.contains("upper segment"));
    }

    #[rstest]
    #[case("INTC", 12, 0, TrafficLight::Red)]
    #[case("NVDA", 59, 80, TrafficLight::Yellow)]
    #[case("XOM", 32, 0, TrafficLight::Red)]
    #[case("KO", 52, 75, TrafficLight::Yellow)]
    fn score_cases(
        #[case] symbol: &str,
        #[case] total: u8,
        #[case] pct: u8,
        #[case] light: TrafficLight,
    ) {
        let out = api().get_company_score(symbol).unwrap();
        assert_eq!(out.score_total, total);
        assert_eq!(out.sector_percentile, pct);
        assert_eq!(out.traffic_light, light);
    }

    #[test]
    fn scorer_validates_config() {
        let inverted = EngineConfig {
            winsorize: WinsorizeConfig {
                lower_pct: 90,
                upper_pct: 10,
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            ScoringApi::from_config(&inverted),
            Err(ApiError::Config(_))
        ));

        let equal = EngineConfig {
            winsorize: WinsorizeConfig {
                lower_pct: 50,
                upper_pct: 50,
            },
            ..EngineConfig::default()
        };
        assert!(ScoringApi::from_config(&equal).is_ok());
    }

    #[test]
    fn unknown_symbol_is_absent() {
        let api = api();
        assert!(api.get_company_score("NONEXISTENT").is_none());
        assert!(api.get_company_detail("NONEXISTENT").is_none());
        assert_eq!(api.get_company_score_json("NONEXISTENT"), "{}");
    }

    #[test]
    fn batch_drops_unknown() {
        let outputs = api().batch_score(&["AAPL", "NOPE", "jnj"]);
        let symbols: Vec<&str> = outputs.iter().map(|o| o.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "JNJ"]);
    }

    #[test]
    fn sector_overview_by_name() {
        let api = api();
        let o = api.get_sector_overview("Healthcare");
        assert_eq!(o.company_count, 5);
        assert_eq!(o.top_performers[0], "JNJ");

        let unknown = api.get_sector_overview("Crypto");
        assert_eq!(unknown.sector, "Crypto");
        assert_eq!(unknown.company_count, 0);
    }

    #[test]
    fn detail_of_msft() {
        let d = api().get_company_detail("MSFT").unwrap();
        assert_eq!(d.score.symbol, "MSFT");
        assert_eq!(d.sector_rank, 1);
        assert_eq!(d.sector_peers, 10);
        assert_eq!(d.sector_position, SectorPosition::TopGroup);
        assert_eq!(d.short_description, "Balanced overall profile");
        assert_eq!(
            d.interpretations.quality,
            "Profitability is well above the industry average."
        );

        let json: serde_json::Value = serde_json::to_value(&d).unwrap();
        assert_eq!(json["symbol"], "MSFT");
        assert_eq!(json["comparison"]["valuation"], "average valuation");
        assert_eq!(json["comparison"]["quality"], "above average");
    }

    #[test]
    fn score_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&api().get_company_score_json("MSFT")).unwrap();
        assert_eq!(json["score_total"], 68);
        assert_eq!(json["traffic_light"], "yellow");
        assert_eq!(json["sector"], "Technology");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[test]
    fn listings() {
        let api = api();
        assert_eq!(api.available_symbols().len(), 33);
        assert_eq!(api.available_sectors().len(), 7);
        assert!(ScoringApi::disclaimer().contains("not investment advice"));
    }

    #[test]
    fn refresh_keeps_results() {
        let api = api();
        let before = api.get_company_detail("V").unwrap();
        api.refresh_cache();
        assert_eq!(api.get_company_detail("V").unwrap(), before);
    }
}
