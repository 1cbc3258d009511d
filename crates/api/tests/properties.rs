//! End-to-end properties of the scoring engine over the mock universe.
#![allow(missing_docs)]

use std::sync::Arc;

use peerscore_api::{ApiError, EngineConfig, ScoringApi};
use peerscore_narrative::forbidden_term;
use peerscore_primitives::{CompanyFinancials, Metrics, Sector, TrafficLight};
use peerscore_scorer::Scorer;
use peerscore_source::{MockSource, SourceConfig};
use peerscore_traits::{MetricSource, SourceError};

fn api() -> ScoringApi {
    ScoringApi::from_config(&EngineConfig::default()).unwrap()
}

#[test]
fn every_output_is_in_range() {
    let api = api();
    let symbols = api.available_symbols();
    let outputs = api.batch_score(&symbols);
    assert_eq!(outputs.len(), 33);
    for out in &outputs {
        assert!(out.score_total <= 100);
        assert!(out.sector_percentile <= 100);
        assert!(!out.score_quality.is_empty() && !out.score_valuation.is_empty());
    }
}

#[test]
fn raw_scores_are_in_range() {
    let source = MockSource::universe().unwrap();
    let scorer = Scorer::new();
    let mut scored = 0;
    for sector in source.list_sectors() {
        for r in scorer.score_sector(&source.get_sector_peers(sector)) {
            for v in [
                r.quality,
                r.growth,
                r.stability,
                r.valuation,
                r.total,
                r.sector_percentile,
            ] {
                assert!((0.0..=100.0).contains(&v), "{}: {v}", r.symbol);
            }
            scored += 1;
        }
    }
    assert_eq!(scored, 33);
}

#[test]
fn no_output_leaks_forbidden_terms() {
    let api = api();
    for symbol in api.available_symbols() {
        let json = api.get_company_score_json(symbol.as_str());
        // Keys name the scored dimensions, so only values are checked.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for (key, field) in value.as_object().unwrap() {
            if let Some(text) = field.as_str() {
                assert_eq!(forbidden_term(text), None, "{symbol}.{key}: {text}");
            }
        }
        let detail = api.get_company_detail(symbol.as_str()).unwrap();
        for text in [
            detail.interpretations.quality,
            detail.interpretations.growth,
            detail.interpretations.stability,
            detail.interpretations.valuation,
            detail.short_description,
        ] {
            assert_eq!(forbidden_term(text), None, "{symbol}: {text}");
        }
    }
}

#[test]
fn summaries_have_three_sentences() {
    let api = api();
    for out in api.batch_score(&api.available_symbols()) {
        let sentences = out.summary_text.matches(". ").count() + 1;
        assert_eq!(sentences, 3, "{}", out.summary_text);
        assert!(out.summary_text.ends_with('.'));
    }
}

#[test]
fn sector_overviews_account_for_every_company() {
    let api = api();
    let mut seen = 0;
    for sector in api.available_sectors() {
        let overview = api.get_sector_overview(sector.name());
        assert_eq!(overview.score_distribution.total(), overview.company_count);
        assert!(overview.top_performers.len() <= 3);
        seen += overview.company_count;
    }
    assert_eq!(seen, 33);

    let tech = api.get_sector_overview("technology");
    assert_eq!(tech.sector, "Technology");
    assert_eq!(tech.company_count, 10);
}

#[test]
fn repeated_calls_are_identical() {
    let api = api();
    let first = api.get_company_score("AAPL").unwrap();
    let second = api.get_company_score("AAPL").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        api.get_company_score_json("AAPL"),
        api.get_company_score_json("aapl")
    );
}

#[test]
fn clear_leader_is_green_and_named_for_strength() {
    let peer = |symbol: &str, margin: f64, leverage: f64| {
        let m = Metrics {
            operating_margin: margin,
            net_margin: margin,
            roic: margin,
            fcf_margin: margin,
            revenue_growth_3y: margin,
            earnings_growth_3y: margin,
            fcf_growth_3y: margin,
            debt_to_equity: leverage,
            interest_coverage: margin * 100.0,
            cashflow_volatility: leverage,
            earnings_stability: margin,
            pe_ratio: 20.0,
            ev_ebitda: 12.0,
            fcf_multiple: 20.0,
        };
        CompanyFinancials::new(symbol, symbol, Sector::Industrials, m).unwrap()
    };
    let companies = (0..9)
        .map(|i| {
            let step = f64::from(i);
            peer(&format!("P{i}"), 0.05 + step * 0.01, 2.0 - step * 0.1)
        })
        .chain([peer("LEAD", 0.5, 0.1)])
        .collect();
    let source = MockSource::from_companies(companies).unwrap();
    let api = ScoringApi::with_parts(Arc::new(source), Scorer::new());

    let out = api.get_company_score("LEAD").unwrap();
    assert!(out.score_total >= 70, "{}", out.score_total);
    assert_eq!(out.traffic_light, TrafficLight::Green);
    let lead = "The company shows values well above the industry level";
    assert!(out.summary_text.starts_with(lead));
    assert!(out.sector_percentile >= 80);
}

#[test]
fn unconfigured_api_source_fails() {
    let config = EngineConfig {
        source: SourceConfig::Api { endpoint: None },
        ..EngineConfig::default()
    };
    let err = ScoringApi::from_config(&config).unwrap_err();
    assert!(matches!(err, ApiError::Source(SourceError::Unconfigured(_))));
}

#[test]
fn invalid_weights_fail_before_construction() {
    let doc = "[weights]\nquality = 0.9\ngrowth = 0.25\nstability = 0.25\nvaluation = 0.2\n";
    assert!(EngineConfig::from_toml_str(doc).is_err());
}

#[test]
fn shared_across_threads() {
    let api = Arc::new(api());
    let handles: Vec<_> = ["MSFT", "JPM", "CAT", "XOM"]
        .into_iter()
        .map(|symbol| {
            let api = Arc::clone(&api);
            std::thread::spawn(move || api.get_company_detail(symbol))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_some());
    }
    assert_eq!(api.get_sector_ranking("MSFT").unwrap().rank, 1);
}
