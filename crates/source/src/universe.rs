//! The bundled demonstration universe.
//!
//! Thirty-three large US companies across seven sectors. The figures are
//! illustrative, not live data.

use peerscore_primitives::{CompanyFinancials, MetricError, Metrics, Sector};

struct Row {
    symbol: &'static str,
    name: &'static str,
    sector: Sector,
    quality: [f64; 4],
    growth: [f64; 3],
    stability: [f64; 4],
    valuation: [f64; 3],
}

const fn row(
    symbol: &'static str,
    name: &'static str,
    sector: Sector,
    quality: [f64; 4],
    growth: [f64; 3],
    stability: [f64; 4],
    valuation: [f64; 3],
) -> Row {
    Row {
        symbol,
        name,
        sector,
        quality,
        growth,
        stability,
        valuation,
    }
}

impl Row {
    const fn metrics(&self) -> Metrics {
        let [operating_margin, net_margin, roic, fcf_margin] = self.quality;
        let [revenue_growth_3y, earnings_growth_3y, fcf_growth_3y] = self.growth;
        let [debt_to_equity, interest_coverage, volatility, stability] = self.stability;
        let [pe_ratio, ev_ebitda, fcf_multiple] = self.valuation;
        Metrics {
            operating_margin,
            net_margin,
            roic,
            fcf_margin,
            revenue_growth_3y,
            earnings_growth_3y,
            fcf_growth_3y,
            debt_to_equity,
            interest_coverage,
            cashflow_volatility: volatility,
            earnings_stability: stability,
            pe_ratio,
            ev_ebitda,
            fcf_multiple,
        }
    }
}

// quality: operating margin, net margin, roic, fcf margin
// growth: revenue, earnings, fcf (3y)
// stability: debt/equity, interest coverage, cashflow volatility, earnings stability
// valuation: p/e, ev/ebitda, fcf multiple
#[rustfmt::skip]
const UNIVERSE: &[Row] = &[
    // Technology
    row("AAPL", "Apple Inc.", Sector::Technology,
        [0.30, 0.25, 0.45, 0.28], [0.08, 0.10, 0.12],
        [1.5, 25.0, 0.15, 0.90], [28.0, 20.0, 25.0]),
    row("MSFT", "Microsoft Corporation", Sector::Technology,
        [0.42, 0.35, 0.35, 0.32], [0.14, 0.18, 0.20],
        [0.5, 40.0, 0.10, 0.95], [32.0, 22.0, 28.0]),
    row("GOOGL", "Alphabet Inc.", Sector::Technology,
        [0.28, 0.22, 0.25, 0.25], [0.12, 0.15, 0.14],
        [0.3, 50.0, 0.12, 0.88], [25.0, 16.0, 22.0]),
    row("NVDA", "NVIDIA Corporation", Sector::Technology,
        [0.55, 0.48, 0.60, 0.45], [0.50, 0.70, 0.55],
        [0.4, 60.0, 0.25, 0.75], [55.0, 40.0, 50.0]),
    row("META", "Meta Platforms Inc.", Sector::Technology,
        [0.35, 0.28, 0.22, 0.30], [0.10, 0.08, 0.12],
        [0.2, 80.0, 0.20, 0.82], [22.0, 14.0, 20.0]),
    row("ORCL", "Oracle Corporation", Sector::Technology,
        [0.25, 0.18, 0.18, 0.22], [0.06, 0.08, 0.07],
        [3.0, 8.0, 0.18, 0.85], [18.0, 12.0, 16.0]),
    row("CRM", "Salesforce Inc.", Sector::Technology,
        [0.18, 0.12, 0.12, 0.28], [0.18, 0.25, 0.22],
        [0.3, 15.0, 0.22, 0.78], [45.0, 25.0, 30.0]),
    row("ADBE", "Adobe Inc.", Sector::Technology,
        [0.35, 0.28, 0.30, 0.40], [0.12, 0.14, 0.15],
        [0.4, 35.0, 0.12, 0.92], [35.0, 24.0, 28.0]),
    row("INTC", "Intel Corporation", Sector::Technology,
        [0.05, 0.02, 0.03, 0.05], [-0.10, -0.25, -0.20],
        [0.5, 5.0, 0.40, 0.50], [80.0, 15.0, 60.0]),
    row("IBM", "IBM Corporation", Sector::Technology,
        [0.15, 0.10, 0.12, 0.15], [0.02, 0.04, 0.03],
        [2.5, 10.0, 0.15, 0.88], [15.0, 10.0, 12.0]),

    // Healthcare
    row("JNJ", "Johnson & Johnson", Sector::Healthcare,
        [0.25, 0.20, 0.18, 0.22], [0.05, 0.06, 0.04],
        [0.4, 30.0, 0.10, 0.95], [16.0, 12.0, 18.0]),
    row("UNH", "UnitedHealth Group", Sector::Healthcare,
        [0.08, 0.06, 0.22, 0.07], [0.12, 0.14, 0.10],
        [0.7, 15.0, 0.12, 0.90], [20.0, 14.0, 22.0]),
    row("PFE", "Pfizer Inc.", Sector::Healthcare,
        [0.15, 0.10, 0.08, 0.12], [-0.05, -0.10, -0.08],
        [0.6, 12.0, 0.30, 0.65], [12.0, 8.0, 10.0]),
    row("LLY", "Eli Lilly and Company", Sector::Healthcare,
        [0.28, 0.22, 0.35, 0.20], [0.20, 0.30, 0.25],
        [1.2, 20.0, 0.18, 0.85], [65.0, 45.0, 55.0]),
    row("ABBV", "AbbVie Inc.", Sector::Healthcare,
        [0.30, 0.18, 0.15, 0.25], [0.04, 0.02, 0.05],
        [4.0, 8.0, 0.20, 0.80], [14.0, 10.0, 12.0]),

    // Consumer Discretionary
    row("AMZN", "Amazon.com Inc.", Sector::ConsumerDiscretionary,
        [0.08, 0.06, 0.12, 0.10], [0.12, 0.40, 0.30],
        [0.6, 15.0, 0.25, 0.75], [45.0, 18.0, 35.0]),
    row("TSLA", "Tesla Inc.", Sector::ConsumerDiscretionary,
        [0.12, 0.10, 0.15, 0.08], [0.30, 0.25, 0.20],
        [0.2, 25.0, 0.35, 0.65], [70.0, 35.0, 60.0]),
    row("NKE", "Nike Inc.", Sector::ConsumerDiscretionary,
        [0.12, 0.10, 0.30, 0.12], [0.05, 0.03, 0.04],
        [0.8, 18.0, 0.18, 0.85], [28.0, 18.0, 25.0]),
    row("MCD", "McDonald's Corporation", Sector::ConsumerDiscretionary,
        [0.45, 0.32, 0.20, 0.28], [0.08, 0.10, 0.08],
        [5.0, 10.0, 0.12, 0.92], [24.0, 18.0, 22.0]),
    row("SBUX", "Starbucks Corporation", Sector::ConsumerDiscretionary,
        [0.15, 0.10, 0.25, 0.12], [0.10, 0.08, 0.06],
        [6.0, 8.0, 0.15, 0.88], [22.0, 15.0, 20.0]),

    // Financials
    row("JPM", "JPMorgan Chase & Co.", Sector::Financials,
        [0.35, 0.30, 0.15, 0.25], [0.08, 0.12, 0.10],
        [1.2, 5.0, 0.20, 0.85], [12.0, 8.0, 10.0]),
    row("V", "Visa Inc.", Sector::Financials,
        [0.65, 0.52, 0.35, 0.55], [0.10, 0.12, 0.14],
        [0.5, 30.0, 0.08, 0.95], [28.0, 22.0, 26.0]),
    row("MA", "Mastercard Inc.", Sector::Financials,
        [0.58, 0.45, 0.40, 0.50], [0.12, 0.14, 0.15],
        [1.5, 25.0, 0.10, 0.93], [32.0, 25.0, 30.0]),
    row("BAC", "Bank of America Corp.", Sector::Financials,
        [0.28, 0.25, 0.10, 0.20], [0.05, 0.08, 0.06],
        [1.0, 4.0, 0.25, 0.80], [10.0, 6.0, 8.0]),

    // Consumer Staples
    row("PG", "Procter & Gamble Co.", Sector::ConsumerStaples,
        [0.22, 0.18, 0.18, 0.20], [0.04, 0.06, 0.05],
        [0.6, 20.0, 0.08, 0.95], [26.0, 18.0, 24.0]),
    row("KO", "The Coca-Cola Company", Sector::ConsumerStaples,
        [0.30, 0.22, 0.15, 0.25], [0.06, 0.08, 0.07],
        [1.5, 12.0, 0.10, 0.92], [24.0, 20.0, 22.0]),
    row("PEP", "PepsiCo Inc.", Sector::ConsumerStaples,
        [0.15, 0.12, 0.18, 0.14], [0.08, 0.06, 0.05],
        [2.0, 10.0, 0.12, 0.90], [22.0, 16.0, 20.0]),
    row("WMT", "Walmart Inc.", Sector::ConsumerStaples,
        [0.04, 0.02, 0.12, 0.04], [0.05, 0.08, 0.10],
        [0.6, 12.0, 0.15, 0.88], [28.0, 14.0, 30.0]),

    // Industrials
    row("CAT", "Caterpillar Inc.", Sector::Industrials,
        [0.20, 0.15, 0.25, 0.18], [0.12, 0.18, 0.15],
        [1.8, 15.0, 0.22, 0.80], [16.0, 12.0, 14.0]),
    row("HON", "Honeywell International", Sector::Industrials,
        [0.18, 0.14, 0.20, 0.16], [0.05, 0.08, 0.06],
        [1.2, 18.0, 0.15, 0.88], [22.0, 16.0, 20.0]),
    row("UPS", "United Parcel Service", Sector::Industrials,
        [0.10, 0.08, 0.30, 0.10], [0.03, 0.02, 0.01],
        [1.5, 12.0, 0.18, 0.82], [18.0, 10.0, 16.0]),

    // Energy
    row("XOM", "Exxon Mobil Corporation", Sector::Energy,
        [0.15, 0.12, 0.15, 0.14], [0.08, 0.10, 0.12],
        [0.2, 30.0, 0.35, 0.70], [12.0, 6.0, 10.0]),
    row("CVX", "Chevron Corporation", Sector::Energy,
        [0.14, 0.10, 0.12, 0.12], [0.06, 0.08, 0.10],
        [0.15, 35.0, 0.38, 0.68], [14.0, 5.0, 12.0]),
];

/// Build every company of the bundled universe, in enumeration order.
pub(crate) fn companies() -> Result<Vec<CompanyFinancials>, MetricError> {
    UNIVERSE
        .iter()
        .map(|r| CompanyFinancials::new(r.symbol, r.name, r.sector, r.metrics()))
        .collect()
}
