//! Financial metrics and the scoring dimensions they belong to.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether a larger raw value is a better outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Larger values score higher.
    HigherIsBetter,
    /// Smaller values score higher; percentiles are inverted.
    LowerIsBetter,
}

impl Direction {
    /// Returns true when percentile scores must be inverted.
    #[must_use]
    pub const fn is_inverse(self) -> bool {
        matches!(self, Self::LowerIsBetter)
    }
}

/// One of the four scoring dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Profitability and capital efficiency.
    #[display("quality")]
    Quality,
    /// Three-year growth.
    #[display("growth")]
    Growth,
    /// Balance-sheet and earnings stability.
    #[display("stability")]
    Stability,
    /// Price relative to fundamentals.
    #[display("valuation")]
    Valuation,
}

impl Dimension {
    /// Every dimension, in output order.
    pub const ALL: [Self; 4] = [
        Self::Quality,
        Self::Growth,
        Self::Stability,
        Self::Valuation,
    ];

    /// Metrics that make up this dimension, in scoring order.
    #[must_use]
    pub const fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Quality => &[
                Metric::OperatingMargin,
                Metric::NetMargin,
                Metric::Roic,
                Metric::FcfMargin,
            ],
            Self::Growth => &[
                Metric::RevenueGrowth3y,
                Metric::EarningsGrowth3y,
                Metric::FcfGrowth3y,
            ],
            Self::Stability => &[
                Metric::DebtToEquity,
                Metric::InterestCoverage,
                Metric::CashflowVolatility,
                Metric::EarningsStability,
            ],
            Self::Valuation => &[Metric::PeRatio, Metric::EvEbitda, Metric::FcfMultiple],
        }
    }
}

/// A single raw financial metric.
///
/// These identifiers are internal. They name fields of [`Metrics`] and never
/// appear in any engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Metric {
    /// Operating margin.
    #[display("operating_margin")]
    OperatingMargin,
    /// Net margin.
    #[display("net_margin")]
    NetMargin,
    /// Return on invested capital.
    #[display("roic")]
    Roic,
    /// Free-cash-flow margin.
    #[display("fcf_margin")]
    FcfMargin,
    /// Three-year revenue growth.
    #[display("revenue_growth_3y")]
    RevenueGrowth3y,
    /// Three-year earnings growth.
    #[display("earnings_growth_3y")]
    EarningsGrowth3y,
    /// Three-year free-cash-flow growth.
    #[display("fcf_growth_3y")]
    FcfGrowth3y,
    /// Debt to equity.
    #[display("debt_to_equity")]
    DebtToEquity,
    /// Interest coverage.
    #[display("interest_coverage")]
    InterestCoverage,
    /// Cash-flow volatility.
    #[display("cashflow_volatility")]
    CashflowVolatility,
    /// Earnings stability.
    #[display("earnings_stability")]
    EarningsStability,
    /// Price to earnings.
    #[display("pe_ratio")]
    PeRatio,
    /// Enterprise value to EBITDA.
    #[display("ev_ebitda")]
    EvEbitda,
    /// Price to free cash flow.
    #[display("fcf_multiple")]
    FcfMultiple,
}

impl Metric {
    /// Every metric, grouped by dimension.
    pub const ALL: [Self; 14] = [
        Self::OperatingMargin,
        Self::NetMargin,
        Self::Roic,
        Self::FcfMargin,
        Self::RevenueGrowth3y,
        Self::EarningsGrowth3y,
        Self::FcfGrowth3y,
        Self::DebtToEquity,
        Self::InterestCoverage,
        Self::CashflowVolatility,
        Self::EarningsStability,
        Self::PeRatio,
        Self::EvEbitda,
        Self::FcfMultiple,
    ];

    /// Position of this metric in [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dimension this metric contributes to.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::OperatingMargin | Self::NetMargin | Self::Roic | Self::FcfMargin => {
                Dimension::Quality
            }
            Self::RevenueGrowth3y | Self::EarningsGrowth3y | Self::FcfGrowth3y => Dimension::Growth,
            Self::DebtToEquity
            | Self::InterestCoverage
            | Self::CashflowVolatility
            | Self::EarningsStability => Dimension::Stability,
            Self::PeRatio | Self::EvEbitda | Self::FcfMultiple => Dimension::Valuation,
        }
    }

    /// Scoring direction of this metric.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::DebtToEquity
            | Self::CashflowVolatility
            | Self::PeRatio
            | Self::EvEbitda
            | Self::FcfMultiple => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    /// Read this metric from a metric set.
    #[must_use]
    pub const fn value(self, metrics: &Metrics) -> f64 {
        match self {
            Self::OperatingMargin => metrics.operating_margin,
            Self::NetMargin => metrics.net_margin,
            Self::Roic => metrics.roic,
            Self::FcfMargin => metrics.fcf_margin,
            Self::RevenueGrowth3y => metrics.revenue_growth_3y,
            Self::EarningsGrowth3y => metrics.earnings_growth_3y,
            Self::FcfGrowth3y => metrics.fcf_growth_3y,
            Self::DebtToEquity => metrics.debt_to_equity,
            Self::InterestCoverage => metrics.interest_coverage,
            Self::CashflowVolatility => metrics.cashflow_volatility,
            Self::EarningsStability => metrics.earnings_stability,
            Self::PeRatio => metrics.pe_ratio,
            Self::EvEbitda => metrics.ev_ebitda,
            Self::FcfMultiple => metrics.fcf_multiple,
        }
    }
}

/// The fourteen raw metrics of one company snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Operating margin (fraction).
    pub operating_margin: f64,
    /// Net margin (fraction).
    pub net_margin: f64,
    /// Return on invested capital (fraction).
    pub roic: f64,
    /// Free-cash-flow margin (fraction).
    pub fcf_margin: f64,
    /// Three-year revenue growth (fraction).
    pub revenue_growth_3y: f64,
    /// Three-year earnings growth (fraction).
    pub earnings_growth_3y: f64,
    /// Three-year free-cash-flow growth (fraction).
    pub fcf_growth_3y: f64,
    /// Debt to equity.
    pub debt_to_equity: f64,
    /// Interest coverage.
    pub interest_coverage: f64,
    /// Cash-flow volatility.
    pub cashflow_volatility: f64,
    /// Earnings stability in `[0, 1]`.
    pub earnings_stability: f64,
    /// Price to earnings.
    pub pe_ratio: f64,
    /// Enterprise value to EBITDA.
    pub ev_ebitda: f64,
    /// Price to free cash flow.
    pub fcf_multiple: f64,
}

impl Metrics {
    /// Iterate over `(metric, value)` pairs in [`Metric::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, m.value(self)))
    }
}
