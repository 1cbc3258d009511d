//! Sector classification.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::MetricError;

/// Industry sector a company is compared within.
///
/// Peer groups never cross sector boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
pub enum Sector {
    /// Technology.
    #[display("Technology")]
    Technology,
    /// Healthcare.
    #[display("Healthcare")]
    Healthcare,
    /// Financials.
    #[display("Financials")]
    Financials,
    /// Consumer discretionary.
    #[display("Consumer Discretionary")]
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    /// Consumer staples.
    #[display("Consumer Staples")]
    #[serde(rename = "Consumer Staples")]
    ConsumerStaples,
    /// Industrials.
    #[display("Industrials")]
    Industrials,
    /// Energy.
    #[display("Energy")]
    Energy,
    /// Materials.
    #[display("Materials")]
    Materials,
    /// Real estate.
    #[display("Real Estate")]
    #[serde(rename = "Real Estate")]
    RealEstate,
    /// Utilities.
    #[display("Utilities")]
    Utilities,
    /// Communication services.
    #[display("Communication Services")]
    #[serde(rename = "Communication Services")]
    CommunicationServices,
}

impl Sector {
    /// Every sector, in canonical order.
    pub const ALL: [Self; 11] = [
        Self::Technology,
        Self::Healthcare,
        Self::Financials,
        Self::ConsumerDiscretionary,
        Self::ConsumerStaples,
        Self::Industrials,
        Self::Energy,
        Self::Materials,
        Self::RealEstate,
        Self::Utilities,
        Self::CommunicationServices,
    ];

    /// Display name of the sector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Financials => "Financials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Industrials => "Industrials",
            Self::Energy => "Energy",
            Self::Materials => "Materials",
            Self::RealEstate => "Real Estate",
            Self::Utilities => "Utilities",
            Self::CommunicationServices => "Communication Services",
        }
    }
}

impl FromStr for Sector {
    type Err = MetricError;

    /// Parse a sector name, ignoring case, surrounding whitespace, and the
    /// separator between words (`"real-estate"` and `"Real Estate"` match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|sector| squash(sector.name()) == wanted)
            .ok_or_else(|| MetricError::UnknownSector(s.trim().to_string()))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Technology", Sector::Technology)]
    #[case("consumer staples", Sector::ConsumerStaples)]
    #[case("REAL_ESTATE", Sector::RealEstate)]
    #[case(" Communication Services ", Sector::CommunicationServices)]
    fn sector_parses(#[case] raw: &str, #[case] expected: Sector) {
        assert_eq!(raw.parse::<Sector>().unwrap(), expected);
    }

    #[test]
    fn unknown_sector_errors() {
        assert!("Crypto".parse::<Sector>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for sector in Sector::ALL {
            assert_eq!(sector.to_string(), sector.name());
        }
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Sector::ConsumerDiscretionary).unwrap();
        assert_eq!(json, "\"Consumer Discretionary\"");
        let back: Sector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sector::ConsumerDiscretionary);
    }
}
