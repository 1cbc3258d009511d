//! Fixed phrase table. Every sentence the narrator emits is assembled from
//! these fragments.

use crate::{Rating, ValuationRating};

/// Notice attached to every published assessment.
pub const DISCLAIMER: &str =
    "The assessment is based on a quantitative model and is not investment advice.";

pub(crate) const STRENGTHS_LEAD: &str = "The company shows values well above the industry level in";
pub(crate) const STRENGTH_GROWTH: &str = "Growth is positioned above the sector level.";
pub(crate) const STRENGTH_STABILITY: &str =
    "The company's stability is well above the sector level.";
pub(crate) const STRENGTH_QUALITY: &str = "The company's quality is above the industry average.";
pub(crate) const QUALITY_IN_LINE: &str =
    "The company's profitability and stability are in line with the industry average.";
pub(crate) const STABILITY_WITH_LOW_VALUATION: &str =
    "Stability is above the sector level and valuation below the industry average.";
pub(crate) const STABILITY_IN_LINE: &str =
    "The company's stability is in line with the industry average.";
pub(crate) const MIDDLE_PROFILE: &str =
    "The overall profile sits in the middle range of the sector.";

pub(crate) const WEAK_QUALITY: &str = "Quality indicators are below the industry average.";
pub(crate) const WEAK_GROWTH: &str = "Growth is weaker than at many competitors.";
pub(crate) const VALUATION_WELL_ABOVE: &str = "Valuation is well above the sector average.";
pub(crate) const VALUATION_WELL_ABOVE_DESPITE: &str =
    "However, valuation is also well above the sector average.";
pub(crate) const VALUATION_SLIGHTLY_ABOVE: &str = "Valuation is slightly above the sector average.";
pub(crate) const NO_WEAKNESS: &str = "Growth is above the level of comparable companies.";

/// Closing sentence for a sector percentile.
pub(crate) fn position(percentile: f64) -> &'static str {
    match percentile {
        p if p >= 80.0 => "Overall, it is clearly positioned in the upper segment of its sector.",
        p if p >= 60.0 => {
            "Overall, the company is solidly positioned in the upper midfield of its sector."
        }
        p if p >= 40.0 => "Overall, the company is positioned in the middle range of its sector.",
        p if p >= 20.0 => "Overall, this results in a below-average position within its sector.",
        _ => "Overall, the company ranks in the lower range of its sector.",
    }
}

pub(crate) const fn quality(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent | Rating::VeryHigh => {
            "Profitability is well above the industry average."
        }
        Rating::High => "Profitability is above the industry average.",
        Rating::Solid => "Profitability is in line with the industry average.",
        Rating::Moderate => "Profitability is slightly below the industry average.",
        Rating::Weak => "Profitability is below the industry average.",
        Rating::VeryWeak => "Profitability is well below the industry average.",
    }
}

pub(crate) const fn growth(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent | Rating::VeryHigh => {
            "Revenue and earnings development clearly outpaces most competitors."
        }
        Rating::High => "Revenue and earnings development outpaces most competitors.",
        Rating::Solid => "Revenue and earnings development is in line with the sector average.",
        Rating::Moderate => "Revenue and earnings development lags behind many competitors.",
        Rating::Weak => "Revenue and earnings development is below the sector average.",
        Rating::VeryWeak => {
            "Revenue and earnings development is well below the sector average."
        }
    }
}

pub(crate) const fn stability(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent | Rating::VeryHigh => {
            "Cash flow stability is well above the sector level."
        }
        Rating::High => "Cash flow stability is above the sector level.",
        Rating::Solid => "Cash flow stability is in line with the sector average.",
        Rating::Moderate => "Cash flow stability is slightly below the sector level.",
        Rating::Weak => "Cash flow stability is below the sector level.",
        Rating::VeryWeak => "Cash flow stability is well below the sector level.",
    }
}

pub(crate) const fn valuation(rating: ValuationRating) -> &'static str {
    match rating {
        ValuationRating::VeryFavorable => "The valuation level is well below the industry average.",
        ValuationRating::Favorable => "The valuation level is below the industry average.",
        ValuationRating::Fair => {
            "The valuation level is within the fair range of the industry average."
        }
        ValuationRating::SlightlyElevated => {
            "The valuation level is slightly above the industry average."
        }
        ValuationRating::Elevated => "The valuation level is above the industry average.",
        ValuationRating::Demanding | ValuationRating::VeryDemanding => {
            "The valuation level is well above the industry average."
        }
    }
}
