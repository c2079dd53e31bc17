//! Appraise: manual quality evaluator for AI background-removal results
//!
//! This library scores a reviewer's 1-5 quality ratings of original/processed
//! image pairs and produces an aggregate report with a narrative executive
//! summary. Rendering is left to the reporter layer; the analyzer itself is a
//! pure function of the collected ratings.

pub mod analyzer;
pub mod catalog;
pub mod reporter;
pub mod session;

use serde::{Deserialize, Serialize};

/// One step on the 1-5 quality scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    Unusable = 1,
    PartiallyViable = 2,
    ModeratelyFunctional = 3,
    NearProductionReady = 4,
    ProductionReady = 5,
}

/// Rating value outside the fixed 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {0} is outside the 1-5 quality scale")]
pub struct InvalidTier(pub u8);

impl Tier {
    /// All tiers, ascending by value
    pub const ALL: [Tier; 5] = [
        Tier::Unusable,
        Tier::PartiallyViable,
        Tier::ModeratelyFunctional,
        Tier::NearProductionReady,
        Tier::ProductionReady,
    ];

    /// Numeric value (1-5)
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Result<Self, InvalidTier> {
        match value {
            1 => Ok(Tier::Unusable),
            2 => Ok(Tier::PartiallyViable),
            3 => Ok(Tier::ModeratelyFunctional),
            4 => Ok(Tier::NearProductionReady),
            5 => Ok(Tier::ProductionReady),
            other => Err(InvalidTier(other)),
        }
    }

    /// Short label shown next to the rating value
    pub fn label(self) -> &'static str {
        match self {
            Tier::Unusable => "Unusable",
            Tier::PartiallyViable => "Partially Viable",
            Tier::ModeratelyFunctional => "Moderately Functional",
            Tier::NearProductionReady => "Near Production Ready",
            Tier::ProductionReady => "Production Ready",
        }
    }

    /// Reviewer-facing description of what the tier means
    pub fn description(self) -> &'static str {
        match self {
            Tier::Unusable => {
                "Major issues with structure, style, identity, or overall quality. Not suitable for use."
            }
            Tier::PartiallyViable => {
                "Useful as a concept or direction, but not for final use. Significant fixes required."
            }
            Tier::ModeratelyFunctional => {
                "Largely usable, with moderate fixes needed. More efficient than starting from scratch."
            }
            Tier::NearProductionReady => {
                "Only minor adjustments needed, such as light cleanup or retouching."
            }
            Tier::ProductionReady => "No further edits needed. Ready for immediate use.",
        }
    }

    /// Display color (hex) used for chart labels
    pub fn color(self) -> &'static str {
        match self {
            Tier::Unusable => "#dc2626",
            Tier::PartiallyViable => "#ea580c",
            Tier::ModeratelyFunctional => "#ca8a04",
            Tier::NearProductionReady => "#2563eb",
            Tier::ProductionReady => "#16a34a",
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::from_value(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.value()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.value(), self.label())
    }
}

/// One original/processed image pair subject to rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePair {
    /// Catalogue identifier
    pub id: u32,
    /// Display name shown during the rating flow
    pub name: String,
    /// Reference to the original image resource
    pub original: String,
    /// Reference to the background-removal result
    pub processed: String,
}

/// Frequency distribution of ratings over the five tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// Count of ratings per tier, index 0 = tier 1
    counts: [u32; 5],
    /// Share of ratings per tier as a percentage of all ratings
    percents: [f64; 5],
}

impl Distribution {
    /// Tally a sequence of ratings. Guards the zero-length case so that an
    /// empty slice yields all-zero percentages rather than NaN.
    pub fn tally(scores: &[Tier]) -> Self {
        let mut counts = [0u32; 5];
        for score in scores {
            counts[(score.value() - 1) as usize] += 1;
        }
        let total = scores.len();
        let mut percents = [0.0f64; 5];
        if total > 0 {
            for (i, &count) in counts.iter().enumerate() {
                percents[i] = count as f64 / total as f64 * 100.0;
            }
        }
        Self { counts, percents }
    }

    /// Number of ratings at the given tier
    pub fn count(&self, tier: Tier) -> u32 {
        self.counts[(tier.value() - 1) as usize]
    }

    /// Share of ratings at the given tier, in percent
    pub fn percent(&self, tier: Tier) -> f64 {
        self.percents[(tier.value() - 1) as usize]
    }

    /// Total ratings tallied
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Combined share of tiers 4 and 5, in percent
    pub fn high_quality_share(&self) -> f64 {
        self.percent(Tier::NearProductionReady) + self.percent(Tier::ProductionReady)
    }

    /// Combined share of tiers 1 and 2, in percent
    pub fn low_quality_share(&self) -> f64 {
        self.percent(Tier::Unusable) + self.percent(Tier::PartiallyViable)
    }
}

/// Aggregate report over a completed evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Raw ratings in item order
    pub scores: Vec<Tier>,
    /// Arithmetic mean of the ratings
    pub average: f64,
    /// Mean expressed as a percentage of the maximum tier (5)
    pub percentage: f64,
    /// Whether the average meets the 4.0 production-readiness threshold
    pub passes: bool,
    /// Frequency distribution over the five tiers
    pub distribution: Distribution,
    /// Generated executive summary
    pub summary: String,
    /// Total items in the catalogue under evaluation
    pub total_items: usize,
}
