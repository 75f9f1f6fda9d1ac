use super::round_half_up;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quality grade assigned to a competing facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompetitorTier {
    A,
    B,
    C,
    D,
}

impl CompetitorTier {
    /// Weight used by the street-rate aggregator. Grade D is an ECRI-only grade
    /// and has no street-rate weight.
    pub const fn street_rate_weight(self) -> Option<f64> {
        match self {
            Self::A => Some(1.0),
            Self::B => Some(0.6),
            Self::C => Some(0.25),
            Self::D => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Competitor quote for the size of a vacant unit group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorQuote {
    pub name: String,
    pub tier: CompetitorTier,
    #[serde(default)]
    pub distance_miles: f64,
    pub rate_for_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<NaiveDate>,
}

impl CompetitorQuote {
    /// Display helper only; staleness never affects the weighted average.
    pub fn is_stale(&self, as_of: NaiveDate, max_age_days: i64) -> bool {
        match self.last_seen {
            Some(seen) => (as_of - seen).num_days() > max_age_days,
            None => true,
        }
    }
}

/// Competitor quote attached to an ECRI tenant, carrying an explicit weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcriCompetitor {
    pub name: String,
    pub quality: CompetitorTier,
    #[serde(default)]
    pub distance_miles: f64,
    pub rate: f64,
    pub weight: f64,
}

/// Tier-weighted mean of `rate_for_size`, rounded to whole currency units.
///
/// Returns `0.0` when there are no weighted quotes.
pub fn compute_comp_avg(competitors: &[CompetitorQuote]) -> f64 {
    let (weighted_sum, total_weight) = competitors
        .iter()
        .filter_map(|quote| {
            quote
                .tier
                .street_rate_weight()
                .map(|weight| (quote.rate_for_size * weight, weight))
        })
        .fold((0.0, 0.0), |(sum, weights), (value, weight)| {
            (sum + value, weights + weight)
        });

    if total_weight == 0.0 {
        return 0.0;
    }

    round_half_up(weighted_sum / total_weight)
}
