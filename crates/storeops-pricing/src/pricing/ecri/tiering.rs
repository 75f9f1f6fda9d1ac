use super::super::OccupancyFraction;
use serde::{Deserialize, Serialize};

/// Multiplier applied to current rent to test where a tenant would land.
const TRIAL_UPLIFT: f64 = 1.20;

const CATCH_UP_DELTA_CEILING: f64 = -0.20;
const CATCH_UP_MIN_OCCUPANCY: f64 = 0.75;
const PREMIUM_DELTA_FLOOR: f64 = 0.75;
const ABOVE_MARKET_TVS_FLOOR: f64 = 0.15;
const ABOVE_MARKET_DELTA_FLOOR: f64 = 0.15;

/// Rent increase tier, ordered by rule priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Deeply under the group median in a healthy-occupancy group.
    Tier1,
    /// Already far above the group median.
    Tier2,
    /// Above both street rate and median.
    Tier3,
    Tier4,
}

impl Tier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Tier1, Self::Tier2, Self::Tier3, Self::Tier4]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
            Self::Tier4 => 4,
        }
    }

    pub const fn percent(self) -> f64 {
        match self {
            Self::Tier1 => 0.40,
            Self::Tier2 => 0.10,
            Self::Tier3 => 0.15,
            Self::Tier4 => 0.20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "Aggressive Catch-Up",
            Self::Tier2 => "Conservative Premium",
            Self::Tier3 => "Above-Market Moderate",
            Self::Tier4 => "Baseline",
        }
    }
}

/// Intermediate ratios and the tier they resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierAssessment {
    pub tier: Tier,
    pub percent: f64,
    pub trial_rate: f64,
    pub delta_to_median: f64,
    pub tenant_vs_street: f64,
}

/// Classifies a tenant into a rent increase tier.
///
/// Rules are evaluated first-match-wins and every comparison is strict, so a
/// ratio sitting exactly on a threshold falls through to the next rule. Inputs
/// are not validated: a zero denominator produces an infinity that takes part
/// in the comparisons, and any `NaN` fails every rule and lands on
/// [`Tier::Tier4`].
pub fn compute_tier(
    current_rent: f64,
    unit_group_median: f64,
    street_rate: f64,
    unit_group_occupancy: OccupancyFraction,
) -> TierAssessment {
    let trial_rate = current_rent * TRIAL_UPLIFT;
    let delta_to_median = (trial_rate - unit_group_median) / unit_group_median;
    let tenant_vs_street = (current_rent - street_rate) / street_rate;
    let occupancy = unit_group_occupancy.value();

    let tier = if delta_to_median < CATCH_UP_DELTA_CEILING && occupancy > CATCH_UP_MIN_OCCUPANCY {
        Tier::Tier1
    } else if delta_to_median > PREMIUM_DELTA_FLOOR {
        Tier::Tier2
    } else if tenant_vs_street > ABOVE_MARKET_TVS_FLOOR
        && delta_to_median > ABOVE_MARKET_DELTA_FLOOR
    {
        Tier::Tier3
    } else {
        Tier::Tier4
    };

    TierAssessment {
        tier,
        percent: tier.percent(),
        trial_rate,
        delta_to_median,
        tenant_vs_street,
    }
}
