pub mod activity;
mod batch;
pub mod competitors;
pub mod ecri;
pub mod hierarchy;
pub mod street_rate;

pub use activity::{
    build_activity_window, ninety_day_trend, ActivityWindow, LeasingActivity, MonthlySnapshot,
    Trend,
};
pub use batch::{evaluate_roster, price_facility};
pub use competitors::{compute_comp_avg, CompetitorQuote, CompetitorTier, EcriCompetitor};
pub use ecri::{
    build_tenant, compute_tier, RentIncrease, TenantDecision, TenantPricingRecord, Tier,
    TierAssessment,
};
pub use hierarchy::{check_hierarchy_violations, AccessType, HierarchyViolation};
pub use street_rate::{
    get_achieved_signal, get_activity_signal, get_base_increment, get_market_signal,
    get_pricing_mode, recommend_street_rate, Confidence, PricedUnitGroup, PricingMode,
    Recommendation, Signal, SignalSet, UnitGroup,
};

use serde::{Deserialize, Serialize};

/// Occupancy on a `0.0..=1.0` scale. Only the ECRI engine accepts this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupancyFraction(pub f64);

impl OccupancyFraction {
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Occupancy on a `0.0..=100.0` scale. Only the street-rate engine accepts this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupancyPercent(pub f64);

impl OccupancyPercent {
    pub const fn value(self) -> f64 {
        self.0
    }

    /// `occupied / total * 100` with IEEE semantics; an empty group yields `NaN`.
    pub fn from_counts(occupied_units: u32, total_units: u32) -> Self {
        Self(f64::from(occupied_units) / f64::from(total_units) * 100.0)
    }
}

/// Rounds half-way values toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Non-finite values are returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
