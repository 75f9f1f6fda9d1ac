use super::domain::TenantPricingRecord;
use super::tiering::{compute_tier, Tier};
use crate::pricing::round_half_up;
use crate::review::ReviewStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SEASONAL_TENURE_MONTHS: std::ops::RangeInclusive<u32> = 10..=14;
const SEASONAL_RENT_TO_MEDIAN_CEILING: f64 = 0.50;

/// Engine output for one tenant. Only `status` changes after evaluation,
/// and only through the review workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantDecision {
    #[serde(flatten)]
    pub record: TenantPricingRecord,
    pub trial_rate: f64,
    pub delta_to_median: f64,
    pub tenant_vs_street: f64,
    pub assigned_tier: Tier,
    pub tier_percent: f64,
    pub recommended_new_rent: f64,
    pub recommended_increase: f64,
    pub is_above_street: bool,
    pub is_seasonal_low_rate: bool,
    #[serde(default)]
    pub status: ReviewStatus,
}

impl TenantDecision {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Runs the tiering rules for a tenant and derives the recommended rent.
pub fn build_tenant(record: TenantPricingRecord) -> TenantDecision {
    let assessment = compute_tier(
        record.current_rent,
        record.unit_group_median,
        record.street_rate,
        record.unit_group_occupancy,
    );

    let recommended_new_rent = round_half_up(record.current_rent * (1.0 + assessment.percent));
    let recommended_increase = recommended_new_rent - record.current_rent;
    let is_above_street = recommended_new_rent > record.street_rate;
    let is_seasonal_low_rate = SEASONAL_TENURE_MONTHS.contains(&record.tenure_months)
        && record.current_rent / record.unit_group_median < SEASONAL_RENT_TO_MEDIAN_CEILING;

    debug!(
        tenant = %record.id,
        tier = assessment.tier.number(),
        delta_to_median = assessment.delta_to_median,
        tenant_vs_street = assessment.tenant_vs_street,
        recommended_new_rent,
        "tenant tier assigned"
    );

    TenantDecision {
        trial_rate: assessment.trial_rate,
        delta_to_median: assessment.delta_to_median,
        tenant_vs_street: assessment.tenant_vs_street,
        assigned_tier: assessment.tier,
        tier_percent: assessment.percent,
        recommended_new_rent,
        recommended_increase,
        is_above_street,
        is_seasonal_low_rate,
        status: ReviewStatus::Pending,
        record,
    }
}
