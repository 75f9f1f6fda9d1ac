use super::ecri::{build_tenant, TenantDecision, TenantPricingRecord};
use super::hierarchy::{check_hierarchy_violations, HierarchyViolation};
use super::street_rate::{PricedUnitGroup, UnitGroup};
use tracing::info;

/// Evaluates every tenant independently; output order matches input order.
pub fn evaluate_roster(records: Vec<TenantPricingRecord>) -> Vec<TenantDecision> {
    let decisions: Vec<TenantDecision> = records.into_iter().map(build_tenant).collect();
    info!(tenants = decisions.len(), "ecri roster evaluated");
    decisions
}

/// Prices every group of one facility, then runs the hierarchy check once all
/// groups are priced.
pub fn price_facility(groups: Vec<UnitGroup>) -> (Vec<PricedUnitGroup>, Vec<HierarchyViolation>) {
    let priced: Vec<PricedUnitGroup> = groups.into_iter().map(UnitGroup::price).collect();
    let violations = check_hierarchy_violations(&priced);
    info!(
        groups = priced.len(),
        violations = violations.len(),
        "facility street rates priced"
    );
    (priced, violations)
}
