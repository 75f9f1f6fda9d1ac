use super::views::{StatusCountEntry, TierCountEntry};
use crate::pricing::{
    Confidence, HierarchyViolation, PricedUnitGroup, Signal, TenantDecision, Tier,
};
use crate::review::ReviewStatus;
use serde::Serialize;

/// Roll-up of one ECRI review batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcriBatchSummary {
    pub tenants: usize,
    pub tier_counts: Vec<TierCountEntry>,
    pub total_monthly_increase: f64,
    pub average_increase: f64,
    pub above_street: usize,
    pub seasonal_low_rate: usize,
    pub status_counts: Vec<StatusCountEntry>,
}

impl EcriBatchSummary {
    pub fn from_decisions(decisions: &[TenantDecision]) -> Self {
        let tier_counts = Tier::ordered()
            .into_iter()
            .map(|tier| TierCountEntry {
                tier,
                tier_number: tier.number(),
                tier_label: tier.label(),
                percent: tier.percent(),
                tenants: decisions
                    .iter()
                    .filter(|decision| decision.assigned_tier == tier)
                    .count(),
            })
            .collect();

        let status_counts = ReviewStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: decisions
                    .iter()
                    .filter(|decision| decision.status == status)
                    .count(),
            })
            .collect();

        let total_monthly_increase: f64 = decisions
            .iter()
            .map(|decision| decision.recommended_increase)
            .sum();
        let average_increase = if decisions.is_empty() {
            0.0
        } else {
            total_monthly_increase / decisions.len() as f64
        };

        Self {
            tenants: decisions.len(),
            tier_counts,
            total_monthly_increase,
            average_increase,
            above_street: decisions.iter().filter(|d| d.is_above_street).count(),
            seasonal_low_rate: decisions.iter().filter(|d| d.is_seasonal_low_rate).count(),
            status_counts,
        }
    }

    pub fn tenants_in(&self, tier: Tier) -> usize {
        self.tier_counts
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.tenants)
            .unwrap_or(0)
    }
}

/// Roll-up of one facility's street-rate review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreetRateBatchSummary {
    pub groups: usize,
    pub increases: usize,
    pub decreases: usize,
    pub holds: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub overrides: usize,
    pub hierarchy_violations: usize,
}

impl StreetRateBatchSummary {
    pub fn from_groups(groups: &[PricedUnitGroup], violations: &[HierarchyViolation]) -> Self {
        let direction = |signal: Signal| {
            groups
                .iter()
                .filter(|group| group.recommendation.direction == signal)
                .count()
        };
        let confidence = |level: Confidence| {
            groups
                .iter()
                .filter(|group| group.recommendation.confidence == level)
                .count()
        };

        Self {
            groups: groups.len(),
            increases: direction(Signal::Increase),
            decreases: direction(Signal::Decrease),
            holds: direction(Signal::Hold),
            high_confidence: confidence(Confidence::High),
            medium_confidence: confidence(Confidence::Medium),
            overrides: groups
                .iter()
                .filter(|group| group.override_rate.is_some())
                .count(),
            hierarchy_violations: violations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{build_tenant, OccupancyFraction, TenantPricingRecord};

    #[test]
    fn ecri_summary_counts_tiers_and_increases() {
        let decisions: Vec<TenantDecision> = [
            (50.0, 100.0, 80.0, 0.8),
            (253.0, 154.0, 134.0, 0.9),
            (100.0, 100.0, 100.0, 0.9),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (rent, median, street, occ))| {
            build_tenant(TenantPricingRecord::new(
                format!("t-{index}"),
                "Eastgate Storage",
                format!("A-{index:03}"),
                rent,
                street,
                median,
                OccupancyFraction(occ),
            ))
        })
        .collect();

        let summary = EcriBatchSummary::from_decisions(&decisions);

        assert_eq!(summary.tenants, 3);
        assert_eq!(summary.tenants_in(Tier::Tier1), 1);
        assert_eq!(summary.tenants_in(Tier::Tier2), 1);
        assert_eq!(summary.tenants_in(Tier::Tier3), 0);
        assert_eq!(summary.tenants_in(Tier::Tier4), 1);
        // 20 + 25 + 20
        assert_eq!(summary.total_monthly_increase, 65.0);
        assert_eq!(summary.status_counts[0].count, 3);
    }

    #[test]
    fn empty_batches_summarize_to_zero() {
        let summary = EcriBatchSummary::from_decisions(&[]);
        assert_eq!(summary.average_increase, 0.0);
        assert_eq!(summary.tier_counts.len(), 4);

        let summary = StreetRateBatchSummary::from_groups(&[], &[]);
        assert_eq!(summary.groups, 0);
    }
}
