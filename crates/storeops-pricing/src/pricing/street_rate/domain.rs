use super::recommendation::{recommend_street_rate, Recommendation};
use crate::pricing::activity::{ActivityWindow, LeasingActivity};
use crate::pricing::competitors::{compute_comp_avg, CompetitorQuote};
use crate::pricing::hierarchy::AccessType;
use crate::pricing::OccupancyPercent;
use serde::{Deserialize, Serialize};

/// Snapshot of a vacant-unit cohort (same size, climate and access type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitGroup {
    pub id: String,
    pub facility: String,
    #[serde(default)]
    pub name: String,
    pub unit_size: String,
    pub access_type: AccessType,
    pub total_units: u32,
    pub occupied_units: u32,
    pub street_rate: f64,
    pub achieved_median: f64,
    #[serde(default)]
    pub day7: ActivityWindow,
    #[serde(default)]
    pub day14: ActivityWindow,
    #[serde(default)]
    pub day30: ActivityWindow,
    #[serde(default)]
    pub competitors: Vec<CompetitorQuote>,
    /// Display ordering only. Violation checks rank by access type.
    #[serde(default)]
    pub hierarchy_rank: u32,
}

impl UnitGroup {
    pub fn occupancy_pct(&self) -> OccupancyPercent {
        OccupancyPercent::from_counts(self.occupied_units, self.total_units)
    }

    pub fn leasing_activity(&self) -> LeasingActivity {
        LeasingActivity {
            day7: self.day7,
            day14: self.day14,
        }
    }

    /// Display name, falling back to size and access type.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("{} {}", self.unit_size, self.access_type.label())
        } else {
            self.name.clone()
        }
    }

    pub fn price(self) -> PricedUnitGroup {
        PricedUnitGroup::from_group(self)
    }
}

/// A unit group with its engine recommendation and any reviewer override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedUnitGroup {
    #[serde(flatten)]
    pub group: UnitGroup,
    pub comp_weighted_avg: f64,
    pub recommendation: Recommendation,
    #[serde(default)]
    pub override_rate: Option<f64>,
    #[serde(default)]
    pub override_reason: Option<String>,
}

impl PricedUnitGroup {
    pub fn from_group(group: UnitGroup) -> Self {
        let comp_weighted_avg = compute_comp_avg(&group.competitors);
        let recommendation = recommend_street_rate(
            group.street_rate,
            group.achieved_median,
            group.occupancy_pct(),
            &group.unit_size,
            group.total_units,
            &group.leasing_activity(),
            comp_weighted_avg,
        );

        Self {
            group,
            comp_weighted_avg,
            recommendation,
            override_rate: None,
            override_reason: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.group.id
    }

    /// Override rate when one is set, otherwise the recommended rate.
    pub fn final_rate(&self) -> f64 {
        self.override_rate.unwrap_or(self.recommendation.new_rate)
    }

    /// Records a reviewer override. The reason is not validated here; the
    /// review session enforces it.
    pub fn set_override(&mut self, rate: f64, reason: impl Into<String>) {
        self.override_rate = Some(rate);
        self.override_reason = Some(reason.into());
    }

    pub fn clear_override(&mut self) {
        self.override_rate = None;
        self.override_reason = None;
    }
}
