//! Access-type price ordering checks across unit groups of one facility.

use super::street_rate::PricedUnitGroup;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a unit is reached. Lower rank is better access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    Ground,
    Interior,
    #[serde(rename = "Drive-Up")]
    DriveUp,
    #[serde(other)]
    Other,
}

impl AccessType {
    pub const fn rank(self) -> u8 {
        match self {
            Self::Ground => 1,
            Self::Interior => 2,
            Self::DriveUp => 3,
            Self::Other => 99,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::Interior => "Interior",
            Self::DriveUp => "Drive-Up",
            Self::Other => "Other",
        }
    }
}

/// A worse-access group priced above a better-access group of the same size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyViolation {
    pub unit_size: String,
    pub violating_group_id: String,
    pub violating_group_name: String,
    pub violating_access: AccessType,
    pub violating_rate: f64,
    pub reference_group_id: String,
    pub reference_group_name: String,
    pub reference_access: AccessType,
    pub reference_rate: f64,
    pub rationale: String,
}

/// Flags every same-size pair where the better-access group is strictly
/// cheaper than the worse-access group. The worse-access group is reported as
/// the violator. Prices are effective prices (override, else recommendation).
///
/// Groups are compared only by `unit_size`; callers pass one facility at a
/// time. Output order follows the first appearance of each size, then pair
/// order within the size.
pub fn check_hierarchy_violations(groups: &[PricedUnitGroup]) -> Vec<HierarchyViolation> {
    let mut buckets: Vec<(&str, Vec<&PricedUnitGroup>)> = Vec::new();
    for group in groups {
        let size = group.group.unit_size.as_str();
        match buckets.iter_mut().find(|(bucket_size, _)| *bucket_size == size) {
            Some((_, members)) => members.push(group),
            None => buckets.push((size, vec![group])),
        }
    }

    let mut violations = Vec::new();
    for (_, members) in buckets.iter().filter(|(_, members)| members.len() > 1) {
        for (index, first) in members.iter().enumerate() {
            for second in &members[index + 1..] {
                if let Some(violation) = compare(first, second) {
                    violations.push(violation);
                }
                if let Some(violation) = compare(second, first) {
                    violations.push(violation);
                }
            }
        }
    }

    violations
}

fn compare(better: &PricedUnitGroup, worse: &PricedUnitGroup) -> Option<HierarchyViolation> {
    let better_access = better.group.access_type;
    let worse_access = worse.group.access_type;
    let better_rate = better.final_rate();
    let worse_rate = worse.final_rate();

    if !(better_access.rank() < worse_access.rank() && better_rate < worse_rate) {
        return None;
    }

    let unit_size = worse.group.unit_size.clone();
    let rationale = format!(
        "{} {} (${}) is priced above {} {} (${}); better access must not be cheaper.",
        unit_size,
        worse_access.label(),
        worse_rate,
        unit_size,
        better_access.label(),
        better_rate
    );

    warn!(
        violating = %worse.group.id,
        reference = %better.group.id,
        unit_size = %unit_size,
        "hierarchy violation detected"
    );

    Some(HierarchyViolation {
        unit_size,
        violating_group_id: worse.group.id.clone(),
        violating_group_name: worse.group.display_name(),
        violating_access: worse_access,
        violating_rate: worse_rate,
        reference_group_id: better.group.id.clone(),
        reference_group_name: better.group.display_name(),
        reference_access: better_access,
        reference_rate: better_rate,
        rationale,
    })
}
