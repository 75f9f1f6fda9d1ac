use crate::pricing::Tier;
use crate::review::ReviewStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCountEntry {
    pub tier: Tier,
    pub tier_number: u8,
    pub tier_label: &'static str,
    pub percent: f64,
    pub tenants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: ReviewStatus,
    pub status_label: &'static str,
    pub count: usize,
}
