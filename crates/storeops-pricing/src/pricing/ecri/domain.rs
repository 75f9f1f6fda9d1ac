use super::super::competitors::EcriCompetitor;
use super::super::OccupancyFraction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A prior rent increase on the tenant's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentIncrease {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Snapshot of one occupied unit at the start of a review cycle.
///
/// Records are built fresh every cycle and are never mutated by the engine;
/// the derived values live on [`TenantDecision`](super::TenantDecision).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantPricingRecord {
    pub id: String,
    pub facility: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    pub current_rent: f64,
    pub street_rate: f64,
    pub unit_group_median: f64,
    pub unit_group_occupancy: OccupancyFraction,
    #[serde(default)]
    pub tenure_months: u32,
    #[serde(default)]
    pub is_multi_unit: bool,
    #[serde(default)]
    pub is_lease_up: bool,
    #[serde(default = "default_first_ecri")]
    pub is_first_ecri: bool,
    #[serde(default)]
    pub previous_increases: Vec<RentIncrease>,
    #[serde(default)]
    pub competitors: Vec<EcriCompetitor>,
}

fn default_first_ecri() -> bool {
    true
}

impl TenantPricingRecord {
    /// Builds a record with the default classification flags and empty history.
    pub fn new(
        id: impl Into<String>,
        facility: impl Into<String>,
        unit: impl Into<String>,
        current_rent: f64,
        street_rate: f64,
        unit_group_median: f64,
        unit_group_occupancy: OccupancyFraction,
    ) -> Self {
        Self {
            id: id.into(),
            facility: facility.into(),
            unit: unit.into(),
            tenant_name: None,
            current_rent,
            street_rate,
            unit_group_median,
            unit_group_occupancy,
            tenure_months: 0,
            is_multi_unit: false,
            is_lease_up: false,
            is_first_ecri: default_first_ecri(),
            previous_increases: Vec::new(),
            competitors: Vec::new(),
        }
    }

    pub fn with_tenure_months(mut self, tenure_months: u32) -> Self {
        self.tenure_months = tenure_months;
        self
    }

    pub fn last_increase(&self) -> Option<&RentIncrease> {
        self.previous_increases.iter().max_by_key(|increase| increase.date)
    }
}
