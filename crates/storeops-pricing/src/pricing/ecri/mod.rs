//! Existing-customer rate increase (ECRI) tiering.
//!
//! Occupancy on this side of the crate is a fraction ([`OccupancyFraction`]),
//! not a percentage. The tier thresholds below are calibrated on that scale.
//!
//! [`OccupancyFraction`]: super::OccupancyFraction

mod decision;
mod domain;
mod tiering;

#[cfg(test)]
mod tests;

pub use decision::{build_tenant, TenantDecision};
pub use domain::{RentIncrease, TenantPricingRecord};
pub use tiering::{compute_tier, Tier, TierAssessment};
