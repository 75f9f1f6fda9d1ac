//! Street-rate recommendations for vacant unit groups.
//!
//! Occupancy here is a percentage ([`OccupancyPercent`], `0.0..=100.0`). Do not
//! feed the ECRI fraction into these functions; the mode thresholds would
//! silently misfire.
//!
//! [`OccupancyPercent`]: super::OccupancyPercent

mod domain;
mod increments;
mod recommendation;
mod signals;

#[cfg(test)]
mod tests;

pub use domain::{PricedUnitGroup, UnitGroup};
pub use increments::get_base_increment;
pub use recommendation::{recommend_street_rate, Confidence, Recommendation, SignalSet};
pub use signals::{
    get_achieved_signal, get_activity_signal, get_market_signal, get_pricing_mode, PricingMode,
    Signal,
};
