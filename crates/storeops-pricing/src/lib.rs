//! Pricing decision engines for a self-storage operations console.
//!
//! Two engines live under [`pricing`]:
//!
//! * the existing-customer rate increase (ECRI) tiering engine, which works on
//!   occupancy expressed as a **fraction** (`0.0..=1.0`), and
//! * the vacant-unit street-rate engine, which works on occupancy expressed as
//!   a **percentage** (`0.0..=100.0`).
//!
//! The two scales are kept as separate types ([`pricing::OccupancyFraction`] and
//! [`pricing::OccupancyPercent`]) because every threshold constant was tuned
//! against one scale or the other.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod import;
pub mod pricing;
pub mod report;
pub mod review;
pub mod telemetry;
