//! Deterministic synthetic data for demos and tests.
//!
//! Nothing here carries business meaning; the engines never call into this
//! module.

use crate::pricing::{
    build_activity_window, AccessType, ActivityWindow, CompetitorQuote, CompetitorTier,
    MonthlySnapshot, OccupancyFraction, TenantPricingRecord, UnitGroup,
};
use chrono::{Months, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

/// Month-end snapshots drifting around `base_occupancy_pct`.
pub fn generate_monthly_history(
    seed: u64,
    start_month: NaiveDate,
    months: u32,
    base_occupancy_pct: f64,
    total_units: u32,
) -> Vec<MonthlySnapshot> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut occupancy = base_occupancy_pct;
    let mut street_rate = 100.0 + f64::from(rng.gen_range(0..60u32));
    let mut history = Vec::with_capacity(months as usize);

    for offset in 0..months {
        let Some(month) = start_month.checked_add_months(Months::new(offset)) else {
            break;
        };

        let drift: f64 = rng.gen_range(-3.0..3.0);
        occupancy = (occupancy + drift).clamp(0.0, 100.0);
        let move_ins = rng.gen_range(0..=(total_units / 8).max(1));
        let move_outs = rng.gen_range(0..=(total_units / 10).max(1));
        if rng.gen_bool(0.3) {
            street_rate += 5.0;
        }

        history.push(MonthlySnapshot {
            month,
            occupancy_pct: (occupancy * 10.0).round() / 10.0,
            move_ins,
            move_outs,
            street_rate,
        });
    }

    history
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub day_offset: u32,
    pub move_ins: u32,
    pub move_outs: u32,
}

/// Spreads a window's totals across `days` so the daily rows sum back to it.
pub fn daily_breakdown(seed: u64, window: &ActivityWindow, days: u32) -> Vec<DailyActivity> {
    let days = days.max(1);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut rows: Vec<DailyActivity> = (0..days)
        .map(|day_offset| DailyActivity {
            day_offset,
            move_ins: 0,
            move_outs: 0,
        })
        .collect();

    for _ in 0..window.move_ins {
        rows[rng.gen_range(0..days) as usize].move_ins += 1;
    }
    for _ in 0..window.move_outs {
        rows[rng.gen_range(0..days) as usize].move_outs += 1;
    }

    rows
}

const DEMO_SIZES: [(&str, u32, f64); 4] = [
    ("5x5", 40, 59.0),
    ("5x10", 60, 89.0),
    ("10x10", 80, 134.0),
    ("10x20", 24, 219.0),
];

const DEMO_ACCESS: [AccessType; 3] = [AccessType::Ground, AccessType::Interior, AccessType::DriveUp];

const DEMO_COMPETITORS: [(&str, CompetitorTier, f64); 3] = [
    ("Stor-All Main St", CompetitorTier::A, 0.8),
    ("Budget Box", CompetitorTier::B, 1.9),
    ("Cornerstone Lockers", CompetitorTier::C, 3.4),
];

/// One facility's worth of unit groups across sizes and access types.
pub fn demo_facility(seed: u64, facility: &str, as_of: NaiveDate) -> Vec<UnitGroup> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut groups = Vec::new();

    for (size, base_units, base_rate) in DEMO_SIZES {
        for (rank, access_type) in DEMO_ACCESS.into_iter().enumerate() {
            let total_units = base_units / 3 + rng.gen_range(0..10u32);
            let occupied_units = rng.gen_range(total_units / 2..=total_units);
            let street_rate = base_rate + f64::from(rng.gen_range(0..25u32)) - 10.0;
            let achieved_median = street_rate + f64::from(rng.gen_range(0..30u32)) - 8.0;

            let competitors = DEMO_COMPETITORS
                .iter()
                .map(|(name, tier, distance)| CompetitorQuote {
                    name: (*name).to_string(),
                    tier: *tier,
                    distance_miles: *distance,
                    rate_for_size: base_rate + f64::from(rng.gen_range(0..30u32)) - 12.0,
                    last_seen: as_of.checked_sub_days(chrono::Days::new(rng.gen_range(0..45))),
                })
                .collect();

            groups.push(UnitGroup {
                id: format!("{}-{}-{}", facility_code(facility), size, access_type.label()),
                facility: facility.to_string(),
                name: format!("{size} {}", access_type.label()),
                unit_size: size.to_string(),
                access_type,
                total_units,
                occupied_units,
                street_rate,
                achieved_median,
                day7: random_window(&mut rng, 4),
                day14: random_window(&mut rng, 7),
                day30: random_window(&mut rng, 12),
                competitors,
                hierarchy_rank: rank as u32 + 1,
            });
        }
    }

    groups
}

/// Occupied-unit roster for an ECRI demo run.
pub fn demo_roster(seed: u64, facility: &str, tenants: u32) -> Vec<TenantPricingRecord> {
    let mut rng = Pcg32::seed_from_u64(seed);

    (0..tenants)
        .map(|index| {
            let (size, _, base_rate) = DEMO_SIZES[rng.gen_range(0..DEMO_SIZES.len())];
            let median = base_rate + f64::from(rng.gen_range(0..20u32));
            let current_rent = (median * rng.gen_range(0.35..1.6)).round();
            let street_rate = base_rate + f64::from(rng.gen_range(0..15u32));
            let occupancy = OccupancyFraction(rng.gen_range(0.6..0.98));

            let mut record = TenantPricingRecord::new(
                format!("{}-T{:04}", facility_code(facility), index + 1),
                facility,
                format!("{size}-{:03}", index + 1),
                current_rent,
                street_rate,
                median,
                occupancy,
            )
            .with_tenure_months(rng.gen_range(6..48));
            record.is_multi_unit = rng.gen_bool(0.1);
            record.is_first_ecri = rng.gen_bool(0.6);
            record
        })
        .collect()
}

fn random_window(rng: &mut Pcg32, max_moves: u32) -> ActivityWindow {
    build_activity_window(rng.gen_range(0..=max_moves), rng.gen_range(0..=max_moves))
}

fn facility_code(facility: &str) -> String {
    let code: String = facility
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    if code.is_empty() {
        "FAC".to_string()
    } else {
        code
    }
}
