use super::*;
use crate::pricing::OccupancyFraction;
use crate::review::ReviewStatus;

fn occupancy(value: f64) -> OccupancyFraction {
    OccupancyFraction(value)
}

fn tenant(current_rent: f64, median: f64, street_rate: f64, occ: f64) -> TenantPricingRecord {
    TenantPricingRecord::new(
        "t-100",
        "Eastgate Storage",
        "B-114",
        current_rent,
        street_rate,
        median,
        occupancy(occ),
    )
}

#[test]
fn trial_rate_is_twenty_percent_over_current_rent() {
    for rent in [0.0, 49.0, 87.5, 253.0, 1_000.0] {
        let assessment = compute_tier(rent, 100.0, 100.0, occupancy(0.8));
        assert_eq!(assessment.trial_rate, rent * 1.20);
    }
}

#[test]
fn deeply_under_median_with_healthy_occupancy_is_tier_one() {
    let assessment = compute_tier(50.0, 100.0, 80.0, occupancy(0.80));

    assert_eq!(assessment.tier, Tier::Tier1);
    assert_eq!(assessment.percent, 0.40);
    assert!((assessment.delta_to_median + 0.40).abs() < 1e-9);
}

#[test]
fn far_above_median_is_tier_two_even_when_above_street() {
    let assessment = compute_tier(253.0, 154.0, 134.0, occupancy(0.90));

    assert_eq!(assessment.tier, Tier::Tier2);
    assert_eq!(assessment.percent, 0.10);
    assert!((assessment.delta_to_median - 0.971).abs() < 1e-3);
    assert!(assessment.tenant_vs_street > 0.15, "tier 3 condition also holds");
}

#[test]
fn tier_three_requires_both_ratios() {
    let both = compute_tier(115.0, 100.0, 50.0, occupancy(0.5));
    assert_eq!(both.tier, Tier::Tier3);
    assert_eq!(both.percent, 0.15);

    let street_only = compute_tier(115.0, 140.0, 50.0, occupancy(0.5));
    assert!(street_only.delta_to_median < 0.15);
    assert_eq!(street_only.tier, Tier::Tier4);

    let median_only = compute_tier(115.0, 100.0, 115.0, occupancy(0.5));
    assert_eq!(median_only.tenant_vs_street, 0.0);
    assert_eq!(median_only.tier, Tier::Tier4);
}

#[test]
fn under_median_with_weak_occupancy_is_baseline() {
    let assessment = compute_tier(50.0, 100.0, 80.0, occupancy(0.60));
    assert_eq!(assessment.tier, Tier::Tier4);
    assert_eq!(assessment.percent, 0.20);
}

#[test]
fn boundary_delta_of_minus_twenty_percent_is_not_tier_one() {
    let assessment = compute_tier(100.0, 150.0, 100.0, occupancy(0.9));
    assert_eq!(assessment.delta_to_median, -0.20);
    assert_eq!(assessment.tier, Tier::Tier4);
}

#[test]
fn boundary_occupancy_of_seventy_five_percent_is_not_tier_one() {
    let assessment = compute_tier(50.0, 100.0, 80.0, occupancy(0.75));
    assert_eq!(assessment.tier, Tier::Tier4);
}

#[test]
fn boundary_delta_of_seventy_five_percent_is_not_tier_two() {
    let assessment = compute_tier(35.0, 24.0, 35.0, occupancy(0.9));
    assert_eq!(assessment.delta_to_median, 0.75);
    assert_eq!(assessment.tier, Tier::Tier4);
}

#[test]
fn boundary_ratios_of_fifteen_percent_are_not_tier_three() {
    let street_boundary = compute_tier(115.0, 100.0, 100.0, occupancy(0.9));
    assert_eq!(street_boundary.tenant_vs_street, 0.15);
    assert_eq!(street_boundary.tier, Tier::Tier4);

    let median_boundary = compute_tier(115.0, 120.0, 50.0, occupancy(0.9));
    assert_eq!(median_boundary.delta_to_median, 0.15);
    assert_eq!(median_boundary.tier, Tier::Tier4);
}

#[test]
fn nan_inputs_fall_through_to_baseline() {
    let assessment = compute_tier(f64::NAN, 100.0, 100.0, occupancy(0.9));
    assert!(assessment.trial_rate.is_nan());
    assert_eq!(assessment.tier, Tier::Tier4);

    let occupancy_nan = compute_tier(50.0, 100.0, 80.0, occupancy(f64::NAN));
    assert_eq!(occupancy_nan.tier, Tier::Tier4);
}

#[test]
fn zero_median_produces_infinity_and_premium_tier() {
    let assessment = compute_tier(100.0, 0.0, 100.0, occupancy(0.9));
    assert_eq!(assessment.delta_to_median, f64::INFINITY);
    assert_eq!(assessment.tier, Tier::Tier2);
}

#[test]
fn zero_street_rate_and_zero_rent_still_classify() {
    let zero_street = compute_tier(100.0, 100.0, 0.0, occupancy(0.9));
    assert_eq!(zero_street.tenant_vs_street, f64::INFINITY);
    assert_eq!(zero_street.tier, Tier::Tier3);

    let all_zero = compute_tier(0.0, 0.0, 0.0, occupancy(0.0));
    assert!(all_zero.delta_to_median.is_nan());
    assert_eq!(all_zero.tier, Tier::Tier4);
}

#[test]
fn tier_assignment_is_total_over_awkward_inputs() {
    let values = [
        -100.0,
        -0.2,
        0.0,
        0.15,
        0.75,
        1.0,
        100.0,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];

    for rent in values {
        for median in values {
            for street in values {
                let tier = compute_tier(rent, median, street, occupancy(0.8)).tier;
                assert!((1..=4).contains(&tier.number()));
            }
        }
    }
}

#[test]
fn build_tenant_baseline_scenario() {
    let decision = build_tenant(tenant(100.0, 100.0, 100.0, 0.9));

    assert_eq!(decision.assigned_tier, Tier::Tier4);
    assert_eq!(decision.recommended_new_rent, 120.0);
    assert_eq!(decision.recommended_increase, 20.0);
    assert!(decision.is_above_street);
    assert_eq!(decision.status, ReviewStatus::Pending);
}

#[test]
fn build_tenant_rounds_recommended_rent() {
    let decision = build_tenant(tenant(253.0, 154.0, 134.0, 0.9));
    assert_eq!(decision.assigned_tier, Tier::Tier2);
    assert_eq!(decision.recommended_new_rent, 278.0);
    assert_eq!(
        decision.recommended_increase,
        decision.recommended_new_rent - decision.record.current_rent
    );
}

#[test]
fn above_street_flag_is_strict() {
    let at_street = build_tenant(tenant(100.0, 100.0, 120.0, 0.9));
    assert_eq!(at_street.recommended_new_rent, 120.0);
    assert!(!at_street.is_above_street);

    let over_street = build_tenant(tenant(100.0, 100.0, 119.0, 0.9));
    assert!(over_street.is_above_street);
}

#[test]
fn seasonal_low_rate_uses_inclusive_tenure_and_strict_ratio() {
    let low = |months: u32, rent: f64| {
        build_tenant(tenant(rent, 100.0, 100.0, 0.5).with_tenure_months(months)).is_seasonal_low_rate
    };

    assert!(low(10, 40.0));
    assert!(low(12, 40.0));
    assert!(low(14, 40.0));
    assert!(!low(9, 40.0));
    assert!(!low(15, 40.0));
    assert!(!low(12, 50.0), "ratio of exactly 0.50 is not low");
}

#[test]
fn record_defaults_apply_when_deserializing() {
    let record: TenantPricingRecord = serde_json::from_value(serde_json::json!({
        "id": "t-1",
        "facility": "Eastgate Storage",
        "unit": "A-001",
        "current_rent": 80.0,
        "street_rate": 99.0,
        "unit_group_median": 95.0,
        "unit_group_occupancy": 0.88
    }))
    .expect("record deserializes");

    assert!(record.is_first_ecri);
    assert!(!record.is_multi_unit);
    assert!(!record.is_lease_up);
    assert!(record.previous_increases.is_empty());
    assert!(record.competitors.is_empty());
    assert_eq!(record.unit_group_occupancy, OccupancyFraction(0.88));
}

#[test]
fn caller_supplied_flags_override_defaults() {
    let record: TenantPricingRecord = serde_json::from_value(serde_json::json!({
        "id": "t-2",
        "facility": "Eastgate Storage",
        "unit": "A-002",
        "current_rent": 80.0,
        "street_rate": 99.0,
        "unit_group_median": 95.0,
        "unit_group_occupancy": 0.88,
        "is_first_ecri": false,
        "is_multi_unit": true,
        "previous_increases": [{ "date": "2024-06-01", "amount": 12.0 }]
    }))
    .expect("record deserializes");

    assert!(!record.is_first_ecri);
    assert!(record.is_multi_unit);
    assert_eq!(
        record.last_increase().map(|increase| increase.amount),
        Some(12.0)
    );
}
