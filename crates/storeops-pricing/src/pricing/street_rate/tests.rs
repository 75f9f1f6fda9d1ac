use super::*;
use crate::pricing::activity::{build_activity_window, LeasingActivity};
use crate::pricing::competitors::{CompetitorQuote, CompetitorTier};
use crate::pricing::hierarchy::AccessType;
use crate::pricing::OccupancyPercent;

fn activity(day7_net: i64, day14_net: i64) -> LeasingActivity {
    let window = |net: i64| {
        if net >= 0 {
            build_activity_window(net as u32 + 1, 1)
        } else {
            build_activity_window(1, (-net) as u32 + 1)
        }
    };
    LeasingActivity {
        day7: window(day7_net),
        day14: window(day14_net),
    }
}

fn pct(value: f64) -> OccupancyPercent {
    OccupancyPercent(value)
}

#[test]
fn pricing_mode_boundaries_are_balanced() {
    assert_eq!(get_pricing_mode(pct(92.0)), PricingMode::PriceToActivity);
    assert_eq!(get_pricing_mode(pct(90.0)), PricingMode::Balanced);
    assert_eq!(get_pricing_mode(pct(80.0)), PricingMode::Balanced);
    assert_eq!(get_pricing_mode(pct(75.0)), PricingMode::Balanced);
    assert_eq!(get_pricing_mode(pct(74.9)), PricingMode::PriceToMarket);
    assert_eq!(get_pricing_mode(pct(f64::NAN)), PricingMode::Balanced);
}

#[test]
fn activity_signal_needs_both_windows_to_agree() {
    let signal = |a: i64, b: i64| {
        let activity = activity(a, b);
        get_activity_signal(&activity.day7, &activity.day14)
    };

    assert_eq!(signal(3, 2), Signal::Increase);
    assert_eq!(signal(-1, -4), Signal::Decrease);
    assert_eq!(signal(3, -1), Signal::Hold);
    assert_eq!(signal(0, 5), Signal::Hold);
    assert_eq!(signal(0, 0), Signal::Hold);
}

#[test]
fn market_signal_bands() {
    assert_eq!(get_market_signal(120.0, 100.0), Signal::Decrease);
    assert_eq!(get_market_signal(94.0, 100.0), Signal::Increase);
    assert_eq!(get_market_signal(100.0, 100.0), Signal::Hold);
    assert_eq!(get_market_signal(95.0, 100.0), Signal::Hold);
    assert_eq!(get_market_signal(110.0, 200.0 * 0.5), Signal::Hold);
}

#[test]
fn market_signal_holds_without_competitor_average() {
    for rate in [0.0, 50.0, 10_000.0, f64::INFINITY] {
        assert_eq!(get_market_signal(rate, 0.0), Signal::Hold);
        assert_eq!(get_market_signal(rate, -5.0), Signal::Hold);
    }
}

#[test]
fn achieved_signal_never_decreases() {
    assert_eq!(get_achieved_signal(100.0, 200.0), Signal::Increase);
    assert_eq!(get_achieved_signal(300.0, 100.0), Signal::Hold);
    assert_eq!(get_achieved_signal(85.0, 100.0), Signal::Hold);
    assert_eq!(get_achieved_signal(84.0, 100.0), Signal::Increase);
    assert_eq!(get_achieved_signal(100.0, 0.0), Signal::Hold);
}

#[test]
fn base_increment_switches_on_volume_threshold() {
    assert_eq!(get_base_increment("10x10", 50), 10.0);
    assert_eq!(get_base_increment("10x10", 40), 10.0);
    assert_eq!(get_base_increment("10x10", 39), 7.0);
    assert_eq!(get_base_increment("5x5", 10), 3.0);
    assert_eq!(get_base_increment("10x30", 20), 20.0);
}

#[test]
fn unknown_sizes_use_flat_increment() {
    assert_eq!(get_base_increment("12x40", 5), 10.0);
    assert_eq!(get_base_increment("", 500), 10.0);
}

#[test]
fn high_occupancy_positive_activity_raises_rate() {
    let recommendation =
        recommend_street_rate(134.0, 154.0, pct(92.0), "10x10", 50, &activity(3, 2), 145.0);

    assert_eq!(recommendation.direction, Signal::Increase);
    assert_eq!(recommendation.mode, PricingMode::PriceToActivity);
    assert_eq!(recommendation.amount, 10.0);
    assert_eq!(recommendation.new_rate, 144.0);
    assert_eq!(recommendation.confidence, Confidence::High);
    assert_eq!(recommendation.signals.achieved, Signal::Hold);
    assert!(recommendation.rationale.starts_with("Occupancy 92.0% is above 90%"));
    assert!(recommendation.rationale.ends_with("Raise by $10 to $144."));
}

#[test]
fn achieved_gap_adds_gap_closure_clause() {
    let recommendation =
        recommend_street_rate(120.0, 154.0, pct(92.0), "10x10", 50, &activity(3, 2), 145.0);

    assert_eq!(recommendation.signals.achieved, Signal::Increase);
    assert_eq!(recommendation.direction, Signal::Increase);
    assert_eq!(recommendation.confidence, Confidence::High);
    assert_eq!(recommendation.new_rate, 130.0);
    assert!(recommendation.rationale.contains("gap closure"));
    assert!(recommendation.rationale.contains("$154 by 22%"));
}

#[test]
fn low_occupancy_overpriced_group_lowers_rate() {
    let recommendation =
        recommend_street_rate(130.0, 120.0, pct(60.0), "10x15", 20, &activity(-1, -2), 100.0);

    assert_eq!(recommendation.mode, PricingMode::PriceToMarket);
    assert_eq!(recommendation.direction, Signal::Decrease);
    assert_eq!(recommendation.amount, -8.0);
    assert_eq!(recommendation.new_rate, 122.0);
    assert_eq!(recommendation.confidence, Confidence::High);
    assert!(recommendation.rationale.contains("competitor weighted average $100"));
    assert!(!recommendation.rationale.contains("gap closure"));
}

#[test]
fn conflicting_secondary_signal_is_medium_confidence() {
    // balanced: activity leads, market disagrees
    let recommendation =
        recommend_street_rate(80.0, 80.0, pct(82.0), "5x10", 60, &activity(2, 4), 100.0);

    assert_eq!(recommendation.mode, PricingMode::Balanced);
    assert_eq!(recommendation.signals.market, Signal::Increase);

    let recommendation =
        recommend_street_rate(120.0, 80.0, pct(82.0), "5x10", 60, &activity(2, 4), 100.0);
    assert_eq!(recommendation.signals.market, Signal::Decrease);
    assert_eq!(recommendation.direction, Signal::Increase);
    assert_eq!(recommendation.confidence, Confidence::Medium);
    assert!(recommendation.rationale.contains("market signal DECREASE"));
}

#[test]
fn hold_keeps_current_rate() {
    let recommendation =
        recommend_street_rate(100.0, 100.0, pct(82.0), "10x20", 10, &activity(1, -1), 100.0);

    assert_eq!(recommendation.direction, Signal::Hold);
    assert_eq!(recommendation.amount, 0.0);
    assert_eq!(recommendation.new_rate, 100.0);
    assert!(recommendation.rationale.ends_with("Hold at $100."));
}

#[test]
fn gap_clause_is_suppressed_when_primary_decreases() {
    let recommendation =
        recommend_street_rate(100.0, 200.0, pct(95.0), "10x10", 50, &activity(-2, -3), 0.0);

    assert_eq!(recommendation.signals.achieved, Signal::Increase);
    assert_eq!(recommendation.direction, Signal::Decrease);
    assert_eq!(recommendation.confidence, Confidence::Medium);
    assert!(!recommendation.rationale.contains("gap closure"));
}

#[test]
fn market_mode_without_comps_reports_missing_data() {
    let recommendation =
        recommend_street_rate(100.0, 100.0, pct(50.0), "10x10", 50, &activity(0, 0), 0.0);

    assert_eq!(recommendation.direction, Signal::Hold);
    assert!(recommendation.rationale.contains("no competitor data"));
}

fn unit_group(id: &str, access_type: AccessType, street_rate: f64) -> UnitGroup {
    UnitGroup {
        id: id.to_string(),
        facility: "Eastgate Storage".to_string(),
        name: String::new(),
        unit_size: "10x10".to_string(),
        access_type,
        total_units: 50,
        occupied_units: 46,
        street_rate,
        achieved_median: 154.0,
        day7: build_activity_window(4, 1),
        day14: build_activity_window(5, 3),
        day30: build_activity_window(9, 7),
        competitors: vec![CompetitorQuote {
            name: "Stor-All Main St".to_string(),
            tier: CompetitorTier::A,
            distance_miles: 0.8,
            rate_for_size: 145.0,
            last_seen: None,
        }],
        hierarchy_rank: 1,
    }
}

#[test]
fn priced_group_derives_comp_average_and_recommendation() {
    let priced = unit_group("ug-1", AccessType::Ground, 134.0).price();

    assert_eq!(priced.comp_weighted_avg, 145.0);
    assert_eq!(priced.recommendation.new_rate, 144.0);
    assert_eq!(priced.final_rate(), 144.0);
    assert_eq!(priced.group.display_name(), "10x10 Ground");
}

#[test]
fn override_takes_precedence_over_recommendation() {
    let mut priced = unit_group("ug-1", AccessType::Ground, 134.0).price();
    priced.set_override(139.0, "Competitor Promotion");

    assert_eq!(priced.final_rate(), 139.0);
    assert_eq!(priced.override_reason.as_deref(), Some("Competitor Promotion"));

    priced.clear_override();
    assert_eq!(priced.final_rate(), 144.0);
}

#[test]
fn group_payload_activity_follows_move_counts() {
    let group: UnitGroup = serde_json::from_value(serde_json::json!({
        "id": "ug-9",
        "facility": "Eastgate Storage",
        "unit_size": "10x10",
        "access_type": "Interior",
        "total_units": 50,
        "occupied_units": 48,
        "street_rate": 134.0,
        "achieved_median": 134.0,
        "day7": { "move_ins": 5, "move_outs": 0, "net": -5, "trend": "down" },
        "day14": { "move_ins": 6, "move_outs": 1, "net": -5 }
    }))
    .expect("group payload deserializes");

    assert_eq!(group.day7.net, 5);
    assert_eq!(group.day14.net, 5);

    let priced = group.price();
    assert_eq!(priced.recommendation.mode, PricingMode::PriceToActivity);
    assert_eq!(priced.recommendation.signals.activity, Signal::Increase);
    assert_eq!(priced.recommendation.direction, Signal::Increase);
}

#[test]
fn rationale_reads_as_one_sentence_per_clause() {
    let recommendation =
        recommend_street_rate(120.0, 154.0, pct(92.0), "10x10", 50, &activity(3, 2), 145.0);

    assert_eq!(
        recommendation.rationale,
        "Occupancy 92.0% is above 90%, pricing to activity: 7-day net +3, 14-day net +2. \
         Street rate trails achieved median $154 by 22%, supporting gap closure. \
         Raise by $10 to $130."
    );
}
