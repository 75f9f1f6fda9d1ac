use super::increments::get_base_increment;
use super::signals::{
    get_achieved_signal, get_activity_signal, get_market_signal, get_pricing_mode, PricingMode,
    Signal,
};
use crate::pricing::activity::LeasingActivity;
use crate::pricing::{round_half_up, OccupancyPercent};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

/// The three named inputs behind a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub activity: Signal,
    pub market: Signal,
    pub achieved: Signal,
}

/// Advisory street-rate action for one unit group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub direction: Signal,
    /// Signed dollar change: positive for increases, negative for decreases.
    pub amount: f64,
    pub new_rate: f64,
    pub confidence: Confidence,
    pub rationale: String,
    pub mode: PricingMode,
    pub signals: SignalSet,
}

pub fn recommend_street_rate(
    street_rate: f64,
    achieved_median: f64,
    occupancy: OccupancyPercent,
    unit_size: &str,
    total_units: u32,
    activity: &LeasingActivity,
    comp_weighted_avg: f64,
) -> Recommendation {
    let mode = get_pricing_mode(occupancy);
    let signals = SignalSet {
        activity: get_activity_signal(&activity.day7, &activity.day14),
        market: get_market_signal(street_rate, comp_weighted_avg),
        achieved: get_achieved_signal(street_rate, achieved_median),
    };

    let (primary, secondary) = match mode {
        PricingMode::PriceToActivity => (signals.activity, signals.achieved),
        PricingMode::PriceToMarket => (signals.market, signals.activity),
        PricingMode::Balanced => (signals.activity, signals.market),
    };

    let confidence = if primary == secondary || secondary == Signal::Hold {
        Confidence::High
    } else {
        Confidence::Medium
    };

    let base_increment = get_base_increment(unit_size, total_units);
    let amount = match primary {
        Signal::Increase => base_increment,
        Signal::Decrease => -base_increment,
        Signal::Hold => 0.0,
    };
    let new_rate = street_rate + amount;

    let rationale = build_rationale(RationaleContext {
        mode,
        primary,
        signals,
        occupancy,
        activity,
        street_rate,
        achieved_median,
        comp_weighted_avg,
        amount,
        new_rate,
    });

    debug!(
        unit_size,
        mode = mode.label(),
        direction = primary.label(),
        confidence = confidence.label(),
        amount,
        new_rate,
        "street rate recommendation computed"
    );

    Recommendation {
        direction: primary,
        amount,
        new_rate,
        confidence,
        rationale,
        mode,
        signals,
    }
}

struct RationaleContext<'a> {
    mode: PricingMode,
    primary: Signal,
    signals: SignalSet,
    occupancy: OccupancyPercent,
    activity: &'a LeasingActivity,
    street_rate: f64,
    achieved_median: f64,
    comp_weighted_avg: f64,
    amount: f64,
    new_rate: f64,
}

fn build_rationale(ctx: RationaleContext<'_>) -> String {
    let occupancy = ctx.occupancy.value();
    let day7 = ctx.activity.day7.net;
    let day14 = ctx.activity.day14.net;

    let mut text = match ctx.mode {
        PricingMode::PriceToActivity => format!(
            "Occupancy {occupancy:.1}% is above 90%, pricing to activity: 7-day net {day7:+}, 14-day net {day14:+}."
        ),
        PricingMode::PriceToMarket if ctx.comp_weighted_avg > 0.0 => {
            let spread =
                round_half_up((ctx.street_rate - ctx.comp_weighted_avg) / ctx.comp_weighted_avg * 100.0);
            format!(
                "Occupancy {occupancy:.1}% is below 75%, pricing to market: street ${} vs competitor weighted average ${} ({spread:+}%).",
                ctx.street_rate, ctx.comp_weighted_avg
            )
        }
        PricingMode::PriceToMarket => format!(
            "Occupancy {occupancy:.1}% is below 75%, pricing to market: no competitor data."
        ),
        PricingMode::Balanced => format!(
            "Occupancy {occupancy:.1}% is balanced: 7-day net {day7:+}, 14-day net {day14:+}, market signal {}.",
            ctx.signals.market.label()
        ),
    };

    if ctx.signals.achieved == Signal::Increase && ctx.primary != Signal::Decrease {
        let gap = round_half_up(
            (ctx.achieved_median - ctx.street_rate) / ctx.achieved_median * 100.0,
        );
        text.push_str(&format!(
            " Street rate trails achieved median ${} by {gap}%, supporting gap closure.",
            ctx.achieved_median
        ));
    }

    let action = match ctx.primary {
        Signal::Increase => format!(" Raise by ${} to ${}.", ctx.amount, ctx.new_rate),
        Signal::Decrease => format!(" Lower by ${} to ${}.", -ctx.amount, ctx.new_rate),
        Signal::Hold => format!(" Hold at ${}.", ctx.new_rate),
    };
    text.push_str(&action);

    text
}
