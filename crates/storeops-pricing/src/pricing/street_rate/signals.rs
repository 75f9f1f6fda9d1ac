use super::super::activity::ActivityWindow;
use super::super::OccupancyPercent;
use serde::{Deserialize, Serialize};

const ACTIVITY_MODE_FLOOR: f64 = 90.0;
const MARKET_MODE_CEILING: f64 = 75.0;
const MARKET_PREMIUM_CEILING: f64 = 1.10;
const MARKET_DISCOUNT_FLOOR: f64 = 0.95;
const ACHIEVED_GAP_FLOOR: f64 = 0.85;

/// Direction suggested by a single signal, and by the final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Increase,
    Decrease,
    Hold,
}

impl Signal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increase => "INCREASE",
            Self::Decrease => "DECREASE",
            Self::Hold => "HOLD",
        }
    }
}

/// Which signal source leads the recommendation for a unit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    PriceToActivity,
    PriceToMarket,
    Balanced,
}

impl PricingMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceToActivity => "PRICE_TO_ACTIVITY",
            Self::PriceToMarket => "PRICE_TO_MARKET",
            Self::Balanced => "BALANCED",
        }
    }
}

/// Above 90% occupancy the group is priced to activity, below 75% to market.
/// Both boundaries are balanced.
pub fn get_pricing_mode(occupancy: OccupancyPercent) -> PricingMode {
    let pct = occupancy.value();
    if pct > ACTIVITY_MODE_FLOOR {
        PricingMode::PriceToActivity
    } else if pct < MARKET_MODE_CEILING {
        PricingMode::PriceToMarket
    } else {
        PricingMode::Balanced
    }
}

/// Both windows must agree in sign for a directional signal.
pub fn get_activity_signal(day7: &ActivityWindow, day14: &ActivityWindow) -> Signal {
    if day7.net > 0 && day14.net > 0 {
        Signal::Increase
    } else if day7.net < 0 && day14.net < 0 {
        Signal::Decrease
    } else {
        Signal::Hold
    }
}

pub fn get_market_signal(street_rate: f64, comp_weighted_avg: f64) -> Signal {
    if comp_weighted_avg <= 0.0 {
        return Signal::Hold;
    }

    if street_rate > comp_weighted_avg * MARKET_PREMIUM_CEILING {
        Signal::Decrease
    } else if street_rate < comp_weighted_avg * MARKET_DISCOUNT_FLOOR {
        Signal::Increase
    } else {
        Signal::Hold
    }
}

/// Only ever suggests closing a gap upward; never [`Signal::Decrease`].
pub fn get_achieved_signal(street_rate: f64, achieved_median: f64) -> Signal {
    if achieved_median <= 0.0 {
        return Signal::Hold;
    }

    if street_rate < achieved_median * ACHIEVED_GAP_FLOOR {
        Signal::Increase
    } else {
        Signal::Hold
    }
}
