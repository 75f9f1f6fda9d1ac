use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a movement series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Flat => "Flat",
        }
    }

    fn from_delta(delta: i64) -> Self {
        if delta > 0 {
            Self::Up
        } else if delta < 0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// Move-in/move-out counts over a rolling window (7, 14 or 30 days).
///
/// Only the counts are read when deserializing; `net` and `trend` are always
/// recomputed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WindowCounts")]
pub struct ActivityWindow {
    pub move_ins: u32,
    pub move_outs: u32,
    pub net: i64,
    pub trend: Trend,
}

impl ActivityWindow {
    pub fn new(move_ins: u32, move_outs: u32) -> Self {
        build_activity_window(move_ins, move_outs)
    }
}

#[derive(Deserialize)]
struct WindowCounts {
    move_ins: u32,
    move_outs: u32,
}

impl From<WindowCounts> for ActivityWindow {
    fn from(counts: WindowCounts) -> Self {
        build_activity_window(counts.move_ins, counts.move_outs)
    }
}

impl Default for ActivityWindow {
    fn default() -> Self {
        build_activity_window(0, 0)
    }
}

/// Short rolling windows consulted by the street-rate activity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeasingActivity {
    pub day7: ActivityWindow,
    pub day14: ActivityWindow,
}

pub fn build_activity_window(move_ins: u32, move_outs: u32) -> ActivityWindow {
    let net = i64::from(move_ins) - i64::from(move_outs);
    ActivityWindow {
        move_ins,
        move_outs,
        net,
        trend: Trend::from_delta(net),
    }
}

/// Month-end occupancy snapshot for a unit group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub month: NaiveDate,
    pub occupancy_pct: f64,
    pub move_ins: u32,
    pub move_outs: u32,
    pub street_rate: f64,
}

/// Occupancy swing in points that must be exceeded before a trend registers.
const TREND_SWING_POINTS: f64 = 2.0;

/// Compares occupancy three snapshots back against the latest one.
///
/// Fewer than three snapshots is reported as [`Trend::Flat`].
pub fn ninety_day_trend(history: &[MonthlySnapshot]) -> Trend {
    if history.len() < 3 {
        return Trend::Flat;
    }

    let earlier = history[history.len() - 3].occupancy_pct;
    let latest = history[history.len() - 1].occupancy_pct;
    let swing = latest - earlier;

    if swing > TREND_SWING_POINTS {
        Trend::Up
    } else if swing < -TREND_SWING_POINTS {
        Trend::Down
    } else {
        Trend::Flat
    }
}
