/// Dollar step used when the lead signal moves the street rate.
#[derive(Debug, Clone, Copy)]
struct IncrementRule {
    unit_size: &'static str,
    low_volume: f64,
    high_volume: f64,
    threshold: u32,
}

const INCREMENT_RULES: [IncrementRule; 6] = [
    IncrementRule {
        unit_size: "5x5",
        low_volume: 3.0,
        high_volume: 5.0,
        threshold: 40,
    },
    IncrementRule {
        unit_size: "5x10",
        low_volume: 5.0,
        high_volume: 7.0,
        threshold: 40,
    },
    IncrementRule {
        unit_size: "10x10",
        low_volume: 7.0,
        high_volume: 10.0,
        threshold: 40,
    },
    IncrementRule {
        unit_size: "10x15",
        low_volume: 8.0,
        high_volume: 12.0,
        threshold: 30,
    },
    IncrementRule {
        unit_size: "10x20",
        low_volume: 10.0,
        high_volume: 15.0,
        threshold: 25,
    },
    IncrementRule {
        unit_size: "10x30",
        low_volume: 15.0,
        high_volume: 20.0,
        threshold: 20,
    },
];

const UNKNOWN_SIZE_INCREMENT: f64 = 10.0;

/// Looks up the increment for a unit size. Groups at or above the size's
/// volume threshold move by the larger step; unknown sizes move by $10.
pub fn get_base_increment(unit_size: &str, total_units: u32) -> f64 {
    INCREMENT_RULES
        .iter()
        .find(|rule| rule.unit_size == unit_size)
        .map(|rule| {
            if total_units >= rule.threshold {
                rule.high_volume
            } else {
                rule.low_volume
            }
        })
        .unwrap_or(UNKNOWN_SIZE_INCREMENT)
}
