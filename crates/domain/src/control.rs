//! Control rule — picks a light intensity from the average temperature.

use serde::Deserialize;

/// Two-branch threshold rule driving every light actuator.
///
/// When the average temperature is strictly above `threshold_c` the lights go
/// to `above_pct`, otherwise to `otherwise_pct`. A reading exactly at the
/// threshold takes the `otherwise_pct` branch.
///
/// Deserializes from a table where every missing key keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntensityRule {
    pub threshold_c: f64,
    pub above_pct: i32,
    pub otherwise_pct: i32,
}

impl Default for IntensityRule {
    fn default() -> Self {
        Self {
            threshold_c: 30.0,
            above_pct: 80,
            otherwise_pct: 40,
        }
    }
}

impl IntensityRule {
    /// Intensity to request for the given average temperature.
    #[must_use]
    pub fn intensity_for(&self, avg_temperature_c: f64) -> i32 {
        if avg_temperature_c > self.threshold_c {
            self.above_pct
        } else {
            self.otherwise_pct
        }
    }
}
