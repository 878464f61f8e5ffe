//! Light actuator — holds an intensity percentage.

use std::fmt;

use super::DeviceBase;

pub const MIN_INTENSITY_PCT: i32 = 0;
pub const MAX_INTENSITY_PCT: i32 = 100;

/// A simulated dimmable light.
///
/// Intensity never leaves `0..=100`: requests outside that range are
/// dropped without touching the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightActuator {
    base: DeviceBase,
    intensity_pct: i32,
}

impl LightActuator {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: DeviceBase::new(id),
            intensity_pct: MIN_INTENSITY_PCT,
        }
    }

    /// Set the intensity if `value` is within `0..=100`; otherwise no-op.
    pub fn set_intensity(&mut self, value: i32) {
        if (MIN_INTENSITY_PCT..=MAX_INTENSITY_PCT).contains(&value) {
            self.intensity_pct = value;
        }
    }

    #[must_use]
    pub fn intensity(&self) -> i32 {
        self.intensity_pct
    }

    #[must_use]
    pub fn base(&self) -> &DeviceBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut DeviceBase {
        &mut self.base
    }
}

impl fmt::Display for LightActuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.base)?;
        write!(f, "Intensidad de luz: {}%", self.intensity_pct)
    }
}
