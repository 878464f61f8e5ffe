//! Temperature sensor — samples a reading in °C.

use std::fmt;

use super::DeviceBase;
use crate::reading::{TEMPERATURE_RANGE_C, ValueSource, sample_tenths};

/// A simulated temperature sensor.
///
/// The reading starts at `0.0` and is replaced on every
/// [`read_temperature`](Self::read_temperature).
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensor {
    base: DeviceBase,
    temperature_c: f64,
}

impl TemperatureSensor {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: DeviceBase::new(id),
            temperature_c: 0.0,
        }
    }

    /// Take a new reading in `20.0..=40.0`, rounded to one decimal.
    pub fn read_temperature(&mut self, source: &mut impl ValueSource) {
        self.temperature_c = sample_tenths(source, &TEMPERATURE_RANGE_C);
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature_c
    }

    #[must_use]
    pub fn base(&self) -> &DeviceBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut DeviceBase {
        &mut self.base
    }
}

impl fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.base)?;
        write!(f, "Temperatura actual: {:.1}\u{b0}C", self.temperature_c)
    }
}
