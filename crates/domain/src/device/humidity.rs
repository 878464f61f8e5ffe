//! Humidity sensor — samples a soil humidity reading in %.

use std::fmt;

use super::DeviceBase;
use crate::reading::{HUMIDITY_RANGE_PCT, ValueSource, sample_tenths};

/// A simulated soil humidity sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct HumiditySensor {
    base: DeviceBase,
    humidity_pct: f64,
}

impl HumiditySensor {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: DeviceBase::new(id),
            humidity_pct: 0.0,
        }
    }

    /// Take a new reading in `20.0..=80.0`, rounded to one decimal.
    pub fn read_humidity(&mut self, source: &mut impl ValueSource) {
        self.humidity_pct = sample_tenths(source, &HUMIDITY_RANGE_PCT);
    }

    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.humidity_pct
    }

    #[must_use]
    pub fn base(&self) -> &DeviceBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut DeviceBase {
        &mut self.base
    }
}

impl fmt::Display for HumiditySensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.base)?;
        write!(f, "Humedad actual: {:.1}%", self.humidity_pct)
    }
}
