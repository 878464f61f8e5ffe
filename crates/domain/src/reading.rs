//! Sensor readings — where sampled values come from and how they are rounded.

use std::ops::RangeInclusive;

/// Range a temperature reading is drawn from, in °C.
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = 20.0..=40.0;

/// Range a humidity reading is drawn from, in %.
pub const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 20.0..=80.0;

/// Pluggable provider of raw sensor values.
///
/// Production code plugs in a random generator; tests plug in a
/// [`ScriptedSource`] so every reading is known in advance.
pub trait ValueSource {
    /// Produce a value uniformly distributed in `low..=high`.
    fn sample(&mut self, low: f64, high: f64) -> f64;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        (**self).sample(low, high)
    }
}

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        (**self).sample(low, high)
    }
}

/// Draw a value from `source` within `range`, rounded to one decimal.
///
/// Rounding can push a sample sitting right on a bound past it, so the
/// result is clamped back into `range` afterwards.
pub fn sample_tenths(source: &mut impl ValueSource, range: &RangeInclusive<f64>) -> f64 {
    let raw = source.sample(*range.start(), *range.end());
    round_to_tenth(raw).clamp(*range.start(), *range.end())
}

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// The requested range is ignored; callers decide what the script holds.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Build a source over `values`.
    ///
    /// An empty script yields the lower bound of every request.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always yields `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl ValueSource for ScriptedSource {
    fn sample(&mut self, low: f64, _high: f64) -> f64 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}
