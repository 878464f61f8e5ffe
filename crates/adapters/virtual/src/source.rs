//! Random value sources.

use iotsim_domain::reading::ValueSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A [`ValueSource`] drawing uniform samples from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

/// Unseeded source backed by the thread-local generator.
pub type RandomSource = RngSource<ThreadRng>;

/// Reproducible source backed by a seeded [`StdRng`].
pub type SeededSource = RngSource<StdRng>;

impl<R: Rng> RngSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl SeededSource {
    /// Build a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeding value source");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ValueSource for RngSource<R> {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        // `random_range` panics on an empty range.
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsim_domain::device::TemperatureSensor;
    use iotsim_domain::reading::{HUMIDITY_RANGE_PCT, TEMPERATURE_RANGE_C, sample_tenths};

    #[test]
    fn should_sample_within_requested_range() {
        let mut source = RandomSource::default();
        for _ in 0..1_000 {
            let value = source.sample(20.0, 40.0);
            assert!((20.0..=40.0).contains(&value));
        }
    }

    #[test]
    fn should_return_lower_bound_for_degenerate_range() {
        let mut source = RandomSource::default();
        assert!((source.sample(5.0, 5.0) - 5.0).abs() < f64::EPSILON);
        assert!((source.sample(9.0, 1.0) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_repeat_sequence_for_same_seed() {
        let mut a = SeededSource::from_seed(42);
        let mut b = SeededSource::from_seed(42);
        for _ in 0..10 {
            assert!((a.sample(0.0, 1.0) - b.sample(0.0, 1.0)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn should_produce_rounded_readings_in_sensor_ranges() {
        let mut source = SeededSource::from_seed(7);
        for _ in 0..500 {
            let temp = sample_tenths(&mut source, &TEMPERATURE_RANGE_C);
            assert!(TEMPERATURE_RANGE_C.contains(&temp));
            assert!(((temp * 10.0).round() - temp * 10.0).abs() < 1e-9);

            let hum = sample_tenths(&mut source, &HUMIDITY_RANGE_PCT);
            assert!(HUMIDITY_RANGE_PCT.contains(&hum));
            assert!(((hum * 10.0).round() - hum * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn should_feed_temperature_sensor() {
        let mut sensor = TemperatureSensor::new("Temp1");
        sensor.read_temperature(&mut RandomSource::default());
        assert!(TEMPERATURE_RANGE_C.contains(&sensor.temperature()));
    }
}
