//! Simulation driver — runs the read → average → control → report cycle.
//!
//! The driver powers the whole fleet on, then for every cycle:
//!
//! 1. reads every sensor in fleet order, summing readings per kind
//! 2. averages temperature and humidity over the sensors of each kind
//! 3. asks the [`IntensityRule`] for an intensity and applies it to every light
//! 4. writes each device's report followed by the cycle summary
//! 5. sleeps for the configured interval

use std::fmt;
use std::io::Write;
use std::time::Duration;

use iotsim_domain::control::IntensityRule;
use iotsim_domain::device::Device;
use iotsim_domain::fleet::Fleet;
use iotsim_domain::reading::ValueSource;

use crate::error::SimulationError;

/// Number of cycles a default run performs.
pub const DEFAULT_CYCLES: u32 = 5;

/// Pause after each cycle in a default run.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Tunables of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    /// How many cycles to run. Cycles are numbered from 1.
    pub cycles: u32,
    /// Pause after every cycle, the last one included.
    pub interval: Duration,
    pub rule: IntensityRule,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            interval: DEFAULT_INTERVAL,
            rule: IntensityRule::default(),
        }
    }
}

/// Outcome of a single cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSummary {
    pub cycle: u32,
    pub avg_temperature_c: f64,
    pub avg_humidity_pct: f64,
    /// Intensity requested from every light this cycle.
    pub intensity_pct: i32,
}

impl fmt::Display for CycleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Promedio temperatura: {:.1}\u{b0}C | Promedio humedad: {:.1}%",
            self.avg_temperature_c, self.avg_humidity_pct
        )
    }
}

/// Running sum of readings of one kind.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    total: f64,
    count: u32,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    /// Arithmetic mean. A validated [`Fleet`] always feeds at least one value.
    fn mean(self) -> f64 {
        self.total / f64::from(self.count)
    }
}

/// Drives a [`Fleet`] through a series of cycles.
pub struct Simulation<S> {
    fleet: Fleet,
    source: S,
    settings: SimulationSettings,
}

impl<S> Simulation<S>
where
    S: ValueSource,
{
    /// Create a new simulation.
    pub fn new(fleet: Fleet, source: S, settings: SimulationSettings) -> Self {
        Self {
            fleet,
            source,
            settings,
        }
    }

    #[must_use]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Power the fleet on and run every configured cycle, writing the report
    /// to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Output`] if writing to `out` fails.
    pub async fn run(
        &mut self,
        out: &mut impl Write,
    ) -> Result<Vec<CycleSummary>, SimulationError> {
        tracing::info!(
            devices = self.fleet.len(),
            cycles = self.settings.cycles,
            "starting simulation"
        );
        self.fleet.power_on_all();

        let mut summaries = Vec::with_capacity(self.settings.cycles as usize);
        for cycle in 1..=self.settings.cycles {
            summaries.push(self.run_cycle(cycle, out)?);
            tokio::time::sleep(self.settings.interval).await;
        }

        tracing::info!(cycles = summaries.len(), "simulation finished");
        Ok(summaries)
    }

    /// Run a single cycle numbered `cycle`.
    ///
    /// Does not power devices on and does not pace; [`run`](Self::run) does
    /// both around its calls to this method.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Output`] if writing to `out` fails.
    pub fn run_cycle(
        &mut self,
        cycle: u32,
        out: &mut impl Write,
    ) -> Result<CycleSummary, SimulationError> {
        writeln!(out)?;
        writeln!(out, "--- Ciclo {cycle} ---")?;

        let (temperature, humidity) = self.read_sensors();
        let avg_temperature_c = temperature.mean();
        let avg_humidity_pct = humidity.mean();

        let intensity_pct = self.settings.rule.intensity_for(avg_temperature_c);
        self.apply_intensity(intensity_pct);

        for device in self.fleet.devices() {
            writeln!(out, "{device}")?;
        }

        let summary = CycleSummary {
            cycle,
            avg_temperature_c,
            avg_humidity_pct,
            intensity_pct,
        };
        writeln!(out)?;
        writeln!(out, "{summary}")?;
        out.flush()?;

        tracing::debug!(
            cycle,
            avg_temperature_c,
            avg_humidity_pct,
            intensity_pct,
            "cycle complete"
        );
        Ok(summary)
    }

    /// Read every sensor in fleet order, returning temperature and humidity sums.
    fn read_sensors(&mut self) -> (Accumulator, Accumulator) {
        let mut temperature = Accumulator::default();
        let mut humidity = Accumulator::default();

        for device in self.fleet.devices_mut() {
            match device {
                Device::Temperature(sensor) => {
                    sensor.read_temperature(&mut self.source);
                    temperature.push(sensor.temperature());
                }
                Device::Humidity(sensor) => {
                    sensor.read_humidity(&mut self.source);
                    humidity.push(sensor.humidity());
                }
                Device::Light(_) => {}
            }
        }

        (temperature, humidity)
    }

    fn apply_intensity(&mut self, intensity_pct: i32) {
        for device in self.fleet.devices_mut() {
            if let Device::Light(light) = device {
                light.set_intensity(intensity_pct);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsim_domain::device::{DeviceKind, PowerState};
    use iotsim_domain::reading::ScriptedSource;

    fn quick_settings(cycles: u32) -> SimulationSettings {
        SimulationSettings {
            cycles,
            interval: Duration::ZERO,
            ..SimulationSettings::default()
        }
    }

    /// Standard fleet fed `temp1, temp2, hum` on every cycle.
    fn simulation(temp1: f64, temp2: f64, hum: f64) -> Simulation<ScriptedSource> {
        Simulation::new(
            Fleet::standard(),
            ScriptedSource::new(vec![temp1, temp2, hum]),
            quick_settings(1),
        )
    }

    fn light_intensities(fleet: &Fleet) -> Vec<i32> {
        fleet
            .devices()
            .iter()
            .filter_map(|d| match d {
                Device::Light(light) => Some(light.intensity()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn should_default_to_five_cycles_one_second_apart() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.cycles, 5);
        assert_eq!(settings.interval, Duration::from_secs(1));
        assert_eq!(settings.rule, IntensityRule::default());
    }

    #[test]
    fn should_set_high_intensity_when_average_above_threshold() {
        let mut sim = simulation(35.0, 35.0, 50.0);
        let summary = sim.run_cycle(1, &mut Vec::new()).unwrap();

        assert!((summary.avg_temperature_c - 35.0).abs() < f64::EPSILON);
        assert_eq!(summary.intensity_pct, 80);
        assert_eq!(light_intensities(sim.fleet()), [80, 80]);
    }

    #[test]
    fn should_set_low_intensity_when_average_below_threshold() {
        let mut sim = simulation(20.0, 20.0, 50.0);
        sim.run_cycle(1, &mut Vec::new()).unwrap();
        assert_eq!(light_intensities(sim.fleet()), [40, 40]);
    }

    #[test]
    fn should_set_low_intensity_when_average_exactly_at_threshold() {
        let mut sim = simulation(30.0, 30.0, 50.0);
        sim.run_cycle(1, &mut Vec::new()).unwrap();
        assert_eq!(light_intensities(sim.fleet()), [40, 40]);
    }

    #[test]
    fn should_average_readings_per_kind() {
        let mut sim = simulation(27.3, 33.8, 55.2);
        let summary = sim.run_cycle(1, &mut Vec::new()).unwrap();

        assert!((summary.avg_temperature_c - 30.55).abs() < 1e-9);
        assert!((summary.avg_humidity_pct - 55.2).abs() < 1e-9);
        assert_eq!(summary.intensity_pct, 80);
    }

    #[test]
    fn should_average_over_fleet_composition() {
        let fleet = Fleet::new(vec![
            Device::new(DeviceKind::TemperatureSensor, "a"),
            Device::new(DeviceKind::TemperatureSensor, "b"),
            Device::new(DeviceKind::TemperatureSensor, "c"),
            Device::new(DeviceKind::HumiditySensor, "h1"),
            Device::new(DeviceKind::HumiditySensor, "h2"),
        ])
        .unwrap();
        let source = ScriptedSource::new(vec![21.0, 24.0, 27.0, 40.0, 60.0]);
        let mut sim = Simulation::new(fleet, source, quick_settings(1));

        let summary = sim.run_cycle(1, &mut Vec::new()).unwrap();
        assert!((summary.avg_temperature_c - 24.0).abs() < 1e-9);
        assert!((summary.avg_humidity_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn should_print_cycle_report_in_console_format() {
        let mut sim = simulation(27.3, 33.9, 55.2);
        sim.fleet.power_on_all();
        let mut out = Vec::new();
        sim.run_cycle(1, &mut out).unwrap();

        let expected = "\n--- Ciclo 1 ---\n\
            ID: Temp1 | Estado: Encendido\n\
            Temperatura actual: 27.3\u{b0}C\n\
            ID: Temp2 | Estado: Encendido\n\
            Temperatura actual: 33.9\u{b0}C\n\
            ID: Hum1 | Estado: Encendido\n\
            Humedad actual: 55.2%\n\
            ID: Luz1 | Estado: Encendido\n\
            Intensidad de luz: 80%\n\
            ID: Luz2 | Estado: Encendido\n\
            Intensidad de luz: 80%\n\
            \n\
            Promedio temperatura: 30.6\u{b0}C | Promedio humedad: 55.2%\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn should_print_whole_degrees_with_one_decimal() {
        let mut sim = simulation(20.0, 20.0, 20.0);
        let mut out = Vec::new();
        sim.run_cycle(3, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("--- Ciclo 3 ---"));
        assert!(text.contains("Temperatura actual: 20.0\u{b0}C"));
        assert!(text.contains("Promedio temperatura: 20.0\u{b0}C | Promedio humedad: 20.0%"));
    }

    #[tokio::test]
    async fn should_power_on_fleet_before_first_cycle() {
        let mut sim = simulation(25.0, 25.0, 50.0);
        let mut out = Vec::new();
        sim.run(&mut out).await.unwrap();

        assert!(
            sim.fleet()
                .devices()
                .iter()
                .all(|d| d.state() == PowerState::On)
        );
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Apagado"));
    }

    #[tokio::test]
    async fn should_run_every_cycle_in_order() {
        let mut sim = Simulation::new(
            Fleet::standard(),
            ScriptedSource::new(vec![35.0, 35.0, 50.0, 20.0, 20.0, 50.0]),
            quick_settings(DEFAULT_CYCLES),
        );
        let mut out = Vec::new();
        let summaries = sim.run(&mut out).await.unwrap();

        let cycles: Vec<_> = summaries.iter().map(|s| s.cycle).collect();
        assert_eq!(cycles, [1, 2, 3, 4, 5]);
        let intensities: Vec<_> = summaries.iter().map(|s| s.intensity_pct).collect();
        assert_eq!(intensities, [80, 40, 80, 40, 80]);

        let text = String::from_utf8(out).unwrap();
        let headers: Vec<_> = text
            .lines()
            .filter(|l| l.starts_with("--- Ciclo"))
            .collect();
        assert_eq!(
            headers,
            [
                "--- Ciclo 1 ---",
                "--- Ciclo 2 ---",
                "--- Ciclo 3 ---",
                "--- Ciclo 4 ---",
                "--- Ciclo 5 ---",
            ]
        );
        let summary_lines = text
            .lines()
            .filter(|l| l.starts_with("Promedio temperatura"))
            .count();
        assert_eq!(summary_lines, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn should_pause_one_interval_after_every_cycle() {
        let mut sim = Simulation::new(
            Fleet::standard(),
            ScriptedSource::new(vec![25.0, 25.0, 50.0]),
            SimulationSettings::default(),
        );
        let start = tokio::time::Instant::now();
        sim.run(&mut Vec::new()).await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(5), "paced for {elapsed:?}");
        assert!(elapsed < Duration::from_secs(6), "paced for {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn should_honour_custom_interval() {
        let mut sim = Simulation::new(
            Fleet::standard(),
            ScriptedSource::new(vec![25.0, 25.0, 50.0]),
            SimulationSettings {
                cycles: 3,
                interval: Duration::from_millis(250),
                ..SimulationSettings::default()
            },
        );
        let start = tokio::time::Instant::now();
        sim.run(&mut Vec::new()).await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(750), "paced for {elapsed:?}");
        assert!(elapsed < Duration::from_secs(1), "paced for {elapsed:?}");
    }

    #[tokio::test]
    async fn should_report_output_failure() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sim = simulation(25.0, 25.0, 50.0);
        let result = sim.run(&mut ClosedPipe).await;
        assert!(matches!(result, Err(SimulationError::Output(_))));
    }
}
