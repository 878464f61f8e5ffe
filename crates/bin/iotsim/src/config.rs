//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `iotsim.toml` in the working directory. Every field has a
//! default matching the stock five-cycle run, so the file is optional.
//! Environment variables take precedence over file values.

use std::time::Duration;

use iotsim_app::simulation::SimulationSettings;
use iotsim_domain::control::IntensityRule;
use iotsim_domain::device::{Device, DeviceKind, MAX_INTENSITY_PCT, MIN_INTENSITY_PCT};
use iotsim_domain::error::SimError;
use iotsim_domain::fleet::Fleet;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cycle count, pacing and randomness.
    pub simulation: SimulationConfig,
    /// Light control rule (`threshold_c`, `above_pct`, `otherwise_pct`).
    pub control: IntensityRule,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Custom fleet. Empty means the stock five-device fleet.
    pub devices: Vec<DeviceConfig>,
}

/// Simulation loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of cycles to run.
    pub cycles: u32,
    /// Pause after each cycle, in milliseconds.
    pub interval_ms: u64,
    /// Seed for reproducible readings. Unset means a fresh random run.
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One entry of a custom fleet.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub id: String,
    pub kind: DeviceKind,
}

impl Config {
    /// Load configuration from `iotsim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("iotsim.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from `lookup` (the process environment in production).
    ///
    /// Values that do not parse are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(cycles) = lookup("IOTSIM_CYCLES").and_then(|v| v.parse().ok()) {
            self.simulation.cycles = cycles;
        }
        if let Some(ms) = lookup("IOTSIM_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.simulation.interval_ms = ms;
        }
        if let Some(seed) = lookup("IOTSIM_SEED").and_then(|v| v.parse().ok()) {
            self.simulation.seed = Some(seed);
        }
        if let Some(val) = lookup("IOTSIM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.cycles == 0 {
            return Err(ConfigError::Validation(
                "cycles must be non-zero".to_string(),
            ));
        }
        let range = MIN_INTENSITY_PCT..=MAX_INTENSITY_PCT;
        for (name, value) in [
            ("above_pct", self.control.above_pct),
            ("otherwise_pct", self.control.otherwise_pct),
        ] {
            if !range.contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be within 0..=100, got {value}"
                )));
            }
        }
        if !self.control.threshold_c.is_finite() {
            return Err(ConfigError::Validation(
                "threshold_c must be a finite number".to_string(),
            ));
        }
        self.fleet()?;
        Ok(())
    }

    /// Build the fleet: the configured devices, or the stock fleet when none
    /// are configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Fleet`] if the configured devices do not form a
    /// valid fleet.
    pub fn fleet(&self) -> Result<Fleet, ConfigError> {
        if self.devices.is_empty() {
            return Ok(Fleet::standard());
        }
        let devices = self
            .devices
            .iter()
            .map(|d| Device::new(d.kind, d.id.clone()))
            .collect();
        Ok(Fleet::new(devices)?)
    }

    /// Driver settings derived from the `[simulation]` and `[control]` sections.
    #[must_use]
    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            cycles: self.simulation.cycles,
            interval: Duration::from_millis(self.simulation.interval_ms),
            rule: self.control,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: 5,
            interval_ms: 1_000,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "iotsim=info,iotsim_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The configured devices do not form a valid fleet.
    #[error("invalid fleet")]
    Fleet(#[from] SimError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
