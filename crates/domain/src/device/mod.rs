//! Devices — temperature sensors, humidity sensors and light actuators.
//!
//! Every device carries an identifier and a power state (see [`DeviceBase`]).
//! The concrete kinds add one measurement or control attribute each and are
//! wrapped in the [`Device`] enum so callers dispatch with an exhaustive
//! `match` instead of inspecting types at runtime.

mod humidity;
mod light;
mod power;
mod temperature;

pub use humidity::HumiditySensor;
pub use light::{LightActuator, MAX_INTENSITY_PCT, MIN_INTENSITY_PCT};
pub use power::PowerState;
pub use temperature::TemperatureSensor;

use std::fmt;

use serde::Deserialize;

/// Variant tag for the device kinds the simulation knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    TemperatureSensor,
    HumiditySensor,
    LightActuator,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemperatureSensor => f.write_str("temperature sensor"),
            Self::HumiditySensor => f.write_str("humidity sensor"),
            Self::LightActuator => f.write_str("light actuator"),
        }
    }
}

/// Identity and power state shared by every device kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBase {
    id: String,
    state: PowerState,
}

impl DeviceBase {
    /// Create a powered-off device with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: PowerState::Off,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn power_on(&mut self) {
        self.state = PowerState::On;
    }

    pub fn power_off(&mut self) {
        self.state = PowerState::Off;
    }
}

/// Base status line shared by every device's report.
impl fmt::Display for DeviceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Estado: {}", self.id, self.state)
    }
}

/// Wrapper enum for the concrete device types.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Temperature(TemperatureSensor),
    Humidity(HumiditySensor),
    Light(LightActuator),
}

impl Device {
    /// Build a powered-off device of the given kind.
    #[must_use]
    pub fn new(kind: DeviceKind, id: impl Into<String>) -> Self {
        match kind {
            DeviceKind::TemperatureSensor => Self::Temperature(TemperatureSensor::new(id)),
            DeviceKind::HumiditySensor => Self::Humidity(HumiditySensor::new(id)),
            DeviceKind::LightActuator => Self::Light(LightActuator::new(id)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Temperature(_) => DeviceKind::TemperatureSensor,
            Self::Humidity(_) => DeviceKind::HumiditySensor,
            Self::Light(_) => DeviceKind::LightActuator,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.base().id()
    }

    #[must_use]
    pub fn state(&self) -> PowerState {
        self.base().state()
    }

    pub fn power_on(&mut self) {
        self.base_mut().power_on();
    }

    pub fn power_off(&mut self) {
        self.base_mut().power_off();
    }

    fn base(&self) -> &DeviceBase {
        match self {
            Self::Temperature(d) => d.base(),
            Self::Humidity(d) => d.base(),
            Self::Light(d) => d.base(),
        }
    }

    fn base_mut(&mut self) -> &mut DeviceBase {
        match self {
            Self::Temperature(d) => d.base_mut(),
            Self::Humidity(d) => d.base_mut(),
            Self::Light(d) => d.base_mut(),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(d) => fmt::Display::fmt(d, f),
            Self::Humidity(d) => fmt::Display::fmt(d, f),
            Self::Light(d) => fmt::Display::fmt(d, f),
        }
    }
}
