//! Fleet — the ordered list of devices a simulation drives.
//!
//! Construction order is significant: reads, control and reports all walk the
//! fleet in that order. A fleet always holds at least one temperature sensor
//! and one humidity sensor so per-cycle averages are always defined.

use crate::device::{Device, DeviceKind};
use crate::error::{SimError, ValidationError};

/// The identifiers and kinds of the stock five-device fleet.
pub const STANDARD_FLEET: [(&str, DeviceKind); 5] = [
    ("Temp1", DeviceKind::TemperatureSensor),
    ("Temp2", DeviceKind::TemperatureSensor),
    ("Hum1", DeviceKind::HumiditySensor),
    ("Luz1", DeviceKind::LightActuator),
    ("Luz2", DeviceKind::LightActuator),
];

/// A validated, ordered collection of devices.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    devices: Vec<Device>,
}

impl Fleet {
    /// The stock fleet: two temperature sensors, one humidity sensor and two
    /// lights, all powered off.
    #[must_use]
    pub fn standard() -> Self {
        let devices = STANDARD_FLEET
            .iter()
            .map(|(id, kind)| Device::new(*kind, *id))
            .collect();
        Self { devices }
    }

    /// Build a fleet from an arbitrary device list.
    ///
    /// Identifiers are taken as given; they are neither checked for
    /// emptiness nor for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Validation`] with [`ValidationError::MissingKind`]
    /// when there is no temperature sensor or no humidity sensor.
    pub fn new(devices: Vec<Device>) -> Result<Self, SimError> {
        for required in [DeviceKind::TemperatureSensor, DeviceKind::HumiditySensor] {
            if !devices.iter().any(|d| d.kind() == required) {
                return Err(ValidationError::MissingKind(required).into());
            }
        }

        Ok(Self { devices })
    }

    pub fn power_on_all(&mut self) {
        self.devices.iter_mut().for_each(Device::power_on);
    }

    pub fn power_off_all(&mut self) {
        self.devices.iter_mut().for_each(Device::power_off);
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut Device> {
        self.devices.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}
