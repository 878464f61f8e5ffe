//! Power state — whether a device is switched on.

/// Power state of a device. Devices start [`Off`](Self::Off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    On,
    #[default]
    Off,
}

/// Renders the console label used in device reports.
impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("Encendido"),
            Self::Off => f.write_str("Apagado"),
        }
    }
}
