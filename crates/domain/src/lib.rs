//! # iotsim-domain
//!
//! Pure domain model for the iotsim device simulation.
//!
//! ## Responsibilities
//! - Define **Devices** (temperature sensors, humidity sensors, light actuators)
//!   and their shared identity + power state
//! - Define the **value source** abstraction sensors sample their readings from
//! - Define the **Fleet** (ordered device list) and its composition invariants
//! - Define the **control rule** mapping average temperature to light intensity
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Randomness is injected through [`reading::ValueSource`]; the production
//! implementation lives in an adapter crate.

pub mod error;

pub mod control;
pub mod device;
pub mod fleet;
pub mod reading;
