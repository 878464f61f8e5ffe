//! # iotsim-app
//!
//! Application layer — the simulation driver.
//!
//! ## Responsibilities
//! - Power the fleet on once, then run a fixed number of cycles
//! - Each cycle: read every sensor, average the readings per kind, apply the
//!   [`IntensityRule`](iotsim_domain::control::IntensityRule) to every light,
//!   print the per-device report and the cycle summary, then pace
//! - Stay agnostic of where readings come from: the caller injects a
//!   [`ValueSource`](iotsim_domain::reading::ValueSource)
//!
//! ## Dependency rule
//! Depends on `iotsim-domain` only (plus `tokio::time` for pacing).
//! Never imports adapter crates.

pub mod error;
pub mod simulation;
