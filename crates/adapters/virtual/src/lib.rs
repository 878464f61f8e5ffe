//! # iotsim-adapter-virtual
//!
//! Virtual sensor backend: implementations of
//! [`ValueSource`](iotsim_domain::reading::ValueSource) backed by `rand`.
//!
//! ## Provided sources
//!
//! | Source | Generator | Behaviour |
//! |--------|-----------|-----------|
//! | [`RandomSource`] | thread-local RNG | Unseeded, differs on every run |
//! | [`SeededSource`] | `StdRng` | Same seed, same readings |
//!
//! ## Dependency rule
//!
//! Depends on `iotsim-domain` only.

mod source;

pub use source::{RandomSource, RngSource, SeededSource};
