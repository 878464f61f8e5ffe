//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Device operations themselves are total: out-of-range actuator requests
//! are ignored rather than reported.

/// Base error type for the domain layer.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("fleet needs at least one {0}")]
    MissingKind(crate::device::DeviceKind),
}
