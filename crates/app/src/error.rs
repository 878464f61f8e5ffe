//! Driver error types.

/// Errors raised while running a simulation.
///
/// Device operations cannot fail; only emitting the report can.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// Writing the console report failed (e.g. closed stdout).
    #[error("failed to write simulation report")]
    Output(#[from] std::io::Error),
}
