//! Engine error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the simulation engine.
///
/// Every variant is a caller input error; the engine is deterministic and
/// has no transient failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input failed validation; nothing was simulated.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Algorithm key is not one of `fcfs`, `sjf`, `priority`, `rr`.
    #[error("Invalid algorithm '{0}'. Expected one of: fcfs, sjf, priority, rr.")]
    UnknownAlgorithm(String),
}

impl SimulationError {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            SimulationError::Validation(e) => Some(e),
            SimulationError::UnknownAlgorithm(_) => None,
        }
    }
}
