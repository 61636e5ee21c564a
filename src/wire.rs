//! Request/response shapes for exposing the engine over a transport.
//!
//! Mirrors the JSON contract existing clients speak:
//!
//! | Request | Body | Response |
//! |---------|------|----------|
//! | single algorithm | `{processes, algorithm, timeQuantum?}` | `{gantt, details, awt, att}` |
//! | all algorithms | `{processes, timeQuantum}` | `{results, best, awts}` |
//! | any, on failure | | `{error}` |
//!
//! Processes are `{id, arrival, burst, priority?}`. No transport lives here;
//! a server deserializes a request, calls `execute`, and serializes the
//! outcome.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Algorithm, PriorityOrder, Process, SimulationOptions, SimulationResult};
use crate::scheduler::{compare, simulate, Comparison};

/// Single-algorithm request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<Process>,
    /// Algorithm key: `fcfs`, `sjf`, `priority` or `rr`.
    pub algorithm: String,
    /// Quantum, required for `rr`.
    #[serde(default)]
    pub time_quantum: Option<i64>,
    /// Priority convention, defaults to lower-value-first.
    #[serde(default)]
    pub priority_order: PriorityOrder,
}

/// All-algorithms request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Processes in input order; each needs a priority.
    pub processes: Vec<Process>,
    /// Round-robin quantum (required).
    #[serde(default)]
    pub time_quantum: Option<i64>,
    /// Priority convention, defaults to lower-value-first.
    #[serde(default)]
    pub priority_order: PriorityOrder,
}

/// Failure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

impl SimulationRequest {
    /// Creates a request for a known algorithm.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm: algorithm.key().to_string(),
            time_quantum: None,
            priority_order: PriorityOrder::default(),
        }
    }

    /// Sets the quantum.
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Run options carried by this request.
    pub fn options(&self) -> SimulationOptions {
        SimulationOptions {
            time_quantum: self.time_quantum,
            priority_order: self.priority_order,
        }
    }

    /// Parses the algorithm key, validates and runs.
    pub fn execute(&self) -> Result<SimulationResult, SimulationError> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        simulate(&self.processes, algorithm, &self.options())
    }
}

impl ComparisonRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, time_quantum: i64) -> Self {
        Self {
            processes,
            time_quantum: Some(time_quantum),
            priority_order: PriorityOrder::default(),
        }
    }

    /// Run options carried by this request.
    pub fn options(&self) -> SimulationOptions {
        SimulationOptions {
            time_quantum: self.time_quantum,
            priority_order: self.priority_order,
        }
    }

    /// Validates and runs all four algorithms.
    pub fn execute(&self) -> Result<Comparison, SimulationError> {
        compare(&self.processes, &self.options())
    }
}

impl From<&SimulationError> for ErrorResponse {
    fn from(err: &SimulationError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl From<SimulationError> for ErrorResponse {
    fn from(err: SimulationError) -> Self {
        Self::from(&err)
    }
}
