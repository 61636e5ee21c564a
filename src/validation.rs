//! Input validation for simulation requests.
//!
//! Checks every process before any scheduling takes place. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing or negative priorities (priority scheduling only)
//! - Missing or non-positive time quantum (round-robin only)
//! - Duplicate process IDs
//! - Workloads whose schedule would run past the `i64` tick range
//!
//! Validation stops at the first offending process so the caller gets a
//! single failure naming it by display id.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::models::{Algorithm, Process, SimulationOptions};

/// Validation result.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when the error concerns one.
    pub process_id: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is negative.
    InvalidArrival,
    /// Burst time is below 1.
    InvalidBurst,
    /// Priority scheduling requested but the process has no priority.
    MissingPriority,
    /// Priority is negative.
    InvalidPriority,
    /// Round-robin requested without a quantum ≥ 1.
    InvalidQuantum,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
}

impl ValidationError {
    fn for_process(kind: ValidationErrorKind, process: &Process, message: String) -> Self {
        Self {
            kind,
            process_id: Some(process.id.clone()),
            message,
        }
    }
}

/// Validates a process list.
///
/// Checks, per process in input order:
/// 1. `arrival >= 0`
/// 2. `burst >= 1`
/// 3. `priority` present and `>= 0` (only when `require_priority`)
/// 4. ID not already used by an earlier process
/// 5. latest arrival so far plus total burst so far fits in an `i64`
///
/// Every discipline finishes by `max(arrival) + sum(burst)`, so check 5
/// bounds every clock value a scheduler computes.
pub fn validate_processes(processes: &[Process], require_priority: bool) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_burst: i64 = 0;

    for p in processes {
        if p.arrival < 0 {
            return Err(reject(ValidationError::for_process(
                ValidationErrorKind::InvalidArrival,
                p,
                format!(
                    "Invalid arrival time for {}. Must be a non-negative number.",
                    p.id
                ),
            )));
        }

        if p.burst < 1 {
            return Err(reject(ValidationError::for_process(
                ValidationErrorKind::InvalidBurst,
                p,
                format!("Invalid burst time for {}. Must be at least 1.", p.id),
            )));
        }

        if require_priority {
            match p.priority {
                None => {
                    return Err(reject(ValidationError::for_process(
                        ValidationErrorKind::MissingPriority,
                        p,
                        format!("Missing priority for {}. Priority scheduling requires one.", p.id),
                    )));
                }
                Some(pr) if pr < 0 => {
                    return Err(reject(ValidationError::for_process(
                        ValidationErrorKind::InvalidPriority,
                        p,
                        format!(
                            "Invalid priority for {}. Must be a non-negative number.",
                            p.id
                        ),
                    )));
                }
                Some(_) => {}
            }
        }

        if !seen.insert(p.id.as_str()) {
            return Err(reject(ValidationError::for_process(
                ValidationErrorKind::DuplicateId,
                p,
                format!("Duplicate process ID: {}", p.id),
            )));
        }

        latest_arrival = latest_arrival.max(p.arrival);
        let horizon = total_burst
            .checked_add(p.burst)
            .and_then(|total| latest_arrival.checked_add(total).map(|_| total));
        match horizon {
            Some(total) => total_burst = total,
            None => {
                return Err(reject(ValidationError::for_process(
                    ValidationErrorKind::TimeOverflow,
                    p,
                    format!(
                        "Arrival and burst times for {} exceed the supported time range.",
                        p.id
                    ),
                )));
            }
        }
    }

    Ok(())
}

/// Validates a round-robin quantum.
pub fn validate_quantum(time_quantum: Option<i64>) -> ValidationResult {
    match time_quantum {
        Some(q) if q >= 1 => Ok(()),
        _ => Err(reject(ValidationError {
            kind: ValidationErrorKind::InvalidQuantum,
            process_id: None,
            message: "Invalid time quantum. Must be at least 1.".to_string(),
        })),
    }
}

/// Validates a full request for one algorithm.
///
/// The quantum is checked before the processes, so a bad quantum is
/// reported even when the process list is also malformed.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    options: &SimulationOptions,
) -> ValidationResult {
    if algorithm.requires_quantum() {
        validate_quantum(options.time_quantum)?;
    }
    validate_processes(processes, algorithm.requires_priority())
}

fn reject(error: ValidationError) -> ValidationError {
    debug!(kind = ?error.kind, process = ?error.process_id, "rejected simulation input");
    error
}
