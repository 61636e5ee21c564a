//! Process (input) model.
//!
//! A process is a unit of CPU work to be scheduled: it becomes eligible at
//! its arrival time and needs `burst` time units of CPU to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Display label, unique within a run (e.g. "P1").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority. Only consulted by priority scheduling;
    /// interpretation depends on [`PriorityOrder`](super::PriorityOrder).
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Earliest possible completion time (arrival + burst).
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival + self.burst
    }
}
