//! Algorithm selection and run options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Quantum `RoundRobin::schedule` falls back to when the options carry
/// none (or one below 1). Validated runs and comparisons reject a missing
/// quantum instead.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// Scheduling discipline.
///
/// Variant order is the comparison preference order: when two algorithms
/// tie on average waiting time, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
    /// Round-Robin with fixed quantum.
    Rr,
}

impl Algorithm {
    /// All algorithms in comparison preference order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::Rr,
    ];

    /// Wire key (`fcfs`, `sjf`, `priority`, `rr`).
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::Rr => "rr",
        }
    }

    /// Whether processes must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Algorithm::Priority)
    }

    /// Whether a time quantum must be supplied.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::Rr)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string()))
    }
}

/// How numeric priority values map to scheduling precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// Lower value runs first (0 is the most urgent).
    #[default]
    LowerFirst,
    /// Higher value runs first.
    HigherFirst,
}

impl PriorityOrder {
    /// Maps a priority value to a rank where lower = scheduled first.
    #[inline]
    pub fn rank(&self, priority: i32) -> i64 {
        match self {
            PriorityOrder::LowerFirst => priority as i64,
            PriorityOrder::HigherFirst => -(priority as i64),
        }
    }
}

/// Per-run options shared by all schedulers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Round-Robin quantum. Required (≥ 1) for [`Algorithm::Rr`].
    pub time_quantum: Option<i64>,
    /// Priority convention for [`Algorithm::Priority`].
    #[serde(default)]
    pub priority_order: PriorityOrder,
}

impl SimulationOptions {
    /// Creates options with no quantum and the default priority order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin quantum.
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Sets the priority convention.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = order;
        self
    }
}
