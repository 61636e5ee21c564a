//! Simulation result model.
//!
//! A simulation result is the complete output of one scheduling run: the
//! Gantt timeline of execution intervals, per-process timing details, and
//! the averaged metrics.
//!
//! Field names serialize to the legacy wire contract
//! (`gantt`, `pid`, `at`, `bt`, `pr`, `wt`, `tat`, `awt`, `att`).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous stretch of CPU time given to a process.
///
/// Covers `[start, end)`. Round-Robin slices of the same process are kept
/// as separate intervals so the timeline shows each preemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    #[serde(rename = "pid")]
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

/// Timing outcome for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDetail {
    /// Process display id.
    #[serde(rename = "pid")]
    pub id: String,
    /// Arrival tick.
    #[serde(rename = "at")]
    pub arrival: i64,
    /// Burst length.
    #[serde(rename = "bt")]
    pub burst: i64,
    /// Priority, carried through for display.
    #[serde(rename = "pr", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Time spent ready but not running: `turnaround_time - burst`.
    #[serde(rename = "wt")]
    pub waiting_time: i64,
    /// Time from arrival to completion.
    #[serde(rename = "tat")]
    pub turnaround_time: i64,
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution intervals ordered by start time.
    #[serde(rename = "gantt")]
    pub timeline: Vec<ExecutionInterval>,
    /// One entry per input process, in input order.
    pub details: Vec<ProcessDetail>,
    /// Mean waiting time over `details`.
    #[serde(rename = "awt")]
    pub average_waiting_time: f64,
    /// Mean turnaround time over `details`.
    #[serde(rename = "att")]
    pub average_turnaround_time: f64,
}

/// A piece of the timeline: either a process running or the CPU idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineSegment<'a> {
    /// A process held the CPU.
    Run(&'a ExecutionInterval),
    /// No process was ready during `[start, end)`.
    Idle { start: i64, end: i64 },
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl ProcessDetail {
    /// Builds the detail for a process from its completion time.
    pub fn from_completion(process: &Process, completion: i64) -> Self {
        let turnaround_time = completion - process.arrival;
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            waiting_time: turnaround_time - process.burst,
            turnaround_time,
        }
    }

    /// Completion tick.
    #[inline]
    pub fn completion(&self) -> i64 {
        self.arrival + self.turnaround_time
    }
}

impl SimulationResult {
    /// Creates an empty result (no timeline, no details, zero averages).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of processes in the result.
    pub fn process_count(&self) -> usize {
        self.details.len()
    }

    /// Finds the detail for a process.
    pub fn detail_for(&self, process_id: &str) -> Option<&ProcessDetail> {
        self.details.iter().find(|d| d.id == process_id)
    }

    /// Returns all intervals executed by a process.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.timeline
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Latest completion across all processes (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Timeline with idle gaps made explicit.
    ///
    /// The iterator is finite and cheap to clone, so a renderer can replay
    /// it from the start at any pace.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            timeline: &self.timeline,
            next: 0,
            cursor: self.timeline.first().map(|i| i.start).unwrap_or(0),
        }
    }
}

/// Iterator over [`TimelineSegment`]s. See [`SimulationResult::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    timeline: &'a [ExecutionInterval],
    next: usize,
    cursor: i64,
}

impl<'a> Iterator for Segments<'a> {
    type Item = TimelineSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let interval = self.timeline.get(self.next)?;
        if self.cursor < interval.start {
            let idle = TimelineSegment::Idle {
                start: self.cursor,
                end: interval.start,
            };
            self.cursor = interval.start;
            return Some(idle);
        }
        self.next += 1;
        self.cursor = interval.end;
        Some(TimelineSegment::Run(interval))
    }
}
