//! Per-process metrics and schedule quality indicators.
//!
//! Turns completion times into waiting/turnaround details and averages,
//! and derives whole-schedule indicators from a finished result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround (TAT) | completion - arrival |
//! | Waiting (WT) | TAT - burst |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy / (makespan - first arrival) |
//! | Throughput | processes / (makespan - first arrival) |
//! | Response Time | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::collections::HashMap;

use crate::models::{Algorithm, ExecutionInterval, Process, ProcessDetail, SimulationResult};

/// Assembles a result from per-process completion times.
///
/// `completions[i]` is the completion time of `processes[i]`. Details keep
/// input order. Averages are 0.0 for an empty process list. Details carry
/// the priority only for disciplines that schedule by it.
pub fn summarize(
    algorithm: Algorithm,
    processes: &[Process],
    completions: &[i64],
    timeline: Vec<ExecutionInterval>,
) -> SimulationResult {
    let carries_priority = algorithm.requires_priority();
    let details: Vec<ProcessDetail> = processes
        .iter()
        .zip(completions)
        .map(|(p, &completion)| {
            let detail = ProcessDetail::from_completion(p, completion);
            if carries_priority {
                detail
            } else {
                ProcessDetail {
                    priority: None,
                    ..detail
                }
            }
        })
        .collect();

    let average_waiting_time = mean(details.iter().map(|d| d.waiting_time));
    let average_turnaround_time = mean(details.iter().map(|d| d.turnaround_time));

    SimulationResult {
        timeline,
        details,
        average_waiting_time,
        average_turnaround_time,
    }
}

fn mean(values: impl ExactSizeIterator<Item = i64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    // i128 holds the sum of any i64 sequence shorter than 2^64 entries
    values.map(i128::from).sum::<i128>() as f64 / count as f64
}

/// Whole-schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Latest completion time.
    pub makespan: i64,
    /// Total time the CPU was running a process.
    pub busy_time: i64,
    /// Idle time between the first arrival and the makespan.
    pub idle_time: i64,
    /// Fraction of the span the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the span.
    pub throughput: f64,
    /// Number of dispatches that switched to a different process.
    pub context_switches: usize,
    /// Mean time from arrival to first dispatch.
    pub average_response_time: f64,
}

impl ScheduleMetrics {
    /// Computes indicators from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let first_arrival = result.details.iter().map(|d| d.arrival).min().unwrap_or(0);
        let span = (makespan - first_arrival).max(0);
        let busy_time: i64 = result.timeline.iter().map(|i| i.duration()).sum();

        let context_switches = result
            .timeline
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        let mut first_start: HashMap<&str, i64> = HashMap::new();
        for interval in &result.timeline {
            first_start
                .entry(interval.process_id.as_str())
                .or_insert(interval.start);
        }
        let response_times: Vec<i64> = result
            .details
            .iter()
            .filter_map(|d| first_start.get(d.id.as_str()).map(|&s| s - d.arrival))
            .collect();

        let (cpu_utilization, throughput) = if span == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / span as f64,
                result.details.len() as f64 / span as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: span - busy_time,
            cpu_utilization,
            throughput,
            context_switches,
            average_response_time: mean(response_times.into_iter()),
        }
    }
}
