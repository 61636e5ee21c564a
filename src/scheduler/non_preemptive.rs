//! Shared driver for non-preemptive, rule-based disciplines (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. If no pending process has arrived, jump the clock to the earliest
//!    pending arrival.
//! 2. Among pending processes with `arrival <= clock`, pick the best by the
//!    rule engine (ties fall through to input order).
//! 3. Run it to completion; repeat until every process has run.
//!
//! # Complexity
//! O(n²): each of n dispatch points scans all processes.

use tracing::trace;

use super::metrics;
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, ExecutionInterval, Process, SimulationResult};

pub(crate) fn dispatch(
    algorithm: Algorithm,
    processes: &[Process],
    engine: &RuleEngine,
) -> SimulationResult {
    let n = processes.len();
    let mut done = vec![false; n];
    let mut completions = vec![0; n];
    let mut timeline = Vec::with_capacity(n);
    let mut clock = 0;

    for _ in 0..n {
        let earliest_pending = (0..n)
            .filter(|&i| !done[i])
            .map(|i| processes[i].arrival)
            .min();
        if let Some(arrival) = earliest_pending {
            if arrival > clock {
                trace!(from = clock, to = arrival, "cpu idle");
                clock = arrival;
            }
        }

        let ready = (0..n).filter(|&i| !done[i] && processes[i].arrival <= clock);
        let Some(idx) = engine.select_best(processes, ready) else {
            break;
        };

        let p = &processes[idx];
        trace!(process = %p.id, start = clock, "dispatch");
        timeline.push(ExecutionInterval::new(&p.id, clock, clock + p.burst));
        clock += p.burst;
        completions[idx] = clock;
        done[idx] = true;
    }

    metrics::summarize(algorithm, processes, &completions, timeline)
}
