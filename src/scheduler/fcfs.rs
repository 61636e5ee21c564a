//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (equal arrivals keep input order).
//! 2. Walk a single clock from 0; jump forward over idle gaps.
//! 3. Run each process to completion in one interval.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use tracing::trace;

use super::{metrics, Scheduler};
use crate::models::{Algorithm, ExecutionInterval, Process, SimulationOptions, SimulationResult};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, SimulationOptions};
/// use u_cpusched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
/// let result = Fcfs.run(&processes, &SimulationOptions::new()).unwrap();
/// assert_eq!(result.timeline[1].start, 4);
/// assert_eq!(result.details[1].waiting_time, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process], _options: &SimulationOptions) -> SimulationResult {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival);

        let mut completions = vec![0; processes.len()];
        let mut timeline = Vec::with_capacity(processes.len());
        let mut clock = 0;

        for idx in order {
            let p = &processes[idx];
            if clock < p.arrival {
                trace!(from = clock, to = p.arrival, "cpu idle");
                clock = p.arrival;
            }
            trace!(process = %p.id, start = clock, "dispatch");
            timeline.push(ExecutionInterval::new(&p.id, clock, clock + p.burst));
            clock += p.burst;
            completions[idx] = clock;
        }

        metrics::summarize(Algorithm::Fcfs, processes, &completions, timeline)
    }
}
