//! Round-Robin (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Keep an arrival-ordered backlog (stable, so equal arrivals keep input
//!    order) and a FIFO ready queue.
//! 2. Admit every backlog process with `arrival <= clock` to the back of
//!    the ready queue. If the queue is still empty, jump to the next arrival.
//! 3. Pop the front, run it for `min(remaining, quantum)`, emit one interval.
//! 4. Admit arrivals up to the new clock **before** re-queuing the
//!    preempted process, so a process arriving exactly at the preemption
//!    instant runs ahead of it.
//! 5. A process whose remaining time hits zero records its completion.
//!
//! # Complexity
//! O(n log n + Σ⌈burst / quantum⌉): one O(1) queue operation per slice.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use tracing::trace;

use super::{metrics, Scheduler};
use crate::models::{
    Algorithm, ExecutionInterval, Process, SimulationOptions, SimulationResult,
    DEFAULT_TIME_QUANTUM,
};

/// Round-Robin scheduler.
///
/// The quantum comes from [`SimulationOptions::time_quantum`]. [`Scheduler::run`]
/// rejects a missing or non-positive quantum; [`Scheduler::schedule`] falls
/// back to [`DEFAULT_TIME_QUANTUM`] instead.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, SimulationOptions};
/// use u_cpusched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
/// let opts = SimulationOptions::new().with_time_quantum(2);
/// let result = RoundRobin.run(&processes, &opts).unwrap();
///
/// let order: Vec<_> = result.timeline.iter().map(|i| i.process_id.as_str()).collect();
/// assert_eq!(order, vec!["P1", "P2", "P1"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rr
    }

    fn schedule(&self, processes: &[Process], options: &SimulationOptions) -> SimulationResult {
        let quantum = options
            .time_quantum
            .filter(|&q| q >= 1)
            .unwrap_or(DEFAULT_TIME_QUANTUM);
        let n = processes.len();

        let mut backlog: Vec<usize> = (0..n).collect();
        backlog.sort_by_key(|&i| processes[i].arrival);
        let mut backlog: VecDeque<usize> = backlog.into();

        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut completions = vec![0; n];
        let mut timeline = Vec::new();
        let mut clock = 0;
        let mut finished = 0;

        while finished < n {
            admit(processes, &mut backlog, &mut ready, clock);

            let Some(idx) = ready.pop_front() else {
                match backlog.front() {
                    Some(&next) => {
                        trace!(from = clock, to = processes[next].arrival, "cpu idle");
                        clock = processes[next].arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &processes[idx];
            let slice = remaining[idx].min(quantum);
            trace!(process = %p.id, start = clock, slice, "dispatch");
            timeline.push(ExecutionInterval::new(&p.id, clock, clock + slice));
            clock += slice;
            remaining[idx] -= slice;

            admit(processes, &mut backlog, &mut ready, clock);

            if remaining[idx] > 0 {
                ready.push_back(idx);
            } else {
                completions[idx] = clock;
                finished += 1;
            }
        }

        metrics::summarize(Algorithm::Rr, processes, &completions, timeline)
    }
}

/// Moves every backlog process that has arrived by `clock` to the ready queue.
fn admit(
    processes: &[Process],
    backlog: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(&idx) = backlog.front() {
        if processes[idx].arrival > clock {
            break;
        }
        backlog.pop_front();
        ready.push_back(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(processes: &[Process], quantum: i64) -> SimulationResult {
        let opts = SimulationOptions::new().with_time_quantum(quantum);
        RoundRobin.run(processes, &opts).unwrap()
    }

    #[test]
    fn test_rr_quantum_one_time_slicing() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 3)];
        let r = run(&processes, 1);

        assert_eq!(
            r.timeline,
            vec![
                ExecutionInterval::new("P1", 0, 1),
                ExecutionInterval::new("P2", 1, 2),
                ExecutionInterval::new("P1", 2, 3),
                ExecutionInterval::new("P2", 3, 4),
                ExecutionInterval::new("P1", 4, 5),
                ExecutionInterval::new("P2", 5, 6),
            ]
        );
    }

    #[test]
    fn test_rr_arrival_at_preemption_runs_first() {
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let r = run(&processes, 2);

        assert_eq!(
            r.timeline,
            vec![
                ExecutionInterval::new("P1", 0, 2),
                ExecutionInterval::new("P2", 2, 4),
                ExecutionInterval::new("P1", 4, 6),
            ]
        );
        assert_eq!(r.detail_for("P1").unwrap().waiting_time, 2);
        assert_eq!(r.detail_for("P2").unwrap().waiting_time, 0);
        assert!((r.average_waiting_time - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_single_process_slices_not_merged() {
        let processes = vec![Process::new("P1", 0, 5)];
        let r = run(&processes, 2);
        assert_eq!(r.timeline.len(), 3);
        assert_eq!(r.timeline[2], ExecutionInterval::new("P1", 4, 5));
        assert_eq!(r.details[0].waiting_time, 0);
    }

    #[test]
    fn test_rr_idle_gap() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P2", 5, 3)];
        let r = run(&processes, 2);
        assert_eq!(
            r.timeline,
            vec![
                ExecutionInterval::new("P1", 0, 1),
                ExecutionInterval::new("P2", 5, 7),
                ExecutionInterval::new("P2", 7, 8),
            ]
        );
    }

    #[test]
    fn test_rr_late_first_arrival() {
        let processes = vec![Process::new("P1", 5, 2)];
        let r = run(&processes, 3);
        assert_eq!(r.timeline, vec![ExecutionInterval::new("P1", 5, 7)]);
    }

    #[test]
    fn test_rr_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new("B", 1, 2),
            Process::new("A", 1, 2),
            Process::new("C", 0, 2),
        ];
        let r = run(&processes, 2);
        let ids: Vec<_> = r.timeline.iter().map(|i| i.process_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_rr_mixed_workload() {
        // q=3: P1[0,3) P2[3,6) P3[6,9) P1[9,12) P2[12,13) P3[13,14) P1[14,15)
        let processes = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 4),
        ];
        let r = run(&processes, 3);
        let bounds: Vec<_> = r
            .timeline
            .iter()
            .map(|i| (i.process_id.as_str(), i.start, i.end))
            .collect();
        assert_eq!(
            bounds,
            vec![
                ("P1", 0, 3),
                ("P2", 3, 6),
                ("P3", 6, 9),
                ("P1", 9, 12),
                ("P2", 12, 13),
                ("P3", 13, 14),
                ("P1", 14, 15),
            ]
        );
        assert_eq!(r.detail_for("P1").unwrap().completion(), 15);
        assert_eq!(r.detail_for("P2").unwrap().waiting_time, 8);
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        let processes = vec![Process::new("P1", 0, 2)];
        assert!(RoundRobin
            .run(&processes, &SimulationOptions::new().with_time_quantum(0))
            .is_err());
        assert!(RoundRobin.run(&processes, &SimulationOptions::new()).is_err());
    }

    #[test]
    fn test_rr_schedule_falls_back_to_default_quantum() {
        let processes = vec![Process::new("P1", 0, 3)];
        let r = RoundRobin.schedule(&processes, &SimulationOptions::new());
        assert_eq!(r.timeline[0].duration(), DEFAULT_TIME_QUANTUM);
    }
}
