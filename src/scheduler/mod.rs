//! CPU scheduling disciplines and schedule metrics.
//!
//! Every discipline implements [`Scheduler`], so callers (and the
//! comparison runner) can treat them uniformly.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | [`Fcfs`] | no | arrival |
//! | [`Sjf`] | no | burst → arrival → input order |
//! | [`PriorityScheduler`] | no | priority rank → arrival → input order |
//! | [`RoundRobin`] | yes (quantum) | FIFO ready queue |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod comparison;
mod fcfs;
mod metrics;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;

pub use comparison::{compare, Comparison};
pub use fcfs::Fcfs;
pub use metrics::{summarize, ScheduleMetrics};
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{Algorithm, Process, SimulationOptions, SimulationResult};
use crate::validation::{validate_input, ValidationResult};

/// A CPU scheduling discipline.
///
/// Runs are pure: each call allocates its own state, so one scheduler value
/// can serve concurrent runs on different threads.
pub trait Scheduler: Send + Sync + Debug {
    /// Which discipline this is.
    fn algorithm(&self) -> Algorithm;

    /// Checks the input for this discipline.
    fn validate(&self, processes: &[Process], options: &SimulationOptions) -> ValidationResult {
        validate_input(processes, self.algorithm(), options)
    }

    /// Computes the schedule, assuming the input already passed [`validate`].
    ///
    /// [`validate`]: Scheduler::validate
    fn schedule(&self, processes: &[Process], options: &SimulationOptions) -> SimulationResult;

    /// Validates, then schedules.
    fn run(
        &self,
        processes: &[Process],
        options: &SimulationOptions,
    ) -> Result<SimulationResult, SimulationError> {
        self.validate(processes, options)?;
        let result = self.schedule(processes, options);
        debug!(
            algorithm = %self.algorithm(),
            processes = processes.len(),
            intervals = result.timeline.len(),
            awt = result.average_waiting_time,
            att = result.average_turnaround_time,
            "simulation complete"
        );
        Ok(result)
    }
}

/// Returns the scheduler for an algorithm.
pub fn scheduler_for(algorithm: Algorithm) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs),
        Algorithm::Sjf => Box::new(Sjf),
        Algorithm::Priority => Box::new(PriorityScheduler),
        Algorithm::Rr => Box::new(RoundRobin),
    }
}

/// All schedulers, in comparison preference order.
pub fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
    Algorithm::ALL.into_iter().map(scheduler_for).collect()
}

/// Runs one algorithm over a process list.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, Process, SimulationOptions};
/// use u_cpusched::scheduler::simulate;
///
/// let processes = vec![Process::new("P1", 5, 2)];
/// let result = simulate(&processes, Algorithm::Fcfs, &SimulationOptions::new()).unwrap();
/// assert_eq!(result.timeline.len(), 1);
/// assert_eq!((result.timeline[0].start, result.timeline[0].end), (5, 7));
/// ```
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
    options: &SimulationOptions,
) -> Result<SimulationResult, SimulationError> {
    scheduler_for(algorithm).run(processes, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::{generate, WorkloadConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_schedule_invariants(processes: &[Process], r: &SimulationResult, label: &str) {
        assert_eq!(r.details.len(), processes.len(), "{label}: detail count");

        let sum_tat: i64 = r.details.iter().map(|d| d.turnaround_time).sum();
        let sum_wt: i64 = r.details.iter().map(|d| d.waiting_time).sum();
        let sum_bt: i64 = processes.iter().map(|p| p.burst).sum();
        assert_eq!(sum_tat, sum_wt + sum_bt, "{label}: TAT = WT + BT");

        for (p, d) in processes.iter().zip(&r.details) {
            assert_eq!(p.id, d.id, "{label}: input order");
            assert!(d.waiting_time >= 0, "{label}: {} negative WT", p.id);
            assert!(d.completion() >= p.earliest_completion(), "{label}: {}", p.id);

            let run_time: i64 = r.intervals_for(&p.id).iter().map(|i| i.duration()).sum();
            assert_eq!(run_time, p.burst, "{label}: {} ran its burst", p.id);
        }

        for w in r.timeline.windows(2) {
            assert!(w[0].start < w[0].end, "{label}: empty interval");
            assert!(w[0].end <= w[1].start, "{label}: overlap or unsorted");
        }
        for interval in &r.timeline {
            let arrival = processes
                .iter()
                .find(|p| p.id == interval.process_id)
                .map(|p| p.arrival)
                .unwrap();
            assert!(interval.start >= arrival, "{label}: ran before arrival");
        }

        if !processes.is_empty() {
            let min_arrival = processes.iter().map(|p| p.arrival).min().unwrap();
            let max_completion = r.details.iter().map(|d| d.completion()).max().unwrap();
            let metrics = ScheduleMetrics::calculate(r);
            assert_eq!(
                metrics.busy_time + metrics.idle_time,
                max_completion - min_arrival,
                "{label}: busy + idle covers span"
            );
        }
    }

    #[test]
    fn test_scheduler_for_matches_algorithm() {
        for algo in Algorithm::ALL {
            assert_eq!(scheduler_for(algo).algorithm(), algo);
        }
        let order: Vec<_> = all_schedulers().iter().map(|s| s.algorithm()).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let config = WorkloadConfig::new(8)
            .with_max_arrival(15)
            .with_burst_range(1, 9)
            .with_max_priority(4);

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let processes = generate(&config, &mut rng);
            for quantum in [1, 2, 4] {
                let opts = SimulationOptions::new().with_time_quantum(quantum);
                for s in all_schedulers() {
                    let r = s.run(&processes, &opts).unwrap();
                    let label = format!("seed={seed} q={quantum} {}", s.algorithm());
                    assert_schedule_invariants(&processes, &r, &label);
                }
            }
        }
    }

    #[test]
    fn test_empty_input_all_algorithms() {
        let opts = SimulationOptions::new().with_time_quantum(2);
        for s in all_schedulers() {
            let r = s.run(&[], &opts).unwrap();
            assert_eq!(r, SimulationResult::empty());
        }
    }

    #[test]
    fn test_idle_gap_all_algorithms() {
        let processes = vec![Process::new("P1", 5, 2).with_priority(0)];
        let opts = SimulationOptions::new().with_time_quantum(2);
        for s in all_schedulers() {
            let r = s.run(&processes, &opts).unwrap();
            assert_eq!(r.timeline.len(), 1, "{}", s.algorithm());
            assert_eq!((r.timeline[0].start, r.timeline[0].end), (5, 7));
        }
    }

    #[test]
    fn test_simulate_validates_first() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 1, -1)];
        let err = simulate(&processes, Algorithm::Fcfs, &SimulationOptions::new()).unwrap_err();
        let v = err.as_validation().unwrap();
        assert_eq!(v.process_id.as_deref(), Some("P2"));
    }

    #[test]
    fn test_arrival_near_time_limit() {
        let opts = SimulationOptions::new().with_time_quantum(2);

        let too_late = vec![Process::new("P1", i64::MAX - 1, 5).with_priority(0)];
        for algorithm in Algorithm::ALL {
            let err = simulate(&too_late, algorithm, &opts).unwrap_err();
            assert_eq!(
                err.as_validation().map(|v| v.kind),
                Some(ValidationErrorKind::TimeOverflow),
                "{algorithm}"
            );
        }

        let at_limit = vec![
            Process::new("P1", i64::MAX - 5, 3).with_priority(0),
            Process::new("P2", i64::MAX - 5, 2).with_priority(1),
        ];
        for algorithm in Algorithm::ALL {
            let r = simulate(&at_limit, algorithm, &opts).unwrap();
            assert_eq!(r.makespan(), i64::MAX, "{algorithm}");
        }
    }

    #[test]
    fn test_concurrent_runs() {
        let processes = vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 2, 3).with_priority(0),
        ];
        let opts = SimulationOptions::new().with_time_quantum(2);
        let expected: Vec<_> = all_schedulers()
            .iter()
            .map(|s| s.run(&processes, &opts).unwrap())
            .collect();

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = all_schedulers()
                .into_iter()
                .map(|s| {
                    let processes = &processes;
                    let opts = &opts;
                    scope.spawn(move || s.run(processes, opts).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }
}
