//! Shortest-Job-First (non-preemptive).
//!
//! Selection key: smallest burst; ties by earliest arrival, then input order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::{non_preemptive, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Algorithm, Process, SimulationOptions, SimulationResult};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Sjf {
    /// Rule chain used at each dispatch point.
    pub fn rule_engine() -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
    }
}

impl Scheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, processes: &[Process], _options: &SimulationOptions) -> SimulationResult {
        non_preemptive::dispatch(Algorithm::Sjf, processes, &Self::rule_engine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn run(processes: &[Process]) -> SimulationResult {
        Sjf.run(processes, &SimulationOptions::new()).unwrap()
    }

    #[test]
    fn test_sjf_classic() {
        // P1 starts alone; at t=7 P3 (bt=1) beats P2 (bt=4) and P4 (bt=4)
        let processes = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 2, 4),
            Process::new("P3", 4, 1),
            Process::new("P4", 5, 4),
        ];
        let r = run(&processes);

        assert_eq!(
            r.timeline,
            vec![
                ExecutionInterval::new("P1", 0, 7),
                ExecutionInterval::new("P3", 7, 8),
                ExecutionInterval::new("P2", 8, 12),
                ExecutionInterval::new("P4", 12, 16),
            ]
        );
        // WT: P1=0, P2=6, P3=3, P4=7 → 4.0
        assert_eq!(r.details[1].waiting_time, 6);
        assert_eq!(r.details[2].waiting_time, 3);
        assert!((r.average_waiting_time - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_tie_by_arrival() {
        let processes = vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 3, 2),
            Process::new("P3", 1, 2),
        ];
        let r = run(&processes);
        assert_eq!(r.timeline[1].process_id, "P3");
        assert_eq!(r.timeline[2].process_id, "P2");
    }

    #[test]
    fn test_sjf_tie_by_input_order() {
        let processes = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 0, 3),
            Process::new("P3", 0, 3),
        ];
        let r = run(&processes);
        let ids: Vec<_> = r.timeline.iter().map(|i| i.process_id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_sjf_idle_then_shortest() {
        let processes = vec![Process::new("P1", 4, 5), Process::new("P2", 4, 1)];
        let r = run(&processes);
        assert_eq!(r.timeline[0], ExecutionInterval::new("P2", 4, 5));
        assert_eq!(r.timeline[1], ExecutionInterval::new("P1", 5, 10));
    }
}
