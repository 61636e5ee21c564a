//! Priority scheduling (non-preemptive, static priorities).
//!
//! Selection key: priority rank under [`PriorityOrder`]; ties by earliest
//! arrival, then input order. Priorities never change during a run.

use super::{non_preemptive, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Algorithm, PriorityOrder, Process, SimulationOptions, SimulationResult};

/// Non-preemptive priority scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, SimulationOptions};
/// use u_cpusched::scheduler::{PriorityScheduler, Scheduler};
///
/// let processes = vec![
///     Process::new("P1", 0, 3).with_priority(2),
///     Process::new("P2", 0, 3).with_priority(0),
/// ];
/// let result = PriorityScheduler.run(&processes, &SimulationOptions::new()).unwrap();
/// assert_eq!(result.timeline[0].process_id, "P2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Rule chain used at each dispatch point.
    pub fn rule_engine(order: PriorityOrder) -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::PriorityRank::new(order))
            .with_tie_breaker(rules::EarliestArrival)
    }
}

impl Scheduler for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, processes: &[Process], options: &SimulationOptions) -> SimulationResult {
        non_preemptive::dispatch(
            Algorithm::Priority,
            processes,
            &Self::rule_engine(options.priority_order),
        )
    }
}
