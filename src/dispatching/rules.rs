//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::{PriorityOrder, Process};

/// Shortest burst first.
///
/// Minimizes mean waiting time among non-preemptive disciplines when all
/// processes are ready at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }
}

/// Static priority.
///
/// Ranks by `process.priority` under the configured [`PriorityOrder`].
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityRank {
    /// Which end of the priority scale runs first.
    pub order: PriorityOrder,
}

impl PriorityRank {
    /// Creates a priority rule with the given convention.
    pub fn new(order: PriorityOrder) -> Self {
        Self { order }
    }
}

impl SelectionRule for PriorityRank {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process
            .priority
            .map(|p| self.order.rank(p))
            .unwrap_or(RuleScore::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst() {
        let short = Process::new("short", 0, 2);
        let long = Process::new("long", 0, 9);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_earliest_arrival() {
        let first = Process::new("first", 1, 5);
        let second = Process::new("second", 3, 1);
        assert!(EarliestArrival.evaluate(&first) < EarliestArrival.evaluate(&second));
    }

    #[test]
    fn test_priority_lower_first() {
        let rule = PriorityRank::new(PriorityOrder::LowerFirst);
        let urgent = Process::new("urgent", 0, 1).with_priority(0);
        let relaxed = Process::new("relaxed", 0, 1).with_priority(7);
        assert!(rule.evaluate(&urgent) < rule.evaluate(&relaxed));
    }

    #[test]
    fn test_priority_higher_first() {
        let rule = PriorityRank::new(PriorityOrder::HigherFirst);
        let urgent = Process::new("urgent", 0, 1).with_priority(7);
        let relaxed = Process::new("relaxed", 0, 1).with_priority(0);
        assert!(rule.evaluate(&urgent) < rule.evaluate(&relaxed));
    }

    #[test]
    fn test_priority_missing_ranks_last() {
        let rule = PriorityRank::default();
        let none = Process::new("none", 0, 1);
        let some = Process::new("some", 0, 1).with_priority(i32::MAX);
        assert!(rule.evaluate(&some) < rule.evaluate(&none));
    }
}
