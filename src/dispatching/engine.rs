//! Rule engine for multi-key dispatch.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. The final tie-breaker is always the input index.

use std::cmp::Ordering;
use std::sync::Arc;

use super::SelectionRule;
use crate::models::Process;

/// A composable rule chain for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
/// use u_cpusched::models::{PriorityOrder, Process};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityRank::new(PriorityOrder::LowerFirst))
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes by index. `Less` means `a` runs first.
    pub fn compare(&self, processes: &[Process], a: usize, b: usize) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(&processes[a]).cmp(&rule.evaluate(&processes[b]));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.cmp(&b)
    }

    /// Returns the best process among `candidates` (indices into `processes`).
    pub fn select_best(
        &self,
        processes: &[Process],
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(processes, a, b))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
