//! Selection rules and rule engine for non-preemptive dispatch.
//!
//! At every dispatch point a non-preemptive scheduler picks one process
//! from the ready set. The pick is expressed as a chain of rules (primary
//! key, then tie-breakers), always closed by input order so the outcome
//! never depends on container iteration order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 0, 3)];
//! assert_eq!(engine.select_best(&processes, 0..2), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher precedence.** SJF returns the burst, FCFS the
/// arrival, priority scheduling the priority rank.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the precedence of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
