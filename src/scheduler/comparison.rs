//! Run every discipline on the same input and pick the best.
//!
//! "Best" is the minimum average waiting time. Ties go to the earlier
//! algorithm in the preference order `fcfs, sjf, priority, rr`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::all_schedulers;
use crate::error::SimulationError;
use crate::models::{Algorithm, Process, SimulationOptions, SimulationResult};
use crate::validation::{validate_processes, validate_quantum};

/// Results of all four disciplines over one process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Result per algorithm.
    pub results: BTreeMap<Algorithm, SimulationResult>,
    /// Algorithm with the lowest average waiting time.
    pub best: Algorithm,
    /// Average waiting time per algorithm.
    #[serde(rename = "awts")]
    pub average_waiting_times: BTreeMap<Algorithm, f64>,
}

impl Comparison {
    /// Builds a comparison from per-algorithm results.
    ///
    /// Returns `None` when `results` is empty.
    pub fn from_results(results: BTreeMap<Algorithm, SimulationResult>) -> Option<Self> {
        let average_waiting_times: BTreeMap<Algorithm, f64> = results
            .iter()
            .map(|(&algo, r)| (algo, r.average_waiting_time))
            .collect();

        // BTreeMap iterates in preference order; strict `<` keeps the first of equals.
        let mut best: Option<(Algorithm, f64)> = None;
        for (&algo, &awt) in &average_waiting_times {
            match best {
                Some((_, best_awt)) if awt >= best_awt => {}
                _ => best = Some((algo, awt)),
            }
        }

        best.map(|(best, _)| Self {
            results,
            best,
            average_waiting_times,
        })
    }

    /// Result of the selected algorithm.
    pub fn best_result(&self) -> Option<&SimulationResult> {
        self.results.get(&self.best)
    }

    /// Average waiting time of the selected algorithm.
    pub fn best_average_waiting_time(&self) -> f64 {
        self.average_waiting_times
            .get(&self.best)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Runs FCFS, SJF, Priority and RR on the same processes.
///
/// Every process needs a priority and `options.time_quantum` must be ≥ 1,
/// since both Priority and RR take part.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, Process, SimulationOptions};
/// use u_cpusched::scheduler::compare;
///
/// let processes = vec![
///     Process::new("P1", 0, 8).with_priority(1),
///     Process::new("P2", 0, 1).with_priority(2),
/// ];
/// let cmp = compare(&processes, &SimulationOptions::new().with_time_quantum(2)).unwrap();
/// assert_eq!(cmp.best, Algorithm::Sjf);
/// assert_eq!(cmp.results.len(), 4);
/// ```
pub fn compare(
    processes: &[Process],
    options: &SimulationOptions,
) -> Result<Comparison, SimulationError> {
    validate_quantum(options.time_quantum)?;
    validate_processes(processes, true)?;

    let results: BTreeMap<Algorithm, SimulationResult> = all_schedulers()
        .iter()
        .map(|s| (s.algorithm(), s.schedule(processes, options)))
        .collect();

    let comparison = Comparison::from_results(results).unwrap_or_else(|| Comparison {
        results: BTreeMap::new(),
        best: Algorithm::Fcfs,
        average_waiting_times: BTreeMap::new(),
    });

    debug!(
        best = %comparison.best,
        awt = comparison.best_average_waiting_time(),
        processes = processes.len(),
        "comparison complete"
    );
    Ok(comparison)
}
