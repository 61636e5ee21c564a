//! Synthetic process-set generation.
//!
//! Draws arrivals, bursts and priorities uniformly from configurable
//! ranges. IDs are `P1..Pn` in generation order. With a seeded RNG the
//! output is fully reproducible.

use rand::Rng;

use crate::models::Process;

/// Ranges for generated processes (all bounds inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival tick.
    pub max_arrival: i64,
    /// Shortest burst (clamped to ≥ 1).
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Largest priority value (priorities start at 0).
    pub max_priority: i32,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

/// Generates a process set.
///
/// Every process gets a priority, so the set is valid for all four
/// disciplines.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_cpusched::workload::{generate, WorkloadConfig};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = generate(&WorkloadConfig::new(3), &mut rng);
/// assert_eq!(processes.len(), 3);
/// assert_eq!(processes[2].id, "P3");
/// ```
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(0);

    (1..=config.count)
        .map(|n| {
            Process::new(
                format!("P{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
            .with_priority(rng.random_range(0..=max_priority))
        })
        .collect()
}
