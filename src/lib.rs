//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical uniprocessor disciplines over a static process set
//! and reports per-process waiting/turnaround times, their averages, and
//! the Gantt timeline of execution intervals.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`,
//!   `ProcessDetail`, `SimulationResult`, `Algorithm`, `SimulationOptions`
//! - **`scheduler`**: `Scheduler` trait, FCFS / SJF / Priority / Round-Robin,
//!   metrics, and the all-algorithms comparison
//! - **`dispatching`**: Selection rules and rule engine for non-preemptive dispatch
//! - **`validation`**: Input checks run before any simulation
//! - **`wire`**: Request/response shapes of the JSON contract
//! - **`workload`**: Seeded synthetic process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Algorithm, Process, SimulationOptions};
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 3),
//!     Process::new("P2", 0, 3),
//! ];
//! let opts = SimulationOptions::new().with_time_quantum(1);
//! let result = simulate(&processes, Algorithm::Rr, &opts).unwrap();
//! assert_eq!(result.timeline.len(), 6);
//! assert!((result.average_waiting_time - 2.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod wire;
pub mod workload;

pub use error::SimulationError;
