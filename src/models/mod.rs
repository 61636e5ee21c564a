//! CPU scheduling domain models.
//!
//! Provides the input process record, the run configuration, and the
//! output types (Gantt intervals, per-process details, averaged result).
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Batch queue |
//! |------------|-------------|-------------|
//! | Process | Job / PCB | Submitted job |
//! | ExecutionInterval | Gantt bar | Run slot |
//! | SimulationResult | Gantt chart + table | Run report |

mod options;
mod process;
mod schedule;

pub use options::{Algorithm, PriorityOrder, SimulationOptions, DEFAULT_TIME_QUANTUM};
pub use process::Process;
pub use schedule::{ExecutionInterval, ProcessDetail, Segments, SimulationResult, TimelineSegment};
