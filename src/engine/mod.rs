//! Simulation engine: the sequential period loop and metric accumulation.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: same input and configuration always produce the same
//!    output tables, byte for byte
//! 2. **Strict sequencing**: periods are processed in input order; the
//!    financial table is positional
//! 3. **Pure accumulation**: aggregates only ever grow; no decrements,
//!    no cross-period state besides the aggregates themselves
//! 4. **No I/O in the loop**: reading and writing happen before and after
//!    the run, never inside it

pub mod simulation;

pub use simulation::{PeriodRecord, SimulationEngine, SimulationResult};
