//! # peergrid
//!
//! Peer-to-peer local energy market simulator with a grid-only baseline
//! comparison.
//!
//! ## Architecture
//!
//! - **Types**: participant roster, period inputs, orders, trades,
//!   settlements, and financial metrics
//! - **Market**: the per-period double auction — clearing price, FCFS
//!   matching, grid settlement, and the grid-only baseline
//! - **Engine**: the strictly sequential period loop and metric
//!   accumulation
//! - **Report**: savings summary with fixed-decimal display rounding
//! - **Io**: thin CSV collaborators at the run boundary
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical input and configuration yield
//!    byte-identical output tables
//! 2. **Total core**: matching, settlement, and accumulation never fail on
//!    well-formed input; all error handling lives at the I/O boundary
//! 3. **Explicit ordering**: participant column order is the FCFS priority
//!    and the output column order — an invariant, not an accident
//! 4. **Named epsilon**: the `1e-9` exhaustion threshold is a single
//!    constant ([`QTY_EPSILON`]) applied on every decrement
//!
//! ## Example
//!
//! ```
//! use peergrid::engine::SimulationEngine;
//! use peergrid::market::MarketConfig;
//! use peergrid::types::PeriodInput;
//!
//! // One period: A needs 5 kWh, B has 5 kWh spare, prices 0.10/0.30.
//! let periods = vec![PeriodInput::new(0, 0.10, 0.30, vec![5.0, -5.0])];
//!
//! let engine = SimulationEngine::new(MarketConfig::default(), 2);
//! let result = engine.run(&periods);
//!
//! // Both sides split the spread: 0.50 saved each vs. grid-only.
//! assert_eq!(result.metrics[0].savings(), 0.5);
//! assert_eq!(result.metrics[1].savings(), 0.5);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: roster, periods, orders, trades, metrics
pub mod types;

/// Per-period market: clearing price, FCFS matching, settlement, baseline
pub mod market;

/// Simulation engine: sequential period loop and accumulation
pub mod engine;

/// Report builder: per-participant savings summary
pub mod report;

/// Thin CSV I/O collaborators
pub mod io;

/// Crate error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{PeriodRecord, SimulationEngine, SimulationResult};
pub use error::MarketError;
pub use market::{run_period, MarketConfig, PeriodOutcome, DEFAULT_ALPHA};
pub use report::{build_report, SummaryRow};
pub use types::{
    AggregateMetrics, GridSettlement, Order, PeriodFinancials, PeriodInput, Roster, Side, Trade,
    QTY_EPSILON,
};
