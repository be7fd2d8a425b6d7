//! Core data types for the peergrid simulator.
//!
//! ## Types
//!
//! - [`Roster`]: ordered, unique participant names; order is FCFS priority
//! - [`PeriodInput`]: one trading period's prices and net positions
//! - [`Order`] / [`Side`]: per-period matching state
//! - [`Trade`]: an executed peer-to-peer match
//! - [`GridSettlement`]: an unmatched residual settled with the grid
//! - [`PeriodFinancials`] / [`AggregateMetrics`]: money and volume tracking
//!
//! All quantities are `f64` kWh; all money is `f64` in the input table's
//! currency. The named [`QTY_EPSILON`] threshold governs when a partially
//! filled order counts as exhausted.

mod metrics;
mod order;
mod participant;
mod period;
mod settlement;
mod trade;

// Re-export all types at module level
pub use metrics::{AggregateMetrics, PeriodFinancials};
pub use order::{Order, Side, QTY_EPSILON};
pub use participant::Roster;
pub use period::PeriodInput;
pub use settlement::GridSettlement;
pub use trade::Trade;
