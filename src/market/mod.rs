//! The per-period P2P market: clearing price, FCFS matching, settlement,
//! and the grid-only baseline.
//!
//! ## Matching Rules
//!
//! - Priority is roster (column) order on both sides, nothing else
//! - All trades in a period execute at one clearing price
//! - Partial fills are supported; residuals settle with the grid
//! - `import <= export` routes the whole period to the grid (zero trades)
//!
//! All state in this module is scoped to a single period and discarded when
//! [`run_period`] returns.

mod baseline;
mod config;
mod matcher;
mod queues;
mod settlement;

pub use baseline::baseline_deltas;
pub use config::{MarketConfig, DEFAULT_ALPHA};
pub use matcher::{run_period, PeriodOutcome};
pub use queues::{build_queues, OrderQueue};
pub use settlement::settle_residuals;
