//! The simulation engine: a strictly sequential loop over trading periods.
//!
//! ## Sequencing
//!
//! Periods run one at a time in input order. The aggregate totals are
//! commutative sums, but the per-period financial table is positional, so
//! the loop order is the output order. Nothing in this path performs I/O
//! or suspends; it is a finite, bounded fold.
//!
//! ## Accumulation
//!
//! The engine owns the only long-lived mutable state: one
//! [`AggregateMetrics`] per participant. Every period contributes pure
//! additions — matched volume, settled volume, the period's money delta,
//! and the grid-only baseline delta. No field is ever decremented.

use crate::market::{baseline_deltas, run_period, MarketConfig, PeriodOutcome};
use crate::types::{AggregateMetrics, PeriodFinancials, PeriodInput};

/// One row of the per-period financial output table.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRecord {
    /// Zero-based period index
    pub index: usize,

    /// Export (FiT) price, passed through from the input
    pub export_price: f64,

    /// Import (ToU) price, passed through from the input
    pub import_price: f64,

    /// Signed money delta per participant under the P2P scheme
    pub deltas: Vec<f64>,
}

/// Final output of a run: the positional financial table plus the
/// per-participant aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// One record per period, in input order
    pub periods: Vec<PeriodRecord>,

    /// One aggregate per participant, in roster order
    pub metrics: Vec<AggregateMetrics>,
}

/// Runs the period loop and owns the per-participant aggregates.
///
/// ## Example
///
/// ```
/// use peergrid::engine::SimulationEngine;
/// use peergrid::market::MarketConfig;
/// use peergrid::types::PeriodInput;
///
/// let periods = vec![PeriodInput::new(0, 0.10, 0.30, vec![5.0, -5.0])];
/// let engine = SimulationEngine::new(MarketConfig::default(), 2);
/// let result = engine.run(&periods);
///
/// assert_eq!(result.periods.len(), 1);
/// assert_eq!(result.metrics[0].p2p_kwh, 5.0);
/// ```
#[derive(Debug)]
pub struct SimulationEngine {
    config: MarketConfig,
    metrics: Vec<AggregateMetrics>,
}

impl SimulationEngine {
    /// Create an engine for `participant_count` participants.
    pub fn new(config: MarketConfig, participant_count: usize) -> Self {
        Self {
            config,
            metrics: vec![AggregateMetrics::new(); participant_count],
        }
    }

    /// Process every period in order and return the run result.
    ///
    /// Each period's `net_quantity` must cover the same participant set the
    /// engine was built for.
    pub fn run(mut self, periods: &[PeriodInput]) -> SimulationResult {
        let mut records = Vec::with_capacity(periods.len());

        for period in periods {
            debug_assert_eq!(
                period.participant_count(),
                self.metrics.len(),
                "period {} covers a different participant set",
                period.index
            );

            let baseline = baseline_deltas(period);
            let outcome = run_period(period, &self.config);

            tracing::debug!(
                period = period.index,
                clearing_price = ?outcome.clearing_price,
                trades = outcome.trades.len(),
                matched_kwh = outcome.matched_volume(),
                settled_kwh = outcome.settled_volume(),
                "period complete"
            );

            self.accumulate(&outcome, &baseline);

            records.push(PeriodRecord {
                index: period.index,
                export_price: period.export_price,
                import_price: period.import_price,
                deltas: outcome.financials.as_slice().to_vec(),
            });
        }

        tracing::info!(
            periods = periods.len(),
            participants = self.metrics.len(),
            "simulation complete"
        );

        SimulationResult {
            periods: records,
            metrics: self.metrics,
        }
    }

    /// Fold one period's outcome and baseline into the running aggregates.
    fn accumulate(&mut self, outcome: &PeriodOutcome, baseline: &PeriodFinancials) {
        for trade in &outcome.trades {
            self.metrics[trade.buyer].p2p_kwh += trade.quantity;
            self.metrics[trade.seller].p2p_kwh += trade.quantity;
        }

        for settlement in &outcome.settlements {
            self.metrics[settlement.participant].grid_kwh += settlement.quantity;
        }

        for (participant, metrics) in self.metrics.iter_mut().enumerate() {
            metrics.p2p_net += outcome.financials.delta(participant);
            metrics.baseline_net += baseline.delta(participant);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
