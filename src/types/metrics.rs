//! Per-participant financial state: one-period deltas and run aggregates.
//!
//! ## Ownership
//!
//! [`PeriodFinancials`] is rebuilt fresh each period and discarded once the
//! accumulator has folded it in. [`AggregateMetrics`] is the only long-lived
//! mutable state in a run; it is owned by the simulation engine and only
//! ever added to, never decremented.

/// Signed per-participant money flow for a single period.
///
/// Negative = net cost, positive = net revenue. Indexed by roster position.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodFinancials {
    deltas: Vec<f64>,
}

impl PeriodFinancials {
    /// Create a zeroed ledger for `participant_count` participants.
    pub fn new(participant_count: usize) -> Self {
        Self {
            deltas: vec![0.0; participant_count],
        }
    }

    /// Add revenue for a participant.
    #[inline]
    pub fn credit(&mut self, participant: usize, amount: f64) {
        self.deltas[participant] += amount;
    }

    /// Add cost for a participant.
    #[inline]
    pub fn debit(&mut self, participant: usize, amount: f64) {
        self.deltas[participant] -= amount;
    }

    /// Signed delta for a participant
    #[inline]
    pub fn delta(&self, participant: usize) -> f64 {
        self.deltas[participant]
    }

    /// All deltas in roster order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.deltas
    }

    /// Number of participants covered
    #[inline]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// True when no participants are covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

/// Running totals for one participant across the whole simulation.
///
/// All four fields are monotone: kWh fields only receive non-negative
/// additions, and the net fields only receive completed period deltas.
///
/// ## Example
///
/// ```
/// use peergrid::types::AggregateMetrics;
///
/// let mut metrics = AggregateMetrics::new();
/// metrics.p2p_kwh += 5.0;
/// metrics.p2p_net += -1.0;
/// metrics.baseline_net += -1.5;
/// assert_eq!(metrics.savings(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateMetrics {
    /// Total energy traded peer-to-peer, as buyer or seller (kWh)
    pub p2p_kwh: f64,

    /// Total energy settled with the grid (kWh)
    pub grid_kwh: f64,

    /// Net money flow under the grid-only baseline
    pub baseline_net: f64,

    /// Net money flow under the P2P scheme
    pub p2p_net: f64,
}

impl AggregateMetrics {
    /// Create zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Money saved by the P2P scheme relative to the grid-only baseline
    #[inline]
    pub fn savings(&self) -> f64 {
        self.p2p_net - self.baseline_net
    }

    /// Total energy volume the participant moved, on either channel (kWh)
    #[inline]
    pub fn total_kwh(&self) -> f64 {
        self.p2p_kwh + self.grid_kwh
    }

    /// Share of the participant's volume traded peer-to-peer, in percent.
    ///
    /// Returns `0.0` for a participant who moved no energy at all.
    pub fn peer_trade_pct(&self) -> f64 {
        let total = self.total_kwh();
        if total > 0.0 {
            self.p2p_kwh / total * 100.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
