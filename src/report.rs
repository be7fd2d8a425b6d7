//! Report builder: per-participant savings summary.
//!
//! Derives the six display fields from the accumulated metrics and rounds
//! them to fixed decimal precision — 4 places for money, 2 for volumes and
//! percentages — so the output table is stable across runs and platforms.
//! Rounding happens here and only here; the core carries full-precision
//! values throughout.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::types::{AggregateMetrics, Roster};

/// Decimal places for monetary report fields
pub const MONEY_DP: u32 = 4;

/// Decimal places for volume and percentage report fields
pub const VOLUME_DP: u32 = 2;

/// One participant's row in the summary report.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Participant name from the roster
    pub participant: String,

    /// Net money flow under the grid-only baseline
    pub baseline_net: f64,

    /// Net money flow under the P2P scheme
    pub p2p_net: f64,

    /// `p2p_net - baseline_net`
    pub savings: f64,

    /// Energy traded peer-to-peer (kWh)
    pub p2p_kwh: f64,

    /// Energy settled with the grid (kWh)
    pub grid_kwh: f64,

    /// Share of volume traded peer-to-peer, in percent (0 when no volume)
    pub peer_trade_pct: f64,
}

/// Build the summary report, one row per roster participant.
///
/// `metrics` must be in roster order (as produced by the engine).
pub fn build_report(roster: &Roster, metrics: &[AggregateMetrics]) -> Vec<SummaryRow> {
    debug_assert_eq!(roster.len(), metrics.len());

    roster
        .iter()
        .zip(metrics)
        .map(|(name, m)| SummaryRow {
            participant: name.to_string(),
            baseline_net: round_dp(m.baseline_net, MONEY_DP),
            p2p_net: round_dp(m.p2p_net, MONEY_DP),
            savings: round_dp(m.savings(), MONEY_DP),
            p2p_kwh: round_dp(m.p2p_kwh, VOLUME_DP),
            grid_kwh: round_dp(m.grid_kwh, VOLUME_DP),
            peer_trade_pct: round_dp(m.peer_trade_pct(), VOLUME_DP),
        })
        .collect()
}

/// Round a value to `dp` decimal places via `rust_decimal`.
///
/// Binary floats cannot represent most decimal fractions exactly;
/// round-tripping through `Decimal` gives the same displayed figures on
/// every platform. Non-finite inputs pass through unchanged.
fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(dp))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(1.23456789, 4), 1.2346);
        assert_eq!(round_dp(70.0000001, 2), 70.0);
        assert_eq!(round_dp(-0.123456, 4), -0.1235);
        assert_eq!(round_dp(1.5, 4), 1.5);
    }

    #[test]
    fn test_report_fields() {
        let metrics = [AggregateMetrics {
            p2p_kwh: 7.0,
            grid_kwh: 3.0,
            baseline_net: -3.123456,
            p2p_net: -2.000011,
        }];
        let rows = build_report(&roster(&["house_1"]), &metrics);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.participant, "house_1");
        assert_eq!(row.baseline_net, -3.1235);
        assert_eq!(row.p2p_net, -2.0);
        assert_eq!(row.savings, 1.1234);
        assert_eq!(row.p2p_kwh, 7.0);
        assert_eq!(row.grid_kwh, 3.0);
        assert_eq!(row.peer_trade_pct, 70.0);
    }

    #[test]
    fn test_report_zero_volume_pct() {
        let rows = build_report(&roster(&["idle"]), &[AggregateMetrics::new()]);
        assert_eq!(rows[0].peer_trade_pct, 0.0);
    }

    #[test]
    fn test_report_empty_roster() {
        let rows = build_report(&roster(&[]), &[]);
        assert!(rows.is_empty());
    }
}
