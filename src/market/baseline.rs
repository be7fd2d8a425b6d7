//! Grid-only baseline for comparison against the P2P scheme.
//!
//! The baseline asks: what would each participant have paid or earned this
//! period trading only with the grid? Buyers import their whole deficit at
//! the ToU price, sellers export their whole surplus at the FiT price. The
//! baseline is computed for every period regardless of whether the market
//! ran peer-to-peer or grid-only, so the savings comparison is always
//! against the same counterfactual.

use crate::types::{PeriodFinancials, PeriodInput};

/// Compute the grid-only money deltas for one period.
///
/// Pure function of the period input; a zero position contributes nothing.
///
/// ## Example
///
/// ```
/// use peergrid::market::baseline_deltas;
/// use peergrid::types::PeriodInput;
///
/// let period = PeriodInput::new(0, 0.10, 0.30, vec![5.0, -5.0]);
/// let baseline = baseline_deltas(&period);
/// assert_eq!(baseline.delta(0), -1.5); // buys 5 at ToU
/// assert_eq!(baseline.delta(1), 0.5);  // sells 5 at FiT
/// ```
pub fn baseline_deltas(period: &PeriodInput) -> PeriodFinancials {
    let mut financials = PeriodFinancials::new(period.participant_count());

    for (participant, &quantity) in period.net_quantity.iter().enumerate() {
        if quantity > 0.0 {
            financials.debit(participant, quantity * period.import_price);
        } else if quantity < 0.0 {
            financials.credit(participant, -quantity * period.export_price);
        }
    }

    financials
}

// ============================================================================
// Unit Tests
// ============================================================================
