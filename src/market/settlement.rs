//! Grid settlement for unmatched residual quantity.
//!
//! Settlement is the market's backstop: whatever the auction left unfilled
//! trades directly with the grid at the one-sided tariff. In the grid-only
//! branch the queues are untouched, so "residuals" covers every order. A
//! period with nothing left over performs no settlement at all. This
//! function is total: it never fails.

use crate::market::queues::OrderQueue;
use crate::types::{GridSettlement, PeriodFinancials, Side};

/// Settle one queue's residuals at the given grid tariff.
///
/// Buyers pay `remaining * price` (import tariff), sellers receive
/// `remaining * price` (export tariff). Emits one [`GridSettlement`] per
/// residual order, in queue (roster) order.
pub fn settle_residuals(
    queue: &OrderQueue,
    side: Side,
    price: f64,
    financials: &mut PeriodFinancials,
) -> Vec<GridSettlement> {
    let mut settlements = Vec::new();

    for order in queue.residuals() {
        let settlement = GridSettlement::new(order.participant, side, order.remaining, price);
        match side {
            Side::Buy => financials.debit(order.participant, settlement.quantity * price),
            Side::Sell => financials.credit(order.participant, settlement.quantity * price),
        }
        settlements.push(settlement);
    }

    settlements
}

// ============================================================================
// Unit Tests
// ============================================================================
