//! FCFS order queues for one trading period.
//!
//! ## Design
//!
//! A queue is a `Vec<Order>` in roster order plus a cursor. The cursor is
//! the matching frontier: orders before it are fully consumed, the order at
//! it is partially fillable, orders past it are untouched. Matching only
//! ever touches the front order, and the cursor only ever moves forward.
//!
//! ```text
//! [ done | done | FRONT (partial) | waiting | waiting ]
//!                 ^cursor
//! ```
//!
//! Roster order is the arrival order: there is no price or timestamp
//! priority, so position in the queue is the whole priority rule.

use crate::types::{Order, PeriodInput};

/// One side's order queue for a single period.
#[derive(Debug, Clone)]
pub struct OrderQueue {
    orders: Vec<Order>,
    cursor: usize,
}

impl OrderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            cursor: 0,
        }
    }

    /// Append an order at the back of the queue.
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// The order at the matching frontier, if any side remains.
    #[inline]
    pub fn front(&self) -> Option<Order> {
        self.orders.get(self.cursor).copied()
    }

    /// Fill the front order by `quantity`, returning the actual fill.
    ///
    /// # Panics
    ///
    /// Panics if the queue is already done; the matcher checks `front`
    /// first.
    pub fn fill_front(&mut self, quantity: f64) -> f64 {
        self.orders[self.cursor].fill(quantity)
    }

    /// Advance the cursor past any exhausted front orders.
    ///
    /// Applied after every decrement so sub-epsilon residue can never leave
    /// a near-zero order stuck at the frontier.
    pub fn advance_exhausted(&mut self) {
        while self
            .orders
            .get(self.cursor)
            .is_some_and(|order| order.is_exhausted())
        {
            self.cursor += 1;
        }
    }

    /// True once the cursor has passed the last order.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.orders.len()
    }

    /// Orders at or past the cursor that still carry quantity.
    ///
    /// These are the residuals grid settlement consumes. Any positive
    /// remaining quantity settles, sub-epsilon included; the cursor only
    /// skips orders the matcher has already drained.
    pub fn residuals(&self) -> impl Iterator<Item = &Order> {
        self.orders[self.cursor..]
            .iter()
            .filter(|order| order.remaining > 0.0)
    }

    /// Number of orders in the queue (consumed or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True if the queue was built with no orders at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the period's buy and sell queues in roster order.
///
/// Buyers are participants with `net_quantity > 0`, sellers those with
/// `net_quantity < 0` (queued with the absolute value). Exact zeros enter
/// neither queue. Tiny non-zero positions are queued like any other; there
/// is no minimum order size.
pub fn build_queues(period: &PeriodInput) -> (OrderQueue, OrderQueue) {
    let mut buys = OrderQueue::new();
    let mut sells = OrderQueue::new();

    for (participant, &quantity) in period.net_quantity.iter().enumerate() {
        if quantity > 0.0 {
            buys.push(Order::new(participant, quantity));
        } else if quantity < 0.0 {
            sells.push(Order::new(participant, -quantity));
        }
    }

    (buys, sells)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn period(quantities: &[f64]) -> PeriodInput {
        PeriodInput::new(0, 0.10, 0.30, quantities.to_vec())
    }

    #[test]
    fn test_build_queues_splits_by_sign() {
        let (buys, sells) = build_queues(&period(&[5.0, -3.0, 0.0, 2.0, -1.0]));

        assert_eq!(buys.len(), 2);
        assert_eq!(sells.len(), 2);

        // Roster order preserved within each side
        assert_eq!(buys.front().unwrap().participant, 0);
        assert_eq!(sells.front().unwrap().participant, 1);

        // Sellers queue absolute quantities
        assert_eq!(sells.front().unwrap().remaining, 3.0);
    }

    #[test]
    fn test_build_queues_excludes_zeros() {
        let (buys, sells) = build_queues(&period(&[0.0, 0.0]));
        assert!(buys.is_empty());
        assert!(sells.is_empty());
        assert!(buys.is_done());
    }

    #[test]
    fn test_build_queues_keeps_tiny_orders() {
        // No minimum trade size: a sub-epsilon position still enters.
        let (buys, sells) = build_queues(&period(&[1e-12, -1e-12]));
        assert_eq!(buys.len(), 1);
        assert_eq!(sells.len(), 1);
    }

    #[test]
    fn test_fill_and_advance() {
        let (mut buys, _) = build_queues(&period(&[2.0, 3.0, -5.0]));

        buys.fill_front(2.0);
        assert!(!buys.is_done());
        buys.advance_exhausted();
        assert_eq!(buys.front().unwrap().participant, 1);

        buys.fill_front(3.0);
        buys.advance_exhausted();
        assert!(buys.is_done());
        assert!(buys.front().is_none());
    }

    #[test]
    fn test_advance_skips_consecutive_exhausted() {
        // Two pre-exhausted tiny orders at the frontier are skipped in one
        // call once the threshold has been crossed.
        let mut queue = OrderQueue::new();
        queue.push(Order::new(0, 1e-10));
        queue.push(Order::new(1, 1e-11));
        queue.push(Order::new(2, 1.0));

        queue.advance_exhausted();
        assert_eq!(queue.front().unwrap().participant, 2);
    }

    #[test]
    fn test_residuals_after_partial_consumption() {
        let (mut buys, _) = build_queues(&period(&[2.0, 3.0, 4.0, -1.0]));

        // Consume the first order, partially fill the second
        buys.fill_front(2.0);
        buys.advance_exhausted();
        buys.fill_front(1.0);

        let residuals: Vec<(usize, f64)> = buys
            .residuals()
            .map(|o| (o.participant, o.remaining))
            .collect();
        assert_eq!(residuals, vec![(1, 2.0), (2, 4.0)]);
    }

}
