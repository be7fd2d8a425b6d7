//! Trade type representing an executed peer-to-peer match.
//!
//! ## Zero-Sum Invariant
//!
//! Every trade is a pure transfer: the buyer's financial delta and the
//! seller's are equal in magnitude and opposite in sign. The clearing price
//! moves money between peers but never creates or destroys it.

/// A trade between one buyer and one seller at the period clearing price.
///
/// Immutable once created; `quantity` is always strictly positive.
///
/// ## Example
///
/// ```
/// use peergrid::types::Trade;
///
/// let trade = Trade::new(0, 1, 5.0, 0.20);
/// assert_eq!(trade.buyer_delta(), -1.0);
/// assert_eq!(trade.seller_delta(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    /// Roster index of the buying participant
    pub buyer: usize,

    /// Roster index of the selling participant
    pub seller: usize,

    /// Traded energy in kWh, > 0
    pub quantity: f64,

    /// Clearing price for the period this trade belongs to
    pub price: f64,
}

impl Trade {
    /// Create a new trade.
    pub fn new(buyer: usize, seller: usize, quantity: f64, price: f64) -> Self {
        debug_assert!(quantity > 0.0, "trade quantity must be positive");
        Self {
            buyer,
            seller,
            quantity,
            price,
        }
    }

    /// Monetary value of the trade (`quantity * price`)
    #[inline]
    pub fn notional(&self) -> f64 {
        self.quantity * self.price
    }

    /// The buyer's signed financial delta (a cost)
    #[inline]
    pub fn buyer_delta(&self) -> f64 {
        -self.notional()
    }

    /// The seller's signed financial delta (a revenue)
    #[inline]
    pub fn seller_delta(&self) -> f64 {
        self.notional()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_new() {
        let trade = Trade::new(2, 5, 4.0, 0.25);

        assert_eq!(trade.buyer, 2);
        assert_eq!(trade.seller, 5);
        assert_eq!(trade.quantity, 4.0);
        assert_eq!(trade.price, 0.25);
    }

    #[test]
    fn test_trade_notional() {
        let trade = Trade::new(0, 1, 4.0, 0.25);
        assert_eq!(trade.notional(), 1.0);
    }

    #[test]
    fn test_trade_zero_sum() {
        let trade = Trade::new(0, 1, 3.5, 0.18);

        assert_eq!(trade.buyer_delta(), -trade.seller_delta());
        assert_eq!(trade.buyer_delta(), -(trade.quantity * trade.price));
    }
}
