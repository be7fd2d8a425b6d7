//! Grid settlement record for unmatched residual quantity.
//!
//! After peer matching stops (or when the rationality guard routes a whole
//! period to the grid), every order with remaining quantity settles against
//! the grid at the one-sided tariff: buyers pay the import (ToU) price,
//! sellers receive the export (FiT) price.

use crate::types::Side;

/// One participant's grid settlement for one period.
///
/// ## Example
///
/// ```
/// use peergrid::types::{GridSettlement, Side};
///
/// // A buyer importing 3 kWh from the grid at 0.25/kWh
/// let settlement = GridSettlement::new(0, Side::Buy, 3.0, 0.25);
/// assert_eq!(settlement.value(), -0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettlement {
    /// Roster index of the settling participant
    pub participant: usize,

    /// Which side of the market the residual came from
    pub side: Side,

    /// Settled energy in kWh, > 0
    pub quantity: f64,

    /// Grid tariff applied (import price for buyers, export price for sellers)
    pub price: f64,
}

impl GridSettlement {
    /// Create a settlement record.
    pub fn new(participant: usize, side: Side, quantity: f64, price: f64) -> Self {
        debug_assert!(quantity > 0.0, "settlement quantity must be positive");
        Self {
            participant,
            side,
            quantity,
            price,
        }
    }

    /// Signed financial delta: negative (cost) for buyers, positive
    /// (revenue) for sellers.
    pub fn value(&self) -> f64 {
        match self.side {
            Side::Buy => -(self.quantity * self.price),
            Side::Sell => self.quantity * self.price,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
