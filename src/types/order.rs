//! Order type for the per-period double auction.
//!
//! ## Lifecycle
//!
//! Orders are built fresh from a period's net quantities, mutated in place
//! as the matcher fills them, and discarded when the period ends. Quantity
//! is always non-negative; the side is carried by which queue the order
//! sits in.
//!
//! ## Epsilon Exhaustion
//!
//! Floating-point subtraction leaves residue. An order whose remaining
//! quantity drops below [`QTY_EPSILON`] counts as exhausted, so a near-zero
//! order can never pin a queue cursor forever. The check applies on every
//! decrement, and `fill` clamps at the available quantity so `remaining`
//! never goes negative.

/// Exhaustion threshold for remaining order quantity.
///
/// Orders below this are treated as fully filled. Named (rather than inlined
/// at call sites) so the conservation tests stay deterministic.
pub const QTY_EPSILON: f64 = 1e-9;

/// Which side of the market an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Net deficit: wants to buy energy
    Buy,
    /// Net surplus: wants to sell energy
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A single participant's order for one period.
///
/// ## Example
///
/// ```
/// use peergrid::types::Order;
///
/// let mut order = Order::new(0, 5.0);
/// let filled = order.fill(3.0);
/// assert_eq!(filled, 3.0);
/// assert_eq!(order.remaining, 2.0);
/// assert!(!order.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    /// Roster index of the participant who placed this order
    pub participant: usize,

    /// Unfilled quantity in kWh, always >= 0
    pub remaining: f64,
}

impl Order {
    /// Create an order with its full quantity unfilled.
    ///
    /// `quantity` must be non-negative; the queue builder only ever passes
    /// absolute values.
    pub fn new(participant: usize, quantity: f64) -> Self {
        debug_assert!(quantity >= 0.0, "order quantity must be non-negative");
        Self {
            participant,
            remaining: quantity,
        }
    }

    /// Fill a portion of this order.
    ///
    /// Returns the actual quantity filled, clamped to what remains.
    pub fn fill(&mut self, quantity: f64) -> f64 {
        let actual = quantity.min(self.remaining);
        self.remaining -= actual;
        actual
    }

    /// True once the remaining quantity has fallen below [`QTY_EPSILON`].
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining < QTY_EPSILON
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
