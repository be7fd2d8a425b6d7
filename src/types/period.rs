//! Per-period market input.
//!
//! A `PeriodInput` is one row of the input table: the two grid prices plus
//! one signed net-energy position per roster participant. The core treats
//! it as read-only; all mutable per-period state (order queues, financial
//! deltas) is derived from it and discarded at period end.

/// Input for a single trading period.
///
/// ## Sign Convention
///
/// `net_quantity[p] > 0` means participant `p` has a deficit and must buy;
/// `< 0` means a surplus to sell; exactly `0` means the participant sits
/// the period out entirely.
///
/// ## Price Relationship
///
/// `import_price >= export_price` is NOT guaranteed. The matcher's
/// rationality guard handles inverted or equal prices by routing the whole
/// period to the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodInput {
    /// Zero-based position of this period in the run
    pub index: usize,

    /// Feed-in tariff: price the grid pays for exported surplus (FiT)
    pub export_price: f64,

    /// Time-of-use tariff: price the grid charges for imports (ToU)
    pub import_price: f64,

    /// Signed net position per participant, in roster order
    pub net_quantity: Vec<f64>,
}

impl PeriodInput {
    /// Create a period input.
    pub fn new(index: usize, export_price: f64, import_price: f64, net_quantity: Vec<f64>) -> Self {
        Self {
            index,
            export_price,
            import_price,
            net_quantity,
        }
    }

    /// Number of participants this period covers
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.net_quantity.len()
    }

    /// Total absolute energy position across all participants.
    ///
    /// Conservation requires this to equal twice the matched volume plus
    /// the grid-settled volume for the period.
    pub fn abs_volume(&self) -> f64 {
        self.net_quantity.iter().map(|q| q.abs()).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
