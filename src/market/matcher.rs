//! The per-period double-auction matcher.
//!
//! ## Algorithm
//!
//! For one period:
//!
//! 1. Build buy/sell queues in roster order (the FCFS priority).
//! 2. Ask the configuration for a clearing price. `None` means the
//!    rationality guard tripped (`import <= export`): skip matching
//!    entirely and settle every order with the grid.
//! 3. Otherwise run the two-cursor loop: trade `min(front buy, front sell)`
//!    at the clearing price, debit the buyer and credit the seller, then
//!    advance whichever cursors fell below the epsilon threshold. Both
//!    cursors retire in the same step when the fronts tie.
//! 4. Settle whatever either queue still holds against the grid tariffs.
//!
//! The loop ends with at least one side fully exhausted. Matching and
//! settlement are total functions: given a well-formed [`PeriodInput`] they
//! cannot fail.

use crate::market::config::MarketConfig;
use crate::market::queues::{build_queues, OrderQueue};
use crate::market::settlement::settle_residuals;
use crate::types::{GridSettlement, PeriodFinancials, PeriodInput, Side, Trade};

/// Everything one period produced: trades, settlements, and the signed
/// per-participant money deltas.
#[derive(Debug, Clone)]
pub struct PeriodOutcome {
    /// Clearing price, or `None` when the rationality guard fired
    pub clearing_price: Option<f64>,

    /// Peer trades in execution order
    pub trades: Vec<Trade>,

    /// Grid settlements for unmatched residuals (buyers first, then
    /// sellers, each in roster order)
    pub settlements: Vec<GridSettlement>,

    /// Signed per-participant money flow for the period
    pub financials: PeriodFinancials,
}

impl PeriodOutcome {
    /// True when the whole period was routed to the grid
    #[inline]
    pub fn is_grid_only(&self) -> bool {
        self.clearing_price.is_none()
    }

    /// Total quantity matched peer-to-peer (counted once per trade)
    pub fn matched_volume(&self) -> f64 {
        self.trades.iter().map(|t| t.quantity).sum()
    }

    /// Total quantity settled with the grid
    pub fn settled_volume(&self) -> f64 {
        self.settlements.iter().map(|s| s.quantity).sum()
    }
}

/// Run one period: match what can be matched, settle the rest.
///
/// ## Example
///
/// ```
/// use peergrid::market::{run_period, MarketConfig};
/// use peergrid::types::PeriodInput;
///
/// let period = PeriodInput::new(0, 0.10, 0.30, vec![5.0, -5.0]);
/// let outcome = run_period(&period, &MarketConfig::default());
///
/// assert_eq!(outcome.clearing_price, Some(0.20));
/// assert_eq!(outcome.trades.len(), 1);
/// assert!(outcome.settlements.is_empty());
/// ```
pub fn run_period(period: &PeriodInput, config: &MarketConfig) -> PeriodOutcome {
    let (mut buys, mut sells) = build_queues(period);
    let mut financials = PeriodFinancials::new(period.participant_count());

    let clearing_price = config.clearing_price(period.export_price, period.import_price);

    let trades = match clearing_price {
        Some(price) => match_fcfs(&mut buys, &mut sells, price, &mut financials),
        // Grid-only branch: cursors stay at zero, so every order is a
        // residual and settles below.
        None => Vec::new(),
    };

    let mut settlements =
        settle_residuals(&buys, Side::Buy, period.import_price, &mut financials);
    settlements.extend(settle_residuals(
        &sells,
        Side::Sell,
        period.export_price,
        &mut financials,
    ));

    PeriodOutcome {
        clearing_price,
        trades,
        settlements,
        financials,
    }
}

/// The FCFS two-cursor matching loop.
///
/// Invariants on exit: at least one queue is done; every emitted trade has
/// strictly positive quantity; buyer and seller deltas for each trade are
/// equal and opposite.
fn match_fcfs(
    buys: &mut OrderQueue,
    sells: &mut OrderQueue,
    price: f64,
    financials: &mut PeriodFinancials,
) -> Vec<Trade> {
    let mut trades = Vec::new();

    // The epsilon rule applies only after a decrement. A fresh order below
    // the threshold still trades; there is no minimum trade size.
    while let (Some(buy), Some(sell)) = (buys.front(), sells.front()) {
        let quantity = buy.remaining.min(sell.remaining);
        let trade = Trade::new(buy.participant, sell.participant, quantity, price);

        financials.debit(trade.buyer, trade.notional());
        financials.credit(trade.seller, trade.notional());

        buys.fill_front(quantity);
        sells.fill_front(quantity);

        // Epsilon check after every decrement; ties retire both cursors in
        // the same step.
        buys.advance_exhausted();
        sells.advance_exhausted();

        trades.push(trade);
    }

    trades
}

// ============================================================================
// Unit Tests
// ============================================================================
