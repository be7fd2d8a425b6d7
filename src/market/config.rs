//! Clearing-price configuration.
//!
//! ## Pricing Rule
//!
//! When a P2P market is viable (`import_price > export_price`), every trade
//! in the period executes at a single clearing price placed inside the grid
//! price band by linear interpolation:
//!
//! ```text
//! price = export + alpha * (import - export),    alpha in [0, 1]
//! ```
//!
//! `alpha = 0.5` (the default) is the midpoint; `alpha = 0` pins the price
//! to the export tariff, `alpha = 1` to the import tariff. The price is not
//! recomputed from order-book pressure; it is a run-level configuration
//! value.
//!
//! ## Rationality Guard
//!
//! When `import_price <= export_price` no peer trade can beat the grid, so
//! [`MarketConfig::clearing_price`] returns `None` and the whole period is
//! settled grid-only. Equality trips the guard: it is a hard branch, not a
//! degenerate market at `price = export = import`.

use crate::error::MarketError;

/// Default clearing-price placement: the midpoint of the grid price band.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Run-level market configuration.
///
/// ## Example
///
/// ```
/// use peergrid::market::MarketConfig;
///
/// let config = MarketConfig::new(0.5).unwrap();
/// assert_eq!(config.clearing_price(0.10, 0.30), Some(0.20));
///
/// // Guard: equal prices mean grid-only, not a zero-spread market
/// assert_eq!(config.clearing_price(0.20, 0.20), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConfig {
    alpha: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl MarketConfig {
    /// Create a configuration with the given clearing weight.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidAlpha`] if `alpha` is NaN or outside
    /// `[0, 1]`. Out-of-range alphas would place the clearing price outside
    /// the grid price band, so they are rejected at configuration time
    /// rather than silently clamped.
    pub fn new(alpha: f64) -> Result<Self, MarketError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(MarketError::InvalidAlpha(alpha));
        }
        Ok(Self { alpha })
    }

    /// The configured clearing weight
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Clearing price for a period, or `None` when the rationality guard
    /// routes the period grid-only (`import_price <= export_price`).
    pub fn clearing_price(&self, export_price: f64, import_price: f64) -> Option<f64> {
        if import_price <= export_price {
            return None;
        }
        Some(export_price + self.alpha * (import_price - export_price))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
