//! Error types for the peergrid simulator.
//!
//! ## Design
//!
//! All failure handling lives at the boundary: input parsing and run
//! configuration. The matching, settlement, and accumulation paths are total
//! functions over a well-formed [`PeriodInput`](crate::types::PeriodInput)
//! and never return errors.
//!
//! A malformed period row fails the whole run rather than being skipped:
//! partial output would misrepresent the conservation invariants.

use thiserror::Error;

/// Errors produced while loading input or configuring a run.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A period row is missing a required price or contains a non-numeric cell.
    #[error("malformed input at period {period}: {reason}")]
    MalformedPeriodInput {
        /// Zero-based period index of the offending row
        period: usize,
        /// Human-readable description of what failed to parse
        reason: String,
    },

    /// The clearing-price weight is outside the valid `[0, 1]` band.
    #[error("clearing weight alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),

    /// The input table has no header row at all.
    #[error("input table is empty: expected a header row")]
    MissingHeader,

    /// A required metadata column is absent from the header.
    #[error("input table is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Two participant columns share the same name.
    #[error("duplicate participant column '{0}'")]
    DuplicateParticipant(String),

    /// Underlying I/O failure while reading or writing a table.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_period_message() {
        let err = MarketError::MalformedPeriodInput {
            period: 3,
            reason: "non-numeric quantity 'abc' in column 'house_2'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("period 3"));
        assert!(msg.contains("house_2"));
    }

    #[test]
    fn test_invalid_alpha_message() {
        let err = MarketError::InvalidAlpha(1.5);
        assert_eq!(
            err.to_string(),
            "clearing weight alpha must lie in [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MarketError = io.into();
        assert!(matches!(err, MarketError::Io(_)));
    }
}
