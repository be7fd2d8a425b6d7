//! Output table writers.
//!
//! Two CSV tables leave a run: the positional per-period financial table
//! (input metadata passed through, one signed delta column per participant)
//! and the per-participant summary report. Both are assembled line by line
//! with plain formatting; all rounding happened in the report builder, so
//! identical runs produce byte-identical files.

use std::io::{self, Write};

use crate::engine::PeriodRecord;
use crate::io::reader::{EXPORT_PRICE_COL, IMPORT_PRICE_COL, TIMESTAMP_COL};
use crate::report::SummaryRow;
use crate::types::Roster;

/// Write the per-period financial table.
///
/// `timestamps` and `periods` must be parallel (both in period order), as
/// produced by the reader and engine respectively.
pub fn write_financials<W: Write>(
    writer: &mut W,
    roster: &Roster,
    timestamps: &[String],
    periods: &[PeriodRecord],
) -> io::Result<()> {
    debug_assert_eq!(timestamps.len(), periods.len());

    write!(
        writer,
        "{},{},{}",
        TIMESTAMP_COL, EXPORT_PRICE_COL, IMPORT_PRICE_COL
    )?;
    for name in roster.iter() {
        write!(writer, ",{}", name)?;
    }
    writeln!(writer)?;

    for (timestamp, record) in timestamps.iter().zip(periods) {
        write!(
            writer,
            "{},{},{}",
            timestamp, record.export_price, record.import_price
        )?;
        for delta in &record.deltas {
            write!(writer, ",{}", delta)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write the per-participant summary report.
pub fn write_report<W: Write>(writer: &mut W, rows: &[SummaryRow]) -> io::Result<()> {
    writeln!(
        writer,
        "agent,baseline_net,p2p_net,savings,p2p_kwh,grid_kwh,peer_trade_pct"
    )?;

    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            row.participant,
            row.baseline_net,
            row.p2p_net,
            row.savings,
            row.p2p_kwh,
            row.grid_kwh,
            row.peer_trade_pct
        )?;
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
