//! Input table reader.
//!
//! ## Table Contract
//!
//! The input is a CSV table with a header row naming three metadata
//! columns — `timestamp`, `export price`, `import price` — plus one column
//! per participant. Every remaining row is one trading period. Participant
//! column order becomes the roster order, which is the FCFS matching
//! priority for the whole run.
//!
//! A malformed row (missing cell, non-numeric price or quantity) fails the
//! whole run: partial output would misrepresent the conservation
//! invariants. A table with zero participant columns is valid and yields a
//! degenerate run.

use std::io::BufRead;

use crate::error::MarketError;
use crate::types::{PeriodInput, Roster};

/// Header name of the period identifier column
pub const TIMESTAMP_COL: &str = "timestamp";

/// Header name of the export (FiT) price column
pub const EXPORT_PRICE_COL: &str = "export price";

/// Header name of the import (ToU) price column
pub const IMPORT_PRICE_COL: &str = "import price";

/// A fully parsed input table.
#[derive(Debug, Clone)]
pub struct InputTable {
    /// Participant roster in column order
    pub roster: Roster,

    /// Period identifier labels, passed through to the financial table
    pub timestamps: Vec<String>,

    /// One parsed input per period, in row order
    pub periods: Vec<PeriodInput>,
}

/// Column roles resolved from the header row.
struct Layout {
    timestamp: usize,
    export_price: usize,
    import_price: usize,
    /// (column index, roster index) for each participant column
    participants: Vec<usize>,
}

/// Parse an input table from any buffered reader.
///
/// # Errors
///
/// - [`MarketError::MissingHeader`] on an empty input
/// - [`MarketError::MissingColumn`] if a metadata column is absent
/// - [`MarketError::DuplicateParticipant`] on repeated participant names
/// - [`MarketError::MalformedPeriodInput`] on a short row or unparseable cell
pub fn read_table<R: BufRead>(reader: R) -> Result<InputTable, MarketError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(MarketError::MissingHeader),
    };
    let (layout, roster) = parse_header(&header)?;

    let mut timestamps = Vec::new();
    let mut periods = Vec::new();

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let index = periods.len();
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let expected = 3 + layout.participants.len();
        if cells.len() != expected {
            return Err(MarketError::MalformedPeriodInput {
                period: index,
                reason: format!("expected {} cells, found {}", expected, cells.len()),
            });
        }

        let export_price = parse_cell(cells[layout.export_price], EXPORT_PRICE_COL, index)?;
        let import_price = parse_cell(cells[layout.import_price], IMPORT_PRICE_COL, index)?;

        let mut net_quantity = Vec::with_capacity(layout.participants.len());
        for (roster_index, &column) in layout.participants.iter().enumerate() {
            let quantity = parse_cell(cells[column], roster.name(roster_index), index)?;
            net_quantity.push(quantity);
        }

        timestamps.push(cells[layout.timestamp].to_string());
        periods.push(PeriodInput::new(index, export_price, import_price, net_quantity));
    }

    Ok(InputTable {
        roster,
        timestamps,
        periods,
    })
}

/// Resolve metadata columns by name; everything else is a participant.
fn parse_header(header: &str) -> Result<(Layout, Roster), MarketError> {
    let names: Vec<&str> = header.split(',').map(str::trim).collect();

    let find = |wanted: &'static str| -> Result<usize, MarketError> {
        names
            .iter()
            .position(|&n| n == wanted)
            .ok_or(MarketError::MissingColumn(wanted))
    };

    let timestamp = find(TIMESTAMP_COL)?;
    let export_price = find(EXPORT_PRICE_COL)?;
    let import_price = find(IMPORT_PRICE_COL)?;

    let mut participants = Vec::new();
    let mut roster_names = Vec::new();
    for (column, &name) in names.iter().enumerate() {
        if column != timestamp && column != export_price && column != import_price {
            participants.push(column);
            roster_names.push(name.to_string());
        }
    }

    let roster = Roster::new(roster_names)?;
    Ok((
        Layout {
            timestamp,
            export_price,
            import_price,
            participants,
        },
        roster,
    ))
}

/// Parse one numeric cell, naming the column in the error.
fn parse_cell(cell: &str, column: &str, period: usize) -> Result<f64, MarketError> {
    cell.parse::<f64>()
        .map_err(|_| MarketError::MalformedPeriodInput {
            period,
            reason: format!("non-numeric value '{}' in column '{}'", cell, column),
        })
}

// ============================================================================
// Unit Tests
// ============================================================================
