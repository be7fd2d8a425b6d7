//! Thin I/O collaborators: CSV table reading and writing.
//!
//! Nothing in here carries algorithmic weight. The reader turns the input
//! table into a [`Roster`](crate::types::Roster) plus a period list, the
//! writers turn run results back into tables. All validation failures
//! surface as [`MarketError`](crate::error::MarketError) and abort the run
//! before any matching happens.

pub mod reader;
pub mod writer;

pub use reader::{read_table, InputTable};
pub use writer::{write_financials, write_report};
