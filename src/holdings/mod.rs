//! Information table parsing and per-security aggregation.

mod aggregate;
mod model;
mod parse;
mod wire;

pub use model::{AggregatedSnapshot, HoldingRecord, Snapshot, SnapshotMetrics};

use crate::core::ParseError;

/// Parses one information table document into a [`Snapshot`] in document order.
///
/// Missing or unparsable numeric fields become `0`, missing text fields become empty
/// strings, and records whose `cusip` is blank are dropped (see [`Snapshot::skipped`]).
///
/// # Errors
///
/// Returns a [`ParseError`] only for document-level defects: invalid UTF-8, XML that is
/// not well-formed, or a root element other than the namespaced `informationTable`.
pub fn parse(bytes: &[u8]) -> Result<Snapshot, ParseError> {
    parse::parse(bytes)
}

/// Collapses split lots into one row per `security_id`.
///
/// Quantities (value, shares, voting authority) are summed; text fields come from the first
/// record seen. Rows keep the order in which each identifier was first encountered.
pub fn aggregate(snapshot: Snapshot) -> AggregatedSnapshot {
    aggregate::aggregate(snapshot)
}
