//! CSV projection of holdings tables.

use std::io::Write;

use crate::core::FilingsError;
use crate::holdings::{AggregatedSnapshot, HoldingRecord};

/// Writes `rows` as CSV: a header row of field names, then one record per row.
///
/// An empty slice still produces the header.
pub fn write_csv<W: Write>(rows: &[HoldingRecord], writer: W) -> Result<(), FilingsError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] into a `String`.
pub fn to_csv_string(rows: &[HoldingRecord]) -> Result<String, FilingsError> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    String::from_utf8(buf).map_err(|e| FilingsError::Data(format!("csv output not UTF-8: {e}")))
}

/// The `n` largest positions of `snapshot` as CSV.
pub fn top_holdings_csv(snapshot: &AggregatedSnapshot, n: usize) -> Result<String, FilingsError> {
    to_csv_string(&snapshot.top(n))
}

// Kept in field order of `HoldingRecord`; written by hand so an empty table still has a header.
const HEADER: [&str; 11] = [
    "issuer_name",
    "title_of_class",
    "security_id",
    "value_reported",
    "share_count",
    "share_type",
    "put_call",
    "discretion_code",
    "voting_authority_sole",
    "voting_authority_shared",
    "voting_authority_none",
];
