// src/holdings/model.rs

use serde::Serialize;

/// One reported position line from an information table.
///
/// Every field has a default: numeric fields fall back to `0` and text fields to an empty
/// string when the source element is missing or unparsable, so one bad field never voids
/// the rest of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoldingRecord {
    /// `nameOfIssuer`.
    pub issuer_name: String,
    /// `titleOfClass`, e.g. "COM".
    pub title_of_class: String,
    /// `cusip`. The join key across periods; compared byte for byte.
    pub security_id: String,
    /// `value`, in reporting-currency units.
    pub value_reported: i64,
    /// `shrsOrPrnAmt/sshPrnamt`.
    pub share_count: i64,
    /// `shrsOrPrnAmt/sshPrnamtType`: `SH` for shares, `PRN` for principal amount.
    pub share_type: String,
    /// `putCall`, present only for option positions.
    pub put_call: Option<String>,
    /// `investmentDiscretion`, e.g. "SOLE", "DFND", "OTR".
    pub discretion_code: String,
    /// `votingAuthority/Sole`.
    pub voting_authority_sole: i64,
    /// `votingAuthority/Shared`.
    pub voting_authority_shared: i64,
    /// `votingAuthority/None`.
    pub voting_authority_none: i64,
}

/// All records of one filing in document order. May repeat a `security_id` (split lots).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    records: Vec<HoldingRecord>,
    skipped: usize,
}

impl Snapshot {
    pub fn new(records: Vec<HoldingRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    pub(crate) fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn records(&self) -> &[HoldingRecord] {
        &self.records
    }

    /// Records dropped by the parser because their `cusip` was blank.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<HoldingRecord> {
        self.records
    }
}

/// One row per unique `security_id`, produced by [`aggregate`](crate::holdings::aggregate).
///
/// Rows keep group-discovery order. Uniqueness of `security_id` is guaranteed because the
/// only way to build one is through aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedSnapshot {
    rows: Vec<HoldingRecord>,
}

/// Headline numbers for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotMetrics {
    /// Number of distinct securities.
    pub positions: usize,
    /// Sum of `value_reported` over all rows.
    pub total_value: i64,
}

impl AggregatedSnapshot {
    pub(crate) fn from_unique(rows: Vec<HoldingRecord>) -> Self {
        Self { rows }
    }

    /// Rows in group-discovery order.
    pub fn rows(&self) -> &[HoldingRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, security_id: &str) -> Option<&HoldingRecord> {
        self.rows.iter().find(|r| r.security_id == security_id)
    }

    /// Rows sorted by `value_reported` descending; ties keep discovery order.
    pub fn by_value(&self) -> Vec<HoldingRecord> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.value_reported.cmp(&a.value_reported));
        rows
    }

    /// The `n` largest positions by value.
    pub fn top(&self, n: usize) -> Vec<HoldingRecord> {
        let mut rows = self.by_value();
        rows.truncate(n);
        rows
    }

    pub fn total_value(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.value_reported))
    }

    pub fn metrics(&self) -> SnapshotMetrics {
        SnapshotMetrics {
            positions: self.rows.len(),
            total_value: self.total_value(),
        }
    }
}

/// Turns the aggregated rows back into a plain snapshot.
impl From<AggregatedSnapshot> for Snapshot {
    fn from(agg: AggregatedSnapshot) -> Self {
        Snapshot::new(agg.rows)
    }
}
