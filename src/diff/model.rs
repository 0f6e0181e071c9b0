// src/diff/model.rs

use std::fmt;

use serde::Serialize;

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// `Flat` for no change, otherwise the sign of `delta`.
    pub fn from_change(delta: i64) -> Self {
        match delta.signum() {
            1 => Self::Up,
            -1 => Self::Down,
            _ => Self::Flat,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One security compared across the latest and previous snapshots.
///
/// `None` on a side means the security was absent from that snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRow {
    /// The join key.
    pub security_id: String,
    pub issuer_latest: Option<String>,
    pub issuer_previous: Option<String>,
    pub value_latest: Option<i64>,
    pub value_previous: Option<i64>,
    pub shares_latest: Option<i64>,
    pub shares_previous: Option<i64>,
    /// `value_latest - value_previous`, with an absent side counted as 0.
    pub value_change: i64,
    /// `shares_latest - shares_previous`, with an absent side counted as 0.
    pub share_change: i64,
    /// Percent change in value; `None` when the previous value is absent or zero.
    pub value_pct_change: Option<f64>,
    /// Percent change in shares; `None` when the previous count is absent or zero.
    pub share_pct_change: Option<f64>,
    pub value_trend: Trend,
    pub share_trend: Trend,
    /// Only the latest snapshot holds this security.
    pub is_new: bool,
    /// Only the previous snapshot holds this security.
    pub is_dropped: bool,
}

fn display_pct(computed: Option<f64>, previous: Option<i64>) -> Option<f64> {
    match previous {
        None => Some(-100.0),
        Some(_) => computed,
    }
}

impl DiffRow {
    /// Percent change as shown to users: rows with no previous value read as `-100%`.
    ///
    /// A previous value that is present but zero stays undefined (`None`).
    pub fn display_value_pct_change(&self) -> Option<f64> {
        display_pct(self.value_pct_change, self.value_previous)
    }

    /// Share-count counterpart of [`display_value_pct_change`](Self::display_value_pct_change).
    pub fn display_share_pct_change(&self) -> Option<f64> {
        display_pct(self.share_pct_change, self.shares_previous)
    }

    pub fn is_new_or_dropped(&self) -> bool {
        self.is_new || self.is_dropped
    }
}

/// The full comparison, sorted by `value_change` descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diff {
    rows: Vec<DiffRow>,
}

impl Diff {
    pub(crate) fn from_sorted(rows: Vec<DiffRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DiffRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, security_id: &str) -> Option<&DiffRow> {
        self.rows.iter().find(|r| r.security_id == security_id)
    }

    /// Rows that entered or left the portfolio, in diff order. The rows are not modified.
    pub fn new_or_dropped(&self) -> Vec<&DiffRow> {
        self.rows.iter().filter(|r| r.is_new_or_dropped()).collect()
    }

    /// All rows, or only new/dropped ones when `only_new_or_dropped` is set.
    pub fn filtered(&self, only_new_or_dropped: bool) -> Vec<&DiffRow> {
        if only_new_or_dropped {
            self.new_or_dropped()
        } else {
            self.rows.iter().collect()
        }
    }

    pub fn total_value_change(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.value_change))
    }

    pub fn total_share_change(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.share_change))
    }
}
