//! Period-over-period comparison of two aggregated snapshots.

mod engine;
mod model;

pub use model::{Diff, DiffRow, Trend};

use crate::holdings::AggregatedSnapshot;

/// Full outer join of `latest` and `previous` on `security_id`.
///
/// Every identifier present on either side yields exactly one [`DiffRow`]. Rows are sorted by
/// `value_change` descending; equal changes keep ascending identifier order.
pub fn diff(latest: &AggregatedSnapshot, previous: &AggregatedSnapshot) -> Diff {
    engine::diff(latest, previous)
}
