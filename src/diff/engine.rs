use std::collections::BTreeMap;

use super::model::{Diff, DiffRow, Trend};
use crate::holdings::{AggregatedSnapshot, HoldingRecord};

type Sides<'a> = (Option<&'a HoldingRecord>, Option<&'a HoldingRecord>);

#[allow(clippy::cast_precision_loss)]
fn pct(change: i64, previous: Option<i64>) -> Option<f64> {
    match previous {
        Some(p) if p != 0 => Some(change as f64 / p as f64 * 100.0),
        _ => None,
    }
}

fn row(security_id: &str, (latest, previous): Sides<'_>) -> DiffRow {
    let value_latest = latest.map(|r| r.value_reported);
    let value_previous = previous.map(|r| r.value_reported);
    let shares_latest = latest.map(|r| r.share_count);
    let shares_previous = previous.map(|r| r.share_count);

    // values are not validated; extremes clamp instead of wrapping
    let value_change = value_latest.unwrap_or(0).saturating_sub(value_previous.unwrap_or(0));
    let share_change = shares_latest.unwrap_or(0).saturating_sub(shares_previous.unwrap_or(0));

    DiffRow {
        security_id: security_id.to_string(),
        issuer_latest: latest.map(|r| r.issuer_name.clone()),
        issuer_previous: previous.map(|r| r.issuer_name.clone()),
        value_latest,
        value_previous,
        shares_latest,
        shares_previous,
        value_change,
        share_change,
        value_pct_change: pct(value_change, value_previous),
        share_pct_change: pct(share_change, shares_previous),
        value_trend: Trend::from_change(value_change),
        share_trend: Trend::from_change(share_change),
        is_new: previous.is_none(),
        is_dropped: latest.is_none(),
    }
}

pub(crate) fn diff(latest: &AggregatedSnapshot, previous: &AggregatedSnapshot) -> Diff {
    // Outer join enumerated in ascending identifier order.
    let mut joined: BTreeMap<&str, Sides<'_>> = BTreeMap::new();
    for r in latest.rows() {
        joined.entry(r.security_id.as_str()).or_default().0 = Some(r);
    }
    for r in previous.rows() {
        joined.entry(r.security_id.as_str()).or_default().1 = Some(r);
    }

    let mut rows: Vec<DiffRow> = joined.into_iter().map(|(id, sides)| row(id, sides)).collect();
    rows.sort_by(|a, b| b.value_change.cmp(&a.value_change));
    Diff::from_sorted(rows)
}
