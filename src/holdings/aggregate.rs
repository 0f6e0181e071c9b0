use std::collections::HashMap;

use super::model::{AggregatedSnapshot, HoldingRecord, Snapshot};

pub(crate) fn aggregate(snapshot: Snapshot) -> AggregatedSnapshot {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<HoldingRecord> = Vec::new();

    for record in snapshot.into_records() {
        match index.get(&record.security_id).copied() {
            Some(i) => {
                // first lot already supplied the text fields
                let row = &mut rows[i];
                row.value_reported = row.value_reported.saturating_add(record.value_reported);
                row.share_count = row.share_count.saturating_add(record.share_count);
                row.voting_authority_sole = row
                    .voting_authority_sole
                    .saturating_add(record.voting_authority_sole);
                row.voting_authority_shared = row
                    .voting_authority_shared
                    .saturating_add(record.voting_authority_shared);
                row.voting_authority_none = row
                    .voting_authority_none
                    .saturating_add(record.voting_authority_none);
            }
            None => {
                index.insert(record.security_id.clone(), rows.len());
                rows.push(record);
            }
        }
    }

    AggregatedSnapshot::from_unique(rows)
}
