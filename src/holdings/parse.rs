use super::model::{HoldingRecord, Snapshot};
use super::wire::{self, InfoTableNode};
use crate::core::ParseError;

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

fn num(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

fn map_record(n: InfoTableNode) -> HoldingRecord {
    HoldingRecord {
        issuer_name: n.name_of_issuer.unwrap_or_default(),
        title_of_class: n.title_of_class.unwrap_or_default(),
        security_id: n.cusip.unwrap_or_default(),
        value_reported: num(n.value),
        share_count: num(n.ssh_prnamt),
        share_type: n.ssh_prnamt_type.unwrap_or_default(),
        put_call: n.put_call.filter(|p| !p.trim().is_empty()),
        discretion_code: n.investment_discretion.unwrap_or_default(),
        voting_authority_sole: num(n.voting_sole),
        voting_authority_shared: num(n.voting_shared),
        voting_authority_none: num(n.voting_none),
    }
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Snapshot, ParseError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let xml = std::str::from_utf8(bytes).map_err(|e| ParseError::NotUtf8(e.to_string()))?;

    let mut records = Vec::new();
    let mut skipped = 0;
    for node in wire::read_document(xml)? {
        let record = map_record(node);
        if record.security_id.trim().is_empty() {
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    #[cfg(feature = "tracing")]
    {
        if skipped > 0 {
            tracing::debug!(skipped, "dropped information table rows without a cusip");
        }
    }

    Ok(Snapshot::new(records).with_skipped(skipped))
}
