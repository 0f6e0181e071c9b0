use chrono::NaiveDate;
use url::Url;

use super::model::FilingRef;
use super::wire::{RecentNode, SubmissionsEnvelope};
use crate::core::{FilingsClient, FilingsError, client::RetryConfig, net};

/// Left-pads a CIK to the 10 digits EDGAR uses in file names.
pub(crate) fn normalize_cik(cik: &str) -> Result<String, FilingsError> {
    let trimmed = cik.trim();
    if trimmed.is_empty() || trimmed.len() > 10 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FilingsError::Data(format!("invalid CIK: {cik:?}")));
    }
    Ok(format!("{trimmed:0>10}"))
}

fn date(s: Option<&String>) -> Option<NaiveDate> {
    s.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

fn filings_from_recent(
    recent: &RecentNode,
    base_archives: &Url,
    cik: &str,
    form_type: &str,
) -> Result<Vec<FilingRef>, FilingsError> {
    let mut out = Vec::new();
    for (i, (form, accession)) in recent
        .form
        .iter()
        .zip(recent.accession_number.iter())
        .enumerate()
    {
        if form != form_type {
            continue;
        }
        let mut filing = FilingRef::new(base_archives, cik, accession.as_str(), form.as_str())?;
        filing.filing_date = date(recent.filing_date.get(i));
        filing.report_date = date(recent.report_date.get(i));
        out.push(filing);
    }
    Ok(out)
}

pub(crate) async fn fetch_filings(
    client: &FilingsClient,
    cik: &str,
    form_type: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<FilingRef>, FilingsError> {
    let cik = normalize_cik(cik)?;
    let url = client.base_submissions().join(&format!("CIK{cik}.json"))?;
    let env: SubmissionsEnvelope = net::get_json(client, &url, retry_override).await?;

    let recent = env
        .filings
        .and_then(|f| f.recent)
        .ok_or_else(|| FilingsError::Data("filings.recent missing from submissions".into()))?;

    filings_from_recent(&recent, client.base_archives(), &cik, form_type)
}
