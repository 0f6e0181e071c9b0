use super::model::{Comparison, FilingHoldings, Stage, Warning};
use crate::core::{
    CacheMode, FilingsClient, FilingsError,
    client::{ComparisonKey, RetryConfig},
    services::ClientFetcher,
};
use crate::filings::{self, FilingRef};
use crate::{diff, holdings, locate};

/// Runs listing → locate → parse → aggregate for one filing.
///
/// Never fails: every problem becomes a [`Warning`] and an empty snapshot.
pub(crate) async fn load_holdings(
    client: &FilingsClient,
    filing: &FilingRef,
    retry_override: Option<&RetryConfig>,
) -> FilingHoldings {
    let mut warnings = Vec::new();

    let listing = match locate::fetch_listing(client, filing, retry_override).await {
        Ok(l) => l,
        Err(e) => {
            warnings.push(Warning::new(filing, Stage::Listing, e.to_string()));
            return FilingHoldings::degraded(filing, warnings);
        }
    };

    let fetcher = ClientFetcher {
        client,
        retry: retry_override,
    };
    let report = locate::scan(&listing, &fetcher).await;
    for s in report.skipped {
        warnings.push(Warning::new(
            filing,
            Stage::Candidate,
            format!("{}: {}", s.name, s.reason),
        ));
    }

    let Some(document) = report.document else {
        let err = FilingsError::DocumentNotFound {
            accession: filing.accession.clone(),
        };
        warnings.push(Warning::new(filing, Stage::Locate, err.to_string()));
        return FilingHoldings::degraded(filing, warnings);
    };

    match holdings::parse(&document.bytes) {
        Ok(snapshot) => FilingHoldings {
            filing: filing.clone(),
            document: Some(document.name),
            records: snapshot.len(),
            snapshot: holdings::aggregate(snapshot),
            warnings,
        },
        Err(e) => {
            warnings.push(Warning::new(
                filing,
                Stage::Parse,
                format!("{}: {e}", document.name),
            ));
            let mut degraded = FilingHoldings::degraded(filing, warnings);
            degraded.document = Some(document.name);
            degraded
        }
    }
}

pub(crate) async fn latest_holdings(
    client: &FilingsClient,
    cik: &str,
    form_type: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<FilingHoldings, FilingsError> {
    let list = filings::fetch_filings(client, cik, form_type, retry_override).await?;
    let latest = list
        .first()
        .ok_or(FilingsError::NotEnoughFilings { found: 0 })?;
    Ok(load_holdings(client, latest, retry_override).await)
}

pub(crate) async fn compare(
    client: &FilingsClient,
    cik: &str,
    form_type: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Comparison, FilingsError> {
    let list = filings::fetch_filings(client, cik, form_type, retry_override).await?;
    let [latest, previous, ..] = list.as_slice() else {
        return Err(FilingsError::NotEnoughFilings { found: list.len() });
    };

    let key = ComparisonKey {
        cik: filings::normalize_cik(cik)?,
        latest: latest.accession.clone(),
        previous: previous.accession.clone(),
    };

    if cache_mode == CacheMode::Use
        && let Some(hit) = client.cache_get(&key).await
    {
        return Ok(hit);
    }

    // one filing at a time; nothing is fetched concurrently
    let latest = load_holdings(client, latest, retry_override).await;
    let previous = load_holdings(client, previous, retry_override).await;
    let diff = diff::diff(&latest.snapshot, &previous.snapshot);

    let comparison = Comparison {
        latest,
        previous,
        diff,
    };

    // degraded results may be transient, so only complete ones are memoized
    if cache_mode != CacheMode::Bypass && comparison.is_complete() {
        client.cache_put(key, &comparison).await;
    }

    Ok(comparison)
}
