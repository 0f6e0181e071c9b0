use super::model::{DocumentRef, ListingItem, ScanReport, SkippedCandidate};
use super::wire::IndexEnvelope;
use crate::core::{
    FilingsClient, FilingsError, client::RetryConfig, net, services::DocumentFetcher,
};
use crate::filings::FilingRef;

/// Only items with this exact (case-sensitive) suffix are probed.
pub(crate) const XML_SUFFIX: &str = ".xml";

/// Opening-tag fragment that identifies the 13F information table schema.
pub(crate) const INFO_TABLE_MARKER: &[u8] = b"<informationTable";

fn contains_marker(bytes: &[u8]) -> bool {
    bytes
        .windows(INFO_TABLE_MARKER.len())
        .any(|w| w == INFO_TABLE_MARKER)
}

pub(crate) async fn scan<F>(listing: &[ListingItem], fetcher: &F) -> ScanReport
where
    F: DocumentFetcher + ?Sized,
{
    let mut report = ScanReport::default();

    for item in listing.iter().filter(|i| i.name.ends_with(XML_SUFFIX)) {
        match fetcher.fetch_bytes(&item.url).await {
            Ok(bytes) if contains_marker(&bytes) => {
                report.document = Some(DocumentRef {
                    name: item.name.clone(),
                    url: item.url.clone(),
                    bytes,
                });
                return report;
            }
            Ok(_) => {}
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(name = %item.name, error = %e, "skipping candidate document");
                report.skipped.push(SkippedCandidate {
                    name: item.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

pub(crate) async fn fetch_listing(
    client: &FilingsClient,
    filing: &FilingRef,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<ListingItem>, FilingsError> {
    let env: IndexEnvelope = net::get_json(client, &filing.index_url, retry_override).await?;
    Ok(listing_from_index(filing, env))
}

// A name that does not resolve to a document of this filing is dropped; the rest still count.
fn listing_from_index(filing: &FilingRef, env: IndexEnvelope) -> Vec<ListingItem> {
    env.directory
        .and_then(|d| d.item)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|i| i.name)
        .filter_map(|name| match filing.document_url(&name) {
            Ok(url) => Some(ListingItem { name, url }),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(name = %name, error = %_e, "skipping listing entry");
                None
            }
        })
        .collect()
}
