//! Finding the information table among a filing's loosely named documents.
//!
//! Filers name the XML attachment however they like (`infotable.xml`, `form13fInfoTable.xml`,
//! `0001234567-24-000001.xml`, ...), so the locator sniffs content rather than trusting names.

mod api;
mod model;
mod wire;

pub use model::{DocumentRef, ListingItem, ScanReport, SkippedCandidate};

pub(crate) use api::fetch_listing;

use crate::core::services::DocumentFetcher;

/// Scans `listing` in order and reports the first `.xml` item whose content carries the
/// `<informationTable` marker, plus every candidate whose fetch failed along the way.
///
/// Candidates are fetched one at a time; the scan stops at the first match.
pub async fn scan<F>(listing: &[ListingItem], fetcher: &F) -> ScanReport
where
    F: DocumentFetcher + ?Sized,
{
    api::scan(listing, fetcher).await
}

/// Returns the first matching document, or `None` when no candidate matched.
pub async fn locate<F>(listing: &[ListingItem], fetcher: &F) -> Option<DocumentRef>
where
    F: DocumentFetcher + ?Sized,
{
    api::scan(listing, fetcher).await.document
}
