use url::Url;

/// One entry of a filing's directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// File name as listed; filers choose these freely.
    pub name: String,
    /// Where the file's bytes can be fetched from.
    pub url: Url,
}

/// The document the locator settled on, with the bytes it already fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub name: String,
    pub url: Url,
    pub bytes: Vec<u8>,
}

/// A candidate whose fetch failed during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    pub name: String,
    pub reason: String,
}

/// Outcome of scanning a listing: the match, if any, and every candidate that could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub document: Option<DocumentRef>,
    pub skipped: Vec<SkippedCandidate>,
}
