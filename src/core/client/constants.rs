//! Centralized constants for default endpoints and UA.

/// EDGAR rejects anonymous clients; it asks for a UA naming the requester and a contact address.
pub(crate) const USER_AGENT: &str = "filings-rs/0.1 (contact@example.com)";

/// EDGAR submissions API base (`CIK##########.json` is appended).
pub(crate) const DEFAULT_BASE_SUBMISSIONS: &str = "https://data.sec.gov/submissions/";

/// EDGAR archives base (`{cik}/{accession}/...` is appended).
pub(crate) const DEFAULT_BASE_ARCHIVES: &str = "https://www.sec.gov/Archives/edgar/data/";
