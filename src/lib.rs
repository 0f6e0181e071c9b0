//! filings-rs: 13F holdings from SEC EDGAR, and what changed between two quarters.
//!
//! The pipeline for each filing is: directory listing → [`locate`] the information table by
//! content → [`holdings::parse`] → [`holdings::aggregate`] per CUSIP. Two aggregated snapshots
//! are compared with [`diff::diff`]. [`Filer`] wires these together against the live registry.

pub mod compare;
pub mod core;
pub mod diff;
pub mod export;
mod filer;
pub mod filings;
pub mod holdings;
pub mod locate;

pub use compare::{Comparison, FilingHoldings, Stage, Warning};
pub use crate::core::{
    CacheMode, FilingsClient, FilingsClientBuilder, FilingsError, ParseError, RetryConfig,
    services::DocumentFetcher,
};
pub use diff::{Diff, DiffRow, Trend};
pub use filer::Filer;
pub use filings::{FilingRef, FilingsBuilder};
pub use holdings::{AggregatedSnapshot, HoldingRecord, Snapshot, SnapshotMetrics};
pub use locate::{DocumentRef, ListingItem};
