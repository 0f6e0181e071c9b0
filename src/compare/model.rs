// src/compare/model.rs

use std::fmt;

use crate::diff::Diff;
use crate::filings::FilingRef;
use crate::holdings::{AggregatedSnapshot, SnapshotMetrics};

/// Where in the per-filing pipeline a problem was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The filing's directory listing could not be fetched or decoded.
    Listing,
    /// A candidate document could not be fetched; the scan moved on.
    Candidate,
    /// No candidate carried the information table marker.
    Locate,
    /// The information table was found but is not a valid document.
    Parse,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Listing => "listing",
            Self::Candidate => "candidate",
            Self::Locate => "locate",
            Self::Parse => "parse",
        })
    }
}

/// A non-fatal problem that degraded a result instead of aborting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Accession number of the filing being processed.
    pub accession: String,
    pub stage: Stage,
    pub message: String,
}

impl Warning {
    pub(crate) fn new(filing: &FilingRef, stage: Stage, message: impl Into<String>) -> Self {
        let w = Self {
            accession: filing.accession.clone(),
            stage,
            message: message.into(),
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(accession = %w.accession, stage = %w.stage, "{}", w.message);
        w
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.accession, self.stage, self.message)
    }
}

/// The holdings of one filing, possibly degraded to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingHoldings {
    pub filing: FilingRef,
    /// Name of the information table document, when one was found.
    pub document: Option<String>,
    /// Number of records parsed before aggregation.
    pub records: usize,
    pub snapshot: AggregatedSnapshot,
    pub warnings: Vec<Warning>,
}

impl FilingHoldings {
    pub(crate) fn degraded(filing: &FilingRef, warnings: Vec<Warning>) -> Self {
        Self {
            filing: filing.clone(),
            document: None,
            records: 0,
            snapshot: AggregatedSnapshot::default(),
            warnings,
        }
    }

    /// `true` when nothing went wrong while loading.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn metrics(&self) -> SnapshotMetrics {
        self.snapshot.metrics()
    }
}

/// The latest filing compared against the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub latest: FilingHoldings,
    pub previous: FilingHoldings,
    pub diff: Diff,
}

impl Comparison {
    /// Warnings from both filings, latest first.
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.latest.warnings.iter().chain(self.previous.warnings.iter())
    }

    pub fn is_complete(&self) -> bool {
        self.latest.is_complete() && self.previous.is_complete()
    }

    /// Row count and total value of the latest snapshot.
    pub fn metrics(&self) -> SnapshotMetrics {
        self.latest.metrics()
    }

    pub fn total_value_change(&self) -> i64 {
        self.diff.total_value_change()
    }
}
