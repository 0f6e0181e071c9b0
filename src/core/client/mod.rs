//! Public client surface + builder.
//! Internals are split into `retry` (policy + send loop) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, CacheMode, RetryConfig};

use crate::compare::Comparison;
use crate::core::FilingsError;
use constants::{DEFAULT_BASE_ARCHIVES, DEFAULT_BASE_SUBMISSIONS, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use url::Url;

/// Identity of one memoized comparison: the entity and the two filings that were diffed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ComparisonKey {
    pub(crate) cik: String,
    pub(crate) latest: String,
    pub(crate) previous: String,
}

// Entries never expire; they are dropped only by `invalidate_comparisons`.
#[derive(Debug, Default)]
struct CacheStore {
    map: RwLock<HashMap<ComparisonKey, Comparison>>,
}

/// HTTP client for the EDGAR endpoints used by this crate.
///
/// Cloning is cheap; clones share the connection pool and the comparison cache.
#[derive(Debug, Clone)]
pub struct FilingsClient {
    http: Client,
    base_submissions: Url,
    base_archives: Url,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl Default for FilingsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FilingsClient {
    /// Create a new builder.
    pub fn builder() -> FilingsClientBuilder {
        FilingsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_submissions(&self) -> &Url {
        &self.base_submissions
    }
    pub(crate) fn base_archives(&self) -> &Url {
        &self.base_archives
    }

    /// Whether comparison results are memoized.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drops every memoized comparison.
    pub async fn invalidate_comparisons(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    pub(crate) async fn cache_get(&self, key: &ComparisonKey) -> Option<Comparison> {
        let store = self.cache.as_ref()?;
        store.map.read().await.get(key).cloned()
    }

    pub(crate) async fn cache_put(&self, key: ComparisonKey, value: &Comparison) {
        let Some(store) = &self.cache else {
            return;
        };
        store.map.write().await.insert(key, value.clone());
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FilingsClientBuilder {
    user_agent: Option<String>,
    base_submissions: Option<Url>,
    base_archives: Option<Url>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    memoize: bool,
}

impl FilingsClientBuilder {
    /// Override the User-Agent. EDGAR expects a name and contact e-mail.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the submissions API base (e.g., `https://data.sec.gov/submissions/`).
    pub fn base_submissions(mut self, url: Url) -> Self {
        self.base_submissions = Some(url);
        self
    }

    /// Override the archives base (e.g., `https://www.sec.gov/Archives/edgar/data/`).
    pub fn base_archives(mut self, url: Url) -> Self {
        self.base_archives = Some(url);
        self
    }

    /// Set the default retry policy. Default: a single attempt per resource.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Memoize comparison results per (entity, latest filing, previous filing).
    /// If not set, every comparison is computed fresh.
    pub fn memoize(mut self, on: bool) -> Self {
        self.memoize = on;
        self
    }

    pub fn build(self) -> Result<FilingsClient, FilingsError> {
        let base_submissions = match self.base_submissions {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SUBMISSIONS)?,
        };
        let base_archives = match self.base_archives {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ARCHIVES)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FilingsClient {
            http,
            base_submissions,
            base_archives,
            retry: self.retry.unwrap_or_default(),
            cache: self.memoize.then(|| Arc::new(CacheStore::default())),
        })
    }
}
