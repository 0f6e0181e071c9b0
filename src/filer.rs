use crate::compare::{self, Comparison, FilingHoldings};
use crate::core::{CacheMode, FilingsClient, FilingsError, client::RetryConfig};
use crate::filings::{FORM_13F_HR, FilingRef, FilingsBuilder};

/// A high-level interface for one reporting entity, identified by its CIK.
///
/// A `Filer` lists the entity's 13F filings, loads the holdings of any of them, and compares
/// the two most recent ones. Problems with a single filing (missing listing, no information
/// table, malformed XML) do not fail the call; they are reported as
/// [`Warning`](crate::Warning)s next to an empty snapshot.
///
/// # Example
///
/// ```no_run
/// # use filings_rs::{Filer, FilingsClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FilingsClient::builder()
///     .user_agent("Jane Analyst jane@example.com")
///     .build()?;
/// let berkshire = Filer::new(&client, "1067983");
///
/// let cmp = berkshire.compare().await?;
/// for w in cmp.warnings() {
///     eprintln!("warning: {w}");
/// }
/// for row in cmp.diff.new_or_dropped() {
///     println!("{} {:+}", row.security_id, row.value_change);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Filer {
    client: FilingsClient,
    cik: String,
    form_type: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl Filer {
    /// Creates a new `Filer` for the entity with the given CIK (with or without zero padding).
    pub fn new(client: &FilingsClient, cik: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            cik: cik.into(),
            form_type: FORM_13F_HR.to_string(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Uses another form type than `13F-HR` when listing filings.
    #[must_use]
    pub fn form_type(mut self, form: impl Into<String>) -> Self {
        self.form_type = form.into();
        self
    }

    /// Sets how [`compare`](Self::compare) uses the client's comparison cache.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's default retry policy for all calls made by this `Filer`.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Lists the entity's filings of the configured form type, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the submissions document cannot be fetched or decoded.
    pub async fn filings(&self) -> Result<Vec<FilingRef>, FilingsError> {
        FilingsBuilder::new(&self.client, self.cik.as_str())
            .form_type(self.form_type.as_str())
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Loads and aggregates the holdings of one filing. Never fails; see [`FilingHoldings::warnings`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, filing), fields(accession = %filing.accession)))]
    pub async fn holdings(&self, filing: &FilingRef) -> FilingHoldings {
        compare::load_holdings(&self.client, filing, self.retry_override.as_ref()).await
    }

    /// Loads the holdings of the most recent filing.
    ///
    /// # Errors
    ///
    /// Returns [`FilingsError::NotEnoughFilings`] when the entity has no filing of the
    /// configured form type, or an error if the filing list cannot be fetched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(cik = %self.cik)))]
    pub async fn latest_holdings(&self) -> Result<FilingHoldings, FilingsError> {
        compare::latest_holdings(
            &self.client,
            &self.cik,
            &self.form_type,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Compares the most recent filing with the one before it.
    ///
    /// # Errors
    ///
    /// Returns [`FilingsError::NotEnoughFilings`] when fewer than two filings exist, or an
    /// error if the filing list cannot be fetched. Per-filing problems degrade the result
    /// instead.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(cik = %self.cik)))]
    pub async fn compare(&self) -> Result<Comparison, FilingsError> {
        compare::compare(
            &self.client,
            &self.cik,
            &self.form_type,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
