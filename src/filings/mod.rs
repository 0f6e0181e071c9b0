mod api;
mod model;
mod wire;

pub use model::FilingRef;

pub(crate) use api::{fetch_filings, normalize_cik};

use crate::{FilingsClient, FilingsError, core::client::RetryConfig};

/// The form type whose attachment carries the holdings information table.
pub const FORM_13F_HR: &str = "13F-HR";

/// A builder for listing an entity's filings of one form type, newest first.
pub struct FilingsBuilder {
    client: FilingsClient,
    cik: String,
    form_type: String,
    retry_override: Option<RetryConfig>,
}

impl FilingsBuilder {
    /// Creates a new `FilingsBuilder` for the entity identified by `cik`.
    pub fn new(client: &FilingsClient, cik: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            cik: cik.into(),
            form_type: FORM_13F_HR.to_string(),
            retry_override: None,
        }
    }

    /// Restricts the listing to another form type. Default: `13F-HR`.
    #[must_use]
    pub fn form_type(mut self, form: impl Into<String>) -> Self {
        self.form_type = form.into();
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the submissions document and returns the matching filings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the CIK is malformed, the request fails, or the
    /// submissions document has no `filings.recent` block.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(cik = %self.cik)))]
    pub async fn fetch(&self) -> Result<Vec<FilingRef>, FilingsError> {
        api::fetch_filings(
            &self.client,
            &self.cik,
            &self.form_type,
            self.retry_override.as_ref(),
        )
        .await
    }
}
