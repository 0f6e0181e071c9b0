use std::future::Future;
use std::pin::Pin;

use url::Url;

use crate::core::{FilingsClient, FilingsError, client::RetryConfig, net};

/// Boxed future returned by [`DocumentFetcher::fetch_bytes`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, FilingsError>> + Send + 'a>>;

/// A source of raw document bytes.
///
/// This decouples the document locator from HTTP so candidates can be served from
/// memory in tests. It is implemented by [`FilingsClient`].
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the bytes behind `url`. One attempt unless the implementation retries.
    fn fetch_bytes<'a>(&'a self, url: &'a Url) -> FetchFuture<'a>;
}

impl DocumentFetcher for FilingsClient {
    fn fetch_bytes<'a>(&'a self, url: &'a Url) -> FetchFuture<'a> {
        Box::pin(net::get_bytes(self, url, None))
    }
}

/// A client paired with a per-call retry override.
pub(crate) struct ClientFetcher<'a> {
    pub(crate) client: &'a FilingsClient,
    pub(crate) retry: Option<&'a RetryConfig>,
}

impl DocumentFetcher for ClientFetcher<'_> {
    fn fetch_bytes<'a>(&'a self, url: &'a Url) -> FetchFuture<'a> {
        Box::pin(net::get_bytes(self.client, url, self.retry))
    }
}
