use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FilingsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON returned by the registry could not be decoded.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The registry throttled the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The registry failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Fewer filings of the requested form type exist than the operation needs.
    #[error("not enough filings to compare: found {found}")]
    NotEnoughFilings {
        /// How many eligible filings were found.
        found: usize,
    },

    /// No item in a filing's directory listing contained the information table marker.
    #[error("information table not found for filing {accession}")]
    DocumentNotFound {
        /// Accession number of the filing that was scanned.
        accession: String,
    },

    /// The information table document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A document-level defect in an information table.
///
/// Field-level problems never surface here; they are defaulted by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document bytes are not valid UTF-8.
    #[error("information table is not valid UTF-8: {0}")]
    NotUtf8(String),

    /// The document is not well-formed XML.
    #[error("malformed information table XML: {0}")]
    Malformed(String),

    /// The root element is not `informationTable`.
    #[error("unexpected root element `{found}`, expected `informationTable`")]
    UnexpectedRoot {
        /// Local name of the root element that was found.
        found: String,
    },

    /// The root element is not in the information table namespace.
    #[error("unexpected root namespace {found:?}")]
    WrongNamespace {
        /// Namespace URI of the root element, if any.
        found: Option<String>,
    },
}

impl FilingsError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(status: u16, url: &str) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
