// src/filings/model.rs

use chrono::NaiveDate;
use url::Url;

use crate::core::FilingsError;

/// One disclosure filing as listed by the registry.
///
/// Created by the filing index and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRef {
    /// The accession number as published, e.g. `0000950123-24-012345`.
    pub accession: String,
    /// The accession number with separators stripped, as used in archive paths.
    pub accession_clean: String,
    /// The form type, e.g. `13F-HR`.
    pub form: String,
    /// URL of the filing's `index.json` directory listing.
    pub index_url: Url,
    /// The date the filing was accepted, if the registry reported one.
    pub filing_date: Option<NaiveDate>,
    /// The end of the reporting period, if the registry reported one.
    pub report_date: Option<NaiveDate>,
}

impl FilingRef {
    /// Builds a reference for `accession` under the archive directory of `cik`.
    pub fn new(
        base_archives: &Url,
        cik: &str,
        accession: impl Into<String>,
        form: impl Into<String>,
    ) -> Result<Self, FilingsError> {
        let accession = accession.into();
        let accession_clean = accession.replace('-', "");
        let index_url = base_archives.join(&format!("{cik}/{accession_clean}/index.json"))?;
        Ok(Self {
            accession,
            accession_clean,
            form: form.into(),
            index_url,
            filing_date: None,
            report_date: None,
        })
    }

    /// URL of a named document inside this filing's directory.
    ///
    /// Names that resolve outside the directory (absolute URLs, `../` paths) are rejected.
    pub fn document_url(&self, name: &str) -> Result<Url, FilingsError> {
        let dir = self.index_url.join("./")?;
        let url = dir.join(name)?;
        if url.origin() != dir.origin() || !url.path().starts_with(dir.path()) {
            return Err(FilingsError::Data(format!(
                "document {name:?} is outside the filing directory"
            )));
        }
        Ok(url)
    }
}
