use serde::Deserialize;

// `CIK##########.json` from the submissions API. Only the columnar `recent` block is read;
// older pages live in separate files we never need for a two-period comparison.
#[derive(Deserialize)]
pub(crate) struct SubmissionsEnvelope {
    pub(crate) filings: Option<FilingsNode>,
}

#[derive(Deserialize)]
pub(crate) struct FilingsNode {
    pub(crate) recent: Option<RecentNode>,
}

// Parallel arrays, one entry per filing, newest first.
#[derive(Deserialize, Default)]
pub(crate) struct RecentNode {
    #[serde(rename = "accessionNumber", default)]
    pub(crate) accession_number: Vec<String>,
    #[serde(default)]
    pub(crate) form: Vec<String>,
    #[serde(rename = "filingDate", default)]
    pub(crate) filing_date: Vec<String>,
    #[serde(rename = "reportDate", default)]
    pub(crate) report_date: Vec<String>,
}
