#![allow(dead_code)]

use filings_rs::FilingsClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const CIK: &str = "0001067983";
pub const LATEST: &str = "000095012324011775";
pub const PREVIOUS: &str = "000095012324008740";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Routes crate logs to the test writer when built with `--features tracing-subscriber`.
pub fn init_tracing() {
    #[cfg(feature = "tracing-subscriber")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

pub fn client(server: &MockServer) -> FilingsClient {
    client_builder(server).build().unwrap()
}

pub fn client_builder(server: &MockServer) -> filings_rs::FilingsClientBuilder {
    FilingsClient::builder()
        .user_agent("filings-rs tests test@example.com")
        .base_submissions(Url::parse(&server.url("/submissions/")).unwrap())
        .base_archives(Url::parse(&server.url("/Archives/edgar/data/")).unwrap())
}

pub fn archive_path(accession_clean: &str, name: &str) -> String {
    format!("/Archives/edgar/data/{CIK}/{accession_clean}/{name}")
}

pub fn mock_submissions<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET).path(format!("/submissions/CIK{CIK}.json"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_archive<'a>(
    server: &'a MockServer,
    accession_clean: &str,
    name: &str,
    status: u16,
    body: &str,
) -> Mock<'a> {
    let path = archive_path(accession_clean, name);
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body(body);
    })
}

/// Every endpoint a clean comparison of the two fixture filings touches.
pub struct HappyPath<'a> {
    pub submissions: Mock<'a>,
    pub latest_index: Mock<'a>,
    pub latest_primary: Mock<'a>,
    pub latest_table: Mock<'a>,
    pub latest_copy: Mock<'a>,
    pub previous_index: Mock<'a>,
    pub previous_primary: Mock<'a>,
    pub previous_table: Mock<'a>,
}

pub fn mock_happy_path(server: &MockServer) -> HappyPath<'_> {
    let table = fixture(&format!("infotable_{LATEST}.xml"));
    HappyPath {
        submissions: mock_submissions(server, &fixture("submissions_CIK0001067983.json")),
        latest_index: mock_archive(
            server,
            LATEST,
            "index.json",
            200,
            &fixture(&format!("index_{LATEST}.json")),
        ),
        latest_primary: mock_archive(server, LATEST, "primary_doc.xml", 200, &fixture("primary_doc.xml")),
        latest_table: mock_archive(server, LATEST, "46994.xml", 200, &table),
        latest_copy: mock_archive(server, LATEST, "zz_copy.xml", 200, &table),
        previous_index: mock_archive(
            server,
            PREVIOUS,
            "index.json",
            200,
            &fixture(&format!("index_{PREVIOUS}.json")),
        ),
        previous_primary: mock_archive(
            server,
            PREVIOUS,
            "primary_doc.xml",
            200,
            &fixture("primary_doc.xml"),
        ),
        previous_table: mock_archive(
            server,
            PREVIOUS,
            "form13fInfoTable.xml",
            200,
            &fixture(&format!("infotable_{PREVIOUS}.xml")),
        ),
    }
}
