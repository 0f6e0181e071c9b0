use filings_rs::{Filer, FilingsError, Stage};
use httpmock::{Mock, MockServer};

use crate::common::{self, LATEST, PREVIOUS, fixture};

fn mock_filing<'a>(
    server: &'a MockServer,
    accession_clean: &str,
    docs: &[(&str, u16, &str)],
) -> Vec<Mock<'a>> {
    let mut mocks = vec![common::mock_archive(
        server,
        accession_clean,
        "index.json",
        200,
        &fixture(&format!("index_{accession_clean}.json")),
    )];
    for (name, status, body) in docs {
        mocks.push(common::mock_archive(server, accession_clean, name, *status, body));
    }
    mocks
}

fn mock_latest_ok(server: &MockServer) -> Vec<Mock<'_>> {
    let primary = fixture("primary_doc.xml");
    let table = fixture(&format!("infotable_{LATEST}.xml"));
    mock_filing(
        server,
        LATEST,
        &[
            ("primary_doc.xml", 200, primary.as_str()),
            ("46994.xml", 200, table.as_str()),
        ],
    )
}

fn mock_previous_ok(server: &MockServer) -> Vec<Mock<'_>> {
    let primary = fixture("primary_doc.xml");
    let table = fixture(&format!("infotable_{PREVIOUS}.xml"));
    mock_filing(
        server,
        PREVIOUS,
        &[
            ("primary_doc.xml", 200, primary.as_str()),
            ("form13fInfoTable.xml", 200, table.as_str()),
        ],
    )
}

#[tokio::test]
async fn malformed_previous_table_degrades_to_all_new() {
    common::init_tracing();
    let server = MockServer::start();
    common::mock_submissions(&server, &fixture("submissions_CIK0001067983.json"));
    let _latest = mock_latest_ok(&server);
    let primary = fixture("primary_doc.xml");
    let _previous = mock_filing(
        &server,
        PREVIOUS,
        &[
            ("primary_doc.xml", 200, primary.as_str()),
            (
                "form13fInfoTable.xml",
                200,
                r#"<informationTable xmlns="http://www.sec.gov/edgar/document/thirteenf/informationtable"><infoTable>"#,
            ),
        ],
    );
    let client = common::client(&server);

    let cmp = Filer::new(&client, common::CIK).compare().await.unwrap();

    assert!(cmp.latest.is_complete());
    assert_eq!(cmp.previous.warnings.len(), 1);
    let w = &cmp.previous.warnings[0];
    assert_eq!(w.stage, Stage::Parse);
    assert_eq!(w.accession, "0000950123-24-008740");
    assert!(w.message.starts_with("form13fInfoTable.xml: "));
    assert_eq!(cmp.previous.document.as_deref(), Some("form13fInfoTable.xml"));
    assert!(cmp.previous.snapshot.is_empty());

    assert_eq!(cmp.diff.len(), 4);
    assert!(cmp.diff.rows().iter().all(|r| r.is_new));
    assert_eq!(cmp.total_value_change(), 122_800_000_000);
}

#[tokio::test]
async fn latest_listing_failure_degrades_to_all_dropped() {
    let server = MockServer::start();
    common::mock_submissions(&server, &fixture("submissions_CIK0001067983.json"));
    let index = common::mock_archive(&server, LATEST, "index.json", 500, "oops");
    let _previous = mock_previous_ok(&server);
    let client = common::client(&server);

    let cmp = Filer::new(&client, common::CIK).compare().await.unwrap();

    // one attempt only
    index.assert_calls(1);
    assert_eq!(cmp.latest.warnings.len(), 1);
    assert_eq!(cmp.latest.warnings[0].stage, Stage::Listing);
    assert!(cmp.latest.warnings[0].message.contains("500"));
    assert!(cmp.latest.document.is_none());
    assert!(cmp.previous.is_complete());

    assert_eq!(cmp.diff.len(), 4);
    assert!(cmp.diff.rows().iter().all(|r| r.is_dropped && !r.is_new));
    assert_eq!(cmp.metrics().positions, 0);
}

#[tokio::test]
async fn listing_without_information_table_reports_not_found() {
    let server = MockServer::start();
    common::mock_submissions(&server, &fixture("submissions_CIK0001067983.json"));
    let _latest = mock_latest_ok(&server);
    let primary = fixture("primary_doc.xml");
    let _previous = mock_filing(
        &server,
        PREVIOUS,
        &[
            ("primary_doc.xml", 200, primary.as_str()),
            ("form13fInfoTable.xml", 200, "<html><body>moved</body></html>"),
        ],
    );
    let client = common::client(&server);

    let cmp = Filer::new(&client, common::CIK).compare().await.unwrap();

    let w: Vec<_> = cmp.warnings().collect();
    assert_eq!(w.len(), 1);
    assert_eq!(w[0].stage, Stage::Locate);
    assert!(w[0].message.contains("information table not found"));
    assert!(cmp.previous.document.is_none());
    assert!(cmp.diff.rows().iter().all(|r| r.is_new));
}

#[tokio::test]
async fn failed_candidate_is_skipped_and_reported() {
    let server = MockServer::start();
    common::mock_submissions(&server, &fixture("submissions_CIK0001067983.json"));
    let table = fixture(&format!("infotable_{LATEST}.xml"));
    let _latest = mock_filing(
        &server,
        LATEST,
        &[("primary_doc.xml", 503, "busy"), ("46994.xml", 200, table.as_str())],
    );
    let _previous = mock_previous_ok(&server);
    let client = common::client(&server);

    let cmp = Filer::new(&client, common::CIK).compare().await.unwrap();

    assert_eq!(cmp.latest.warnings.len(), 1);
    assert_eq!(cmp.latest.warnings[0].stage, Stage::Candidate);
    assert!(cmp.latest.warnings[0].message.starts_with("primary_doc.xml: "));
    assert_eq!(cmp.latest.document.as_deref(), Some("46994.xml"));
    assert_eq!(cmp.latest.snapshot.len(), 4);
    assert_eq!(cmp.diff.len(), 5);
}

const ONE_FILING: &str = r#"{
  "filings": { "recent": {
    "accessionNumber": ["0000950123-24-011775", "0000950123-24-009900"],
    "form": ["13F-HR", "SC 13G/A"],
    "filingDate": ["2024-11-14", "2024-09-03"],
    "reportDate": ["2024-09-30", ""]
  } }
}"#;

const NO_FILINGS: &str = r#"{
  "filings": { "recent": {
    "accessionNumber": ["0000950123-24-009900"],
    "form": ["SC 13G/A"],
    "filingDate": ["2024-09-03"],
    "reportDate": [""]
  } }
}"#;

#[tokio::test]
async fn fewer_than_two_filings_is_a_hard_stop() {
    let server = MockServer::start();
    let submissions = common::mock_submissions(&server, ONE_FILING);
    let client = common::client(&server);

    let err = Filer::new(&client, common::CIK).compare().await.unwrap_err();
    match err {
        FilingsError::NotEnoughFilings { found } => assert_eq!(found, 1),
        other => panic!("expected NotEnoughFilings, got {other:?}"),
    }
    submissions.assert();
}

#[tokio::test]
async fn single_view_needs_one_filing() {
    let server = MockServer::start();
    common::mock_submissions(&server, NO_FILINGS);
    let client = common::client(&server);
    let filer = Filer::new(&client, common::CIK);

    assert!(matches!(
        filer.latest_holdings().await,
        Err(FilingsError::NotEnoughFilings { found: 0 })
    ));
    assert!(matches!(
        filer.compare().await,
        Err(FilingsError::NotEnoughFilings { found: 0 })
    ));
}
