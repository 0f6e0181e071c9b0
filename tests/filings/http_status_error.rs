use filings_rs::{FilingsBuilder, FilingsError};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

#[tokio::test]
async fn submissions_returns_typed_status_errors() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/submissions/CIK{}.json", common::CIK));
        then.status(500).body("oops");
    });

    let client = common::client(&server);
    let err = FilingsBuilder::new(&client, common::CIK)
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        FilingsError::ServerError { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/submissions/CIK0001067983.json"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_cik_maps_to_not_found() {
    let server = MockServer::start();
    let client = common::client(&server);

    let err = FilingsBuilder::new(&client, "42").fetch().await.unwrap_err();
    assert!(matches!(err, FilingsError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_json_error() {
    let server = MockServer::start();
    common::mock_submissions(&server, "<html>maintenance</html>");
    let client = common::client(&server);

    let err = FilingsBuilder::new(&client, common::CIK).fetch().await.unwrap_err();
    assert!(matches!(err, FilingsError::Json(_)), "got {err:?}");
}
