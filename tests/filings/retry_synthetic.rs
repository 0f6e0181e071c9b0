use std::time::Duration;

use filings_rs::core::client::Backoff;
use filings_rs::{FilingsBuilder, FilingsError, RetryConfig};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

fn fast_retries(n: u32) -> RetryConfig {
    RetryConfig {
        backoff: Backoff::Fixed(Duration::from_millis(5)),
        ..RetryConfig::with_retries(n)
    }
}

#[tokio::test]
async fn default_policy_makes_a_single_attempt() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/submissions/CIK{}.json", common::CIK));
        then.status(503).body("busy");
    });
    let client = common::client(&server);

    let err = FilingsBuilder::new(&client, common::CIK).fetch().await.unwrap_err();
    assert!(matches!(err, FilingsError::ServerError { status: 503, .. }));
    mock.assert_calls(1);
}

#[tokio::test]
async fn opt_in_retry_on_client_and_per_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/submissions/CIK{}.json", common::CIK));
        then.status(503).body("busy");
    });

    let client = common::client_builder(&server)
        .retry_policy(fast_retries(2))
        .build()
        .unwrap();
    let err = FilingsBuilder::new(&client, common::CIK).fetch().await.unwrap_err();
    assert!(matches!(err, FilingsError::ServerError { status: 503, .. }));
    mock.assert_calls(3);

    let plain = common::client(&server);
    let _ = FilingsBuilder::new(&plain, common::CIK)
        .retry_policy(Some(fast_retries(1)))
        .fetch()
        .await;
    mock.assert_calls(5);
}

#[tokio::test]
async fn non_retryable_status_is_not_retried() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/submissions/CIK{}.json", common::CIK));
        then.status(404);
    });

    let client = common::client_builder(&server)
        .retry_policy(fast_retries(3))
        .build()
        .unwrap();
    let err = FilingsBuilder::new(&client, common::CIK).fetch().await.unwrap_err();
    assert!(matches!(err, FilingsError::NotFound { .. }));
    mock.assert_calls(1);
}
