use url::Url;

use crate::core::{
    FilingsClient, FilingsError,
    client::RetryConfig,
};

/// GET `url` once (or per the retry policy) and return the body bytes.
/// Non-2xx statuses are mapped to typed errors.
pub(crate) async fn get_bytes(
    client: &FilingsClient,
    url: &Url,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<u8>, FilingsError> {
    let req = client.http().get(url.clone());
    let resp = client.send_with_retry(req, retry_override).await?;

    if !resp.status().is_success() {
        return Err(FilingsError::from_status(
            resp.status().as_u16(),
            url.as_str(),
        ));
    }

    Ok(resp.bytes().await?.to_vec())
}

/// GET `url` and decode the body as JSON.
pub(crate) async fn get_json<T>(
    client: &FilingsClient,
    url: &Url,
    retry_override: Option<&RetryConfig>,
) -> Result<T, FilingsError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let body = get_bytes(client, url, retry_override).await?;
    Ok(serde_json::from_slice(&body)?)
}
