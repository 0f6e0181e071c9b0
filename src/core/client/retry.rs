use std::time::Duration;

use reqwest::{RequestBuilder, Response};

use crate::core::FilingsError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                // clamp in f64 first; `Duration` panics on overflow, negatives and NaN
                let secs = base.as_secs_f64() * factor.powi(exp);
                if secs.is_nan() {
                    return *max;
                }
                Duration::try_from_secs_f64(secs.min(max.as_secs_f64()).max(0.0)).unwrap_or(*max)
            }
        }
    }
}

/// Configuration for the retry mechanism.
///
/// Retrying is off by default: every resource gets exactly one attempt and a failure is
/// reported to the caller, which degrades its result instead.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    /// A policy that retries transient failures up to `max_retries` times.
    pub fn with_retries(max_retries: u32) -> Self {
        Self {
            enabled: true,
            max_retries,
            ..Self::default()
        }
    }
}

/// Defines the behavior of the in-memory comparison cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if an entry is present; otherwise compute and write the result. (Default)
    Use,
    /// Always recompute, bypassing any cached entry, and write the new result to the cache.
    Refresh,
    /// Always recompute and do not read from or write to the cache.
    Bypass,
}

impl super::FilingsClient {
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, FilingsError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled || cfg.max_retries == 0 {
            return Ok(req.send().await?);
        }

        let mut attempt = 0;
        loop {
            let this = req
                .try_clone()
                .ok_or_else(|| FilingsError::Data("request cannot be retried".into()))?;
            match this.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.retry_on_status.contains(&code) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(status = code, attempt, "retrying request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let transient = (cfg.retry_on_timeout && e.is_timeout())
                        || (cfg.retry_on_connect && e.is_connect());
                    if attempt < cfg.max_retries && transient {
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}
