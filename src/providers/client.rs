use reqwest::Client as ReqwestClient;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::utils::{CheckResult, FetchError, FetchResult};

/// HTTP client shared by every range source.
///
/// Issues a single GET per call; no caching and no retries.
#[derive(Debug, Clone)]
pub struct RangeClient {
    client: ReqwestClient,
}

impl RangeClient {
    /// Creates a new client from the HTTP settings
    pub fn new(config: &HttpConfig) -> CheckResult<Self> {
        let mut builder = ReqwestClient::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches `url` and returns the body, rejecting non-success statuses
    pub async fn get_text(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
