use ghprofile_core::error::{FetchError, FetchResult};

use anyhow::Context;
use entrait::entrait_export as entrait;

#[derive(Clone, Debug)]
pub struct HttpClient {
    pub client: reqwest::Client,
}

impl HttpClient {
    pub fn init(user_agent: &str) -> anyhow::Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("could not build HTTP client")?;

        Ok(HttpClient { client })
    }
}

///
/// Access to the shared HTTP client, implemented by the application.
///
#[entrait]
pub trait GetHttpClient {
    fn get_http_client(&self) -> &HttpClient;
}

impl GetHttpClient for HttpClient {
    fn get_http_client(&self) -> &HttpClient {
        self
    }
}

/// Issue a single GET and return the raw body of a successful response.
#[entrait(pub GetBytes)]
async fn get_bytes(deps: &impl GetHttpClient, url: url::Url) -> FetchResult<bytes::Bytes> {
    tracing::debug!("GET {url}");

    let response = deps
        .get_http_client()
        .client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("GET {url} returned {status}");

        return Err(FetchError::Http {
            url,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("failed reading response body from {url}"))?;

    tracing::debug!("GET {url} returned {} bytes", bytes.len());

    Ok(bytes)
}
