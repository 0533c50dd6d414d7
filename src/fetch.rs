//! HTTP fetch collaborator: a thin `reqwest` wrapper applying the
//! configured timeout, user agent, extra headers and optional proxy.

use crate::types::FetchOptions;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use thiserror::Error;

const MAX_BODY_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Errors that can occur while fetching a URL during discovery.
///
/// All of these are recovered at the call site: a failed fetch means
/// "no feeds from this source", never an aborted discovery.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,
    /// HTTP response with an unusable status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the 5MB size limit
    #[error("response too large")]
    TooLarge,
}

/// Result of a single fetch: the decoded body, the status code, and the
/// URL the request actually ended up at after redirects.
#[derive(Debug)]
pub struct FetchResponse {
    pub body: String,
    pub status: u16,
    pub final_url: String,
}

/// HTTP client configured once per [`crate::FeedFinder`] from [`FetchOptions`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Builds a client with the options' user agent, default headers and
    /// proxy applied. Header entries that are not valid HTTP header
    /// names/values are skipped with a warning rather than failing the
    /// whole configuration.
    pub fn new(options: &FetchOptions) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => {
                    tracing::warn!(header = %name, "Skipping invalid request header");
                }
            }
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .default_headers(headers);

        if let Some(proxy) = &options.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            timeout: Duration::from_millis(options.timeout_ms),
        })
    }

    /// Fetches a URL, enforcing the configured timeout as a hard deadline
    /// and capping the body at 5MB. Does not error on non-2xx statuses;
    /// callers decide what a usable status is.
    pub async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = tokio::time::timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let bytes = read_limited_bytes(response).await?;

        Ok(FetchResponse {
            body: String::from_utf8_lossy(&bytes).into_owned(),
            status,
            final_url,
        })
    }
}

/// Reads a response body with a 5MB size limit using stream-based reading.
async fn read_limited_bytes(response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > MAX_BODY_SIZE {
            return Err(FetchError::TooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > MAX_BODY_SIZE {
            return Err(FetchError::TooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
