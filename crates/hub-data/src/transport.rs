//! Outbound HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::{FetchError, Response};

/// Issues GET requests on behalf of the catalog client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request. Non-2xx statuses are returned, not raised.
    async fn get(&self, url: &str) -> Result<Response, FetchError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}
