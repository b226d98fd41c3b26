//! Native HTTP transport.

use async_trait::async_trait;
use vitrine_sdk::prelude::{FetchError, HttpResponse, Transport};

/// Plain GET over reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_builder() {
                FetchError::Request(e.to_string())
            } else {
                FetchError::Connection(e.to_string())
            }
        })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
