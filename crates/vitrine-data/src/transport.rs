//! Outbound HTTP seam.

use async_trait::async_trait;
use http::StatusCode;

use crate::client::FetchError;

/// A completed HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Issues plain GET requests: no auth, no body, no custom headers.
///
/// Futures are not required to be `Send`; the Spin host runs a
/// single-threaded executor.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url).await
    }
}

/// Transport backed by the Spin outbound HTTP host API.
#[cfg(feature = "spin")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(feature = "spin")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let req = spin_sdk::http::Request::get(url).build();
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = StatusCode::from_u16(*resp.status())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(HttpResponse::new(status, resp.body().to_vec()))
    }
}
