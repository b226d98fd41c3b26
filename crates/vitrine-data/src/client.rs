//! Single-shot JSON fetch client.

use serde::de::DeserializeOwned;

use crate::cache_bust::cache_busted;
use crate::clock::{Clock, SystemClock};
use crate::transport::Transport;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// Coarse failure taxonomy of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response.
    Transport,
    /// A response arrived with a non-success status.
    Status,
    /// The body could not be decoded.
    Body,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connection(_) | Self::Request(_) => FailureKind::Transport,
            Self::Http { .. } => FailureKind::Status,
            Self::Deserialization(_) => FailureKind::Body,
        }
    }
}

impl FailureKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Body => "body",
        }
    }
}

/// Fetches JSON documents with a cache-busting timestamp.
///
/// One request per call. No retry, no timeout.
pub struct FetchClient<T, C = SystemClock> {
    transport: T,
    clock: C,
    cache_bust_param: String,
}

impl<T: Transport> FetchClient<T, SystemClock> {
    /// Create a client on the wall clock.
    pub fn new(transport: T) -> Self {
        Self::with_clock(transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> FetchClient<T, C> {
    pub fn with_clock(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            cache_bust_param: "t".to_string(),
        }
    }

    /// Set the query parameter that carries the timestamp.
    pub fn with_cache_bust_param(mut self, param: impl Into<String>) -> Self {
        self.cache_bust_param = param.into();
        self
    }

    /// The URL that would be requested for `url` right now.
    pub fn request_url(&self, url: &str) -> String {
        cache_busted(url, &self.cache_bust_param, self.clock.now_millis())
    }

    /// GET `url` (cache-busted) and decode the body as `D`.
    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let request_url = self.request_url(url);
        let resp = self.transport.get(&request_url).await?;

        if !resp.status.is_success() {
            return Err(FetchError::Http {
                status: resp.status.as_u16(),
                url: request_url,
            });
        }

        serde_json::from_slice(&resp.body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
