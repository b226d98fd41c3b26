//! In-memory transport.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::client::FetchError;
use crate::transport::{HttpResponse, Transport};

/// Transport that answers every request with the same canned outcome and
/// records the URLs it was asked for.
///
/// Used for offline previews from a local file and for tests.
#[derive(Debug)]
pub struct StaticTransport {
    outcome: Result<HttpResponse, String>,
    requests: RefCell<Vec<String>>,
}

impl StaticTransport {
    /// Always answer with `response`.
    pub fn respond(response: HttpResponse) -> Self {
        Self {
            outcome: Ok(response),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Always fail with a connection error.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(FetchError::Connection(message.clone())),
        }
    }
}
