//! HTTP transport for the search API.

use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::trace;

const USER_AGENT: &str = concat!("git_issues/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    /// Build a response with the canonical reason phrase for `status`.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            reason,
            body: body.into(),
        }
    }

    /// The search API answers 200; 201 is accepted as well.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// Something that can perform a GET and hand back the whole response.
pub trait SearchTransport {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response could be obtained. Non-success
    /// status codes are returned as regular responses.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Blocking `reqwest` client.
///
/// No request timeout is configured: a stalled connection blocks the run.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl SearchTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text()?;
        trace!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
