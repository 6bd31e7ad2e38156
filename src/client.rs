//! HTTP transport for the login request.
//!
//! Thin reqwest wrapper mirroring the transport's own outcome split: any
//! 2xx response is a transport-level success and is handed back for the
//! submitter's exact-200 check; everything else is an error. The response
//! body is drained and dropped, never parsed.

use std::time::Duration;

use crate::config::Timeouts;
use crate::form::LoginForm;

/// Fixed request path. Part of the external interface, not configuration.
pub const LOGIN_PATH: &str = "/login";

/// Errors produced by the login transport.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a usable response (connection refused,
    /// DNS failure, timeout, protocol error).
    #[error("login request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("login rejected: status {status}")]
    Rejected { status: u16 },
}

/// Transport-level success: the status code, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: u16,
}

/// Capability seam over the wire call. Enables scripted fakes in tests.
#[async_trait::async_trait]
pub trait LoginTransport: Send + Sync {
    /// Issue one `POST {base_url}/login` with `form` as the URL-encoded body.
    ///
    /// # Errors
    ///
    /// [`LoginError::Request`] when no usable response arrived,
    /// [`LoginError::Rejected`] when the server answered outside the 2xx
    /// class.
    async fn post_login(&self, base_url: &str, form: &LoginForm) -> Result<LoginResponse, LoginError>;
}

/// reqwest-backed transport.
pub struct HttpLoginClient {
    http: reqwest::Client,
}

impl HttpLoginClient {
    /// Build a client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::HttpClientBuild`] if the client cannot be
    /// constructed.
    pub fn new(timeouts: Timeouts) -> Result<Self, LoginError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LoginError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl LoginTransport for HttpLoginClient {
    async fn post_login(&self, base_url: &str, form: &LoginForm) -> Result<LoginResponse, LoginError> {
        let response = self
            .http
            .post(format!("{base_url}{LOGIN_PATH}"))
            .form(form)
            .send()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;

        let status = response.status();
        // Drain the body; nothing downstream consumes it.
        let _ = response.bytes().await;

        if !status.is_success() {
            return Err(LoginError::Rejected { status: status.as_u16() });
        }
        Ok(LoginResponse { status: status.as_u16() })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
