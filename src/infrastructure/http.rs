//! Shared blocking HTTP client

use crate::error::{HitokotoError, Result};
use std::time::Duration;

/// `User-Agent` sent with every request; the GitHub API rejects requests without one
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the client used for every remote call in a run
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(|e| HitokotoError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Read a response body for an error message, never failing
pub(crate) fn error_body(response: reqwest::blocking::Response) -> String {
    response
        .text()
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e))
}
