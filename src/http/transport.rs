//! Shared HTTP client configuration and the reqwest-backed transport.
//!
//! This module provides:
//! - Environment-based configuration (base URL, request timeout)
//! - The [`Transport`] trait that the façade operations depend on
//! - [`HttpTransport`], a `reqwest` client built once at construction and
//!   wrapped with request tracing middleware

use std::{env, sync::LazyLock, time::Duration};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use http::{Extensions, StatusCode};
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde_json::Value;
use tracing::Span;

use crate::error::PortalError;

// Load configuration from environment variables
pub static PORTAL_BASE_URL: LazyLock<Result<String>> = LazyLock::new(|| {
    env::var("PORTAL_BASE_URL").map_err(|e| anyhow!("PORTAL_BASE_URL must be set: {e}"))
});

pub static PORTAL_TIMEOUT_SECS: LazyLock<Result<u64>> = LazyLock::new(|| {
    Ok(env::var("PORTAL_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS))
});

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What the backend sent back: the HTTP status plus the JSON body, relayed
/// without inspection. Individual operations decide what counts as success.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub data: Value,
}

/// Collaborator contract for the shared HTTP client.
///
/// Implementations issue exactly one request per call against a fixed base
/// URL, fail with a transport error on network-level problems, and never
/// transform the response payload.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    /// Fails on any network-level problem; never on an HTTP error status.
    async fn get(&self, path: &str) -> Result<ApiResponse, PortalError>;

    /// # Errors
    /// Fails on any network-level problem; never on an HTTP error status.
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, PortalError>;
}

// Custom tracing backend for reqwest to integrate with OpenTelemetry.
// Note: this struct is used via TracingMiddleware<PortalSpan>, but Rust can't
// detect this usage statically, hence the dead_code attribute.
#[allow(dead_code)]
struct PortalSpan;

impl ReqwestOtelSpanBackend for PortalSpan {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "portal-api-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Production [`Transport`]: a single `reqwest` client constructed once and
/// shared read-only by every façade operation.
pub struct HttpTransport {
    client: ClientWithMiddleware,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport against `base_url` with the default 30 second
    /// request timeout.
    ///
    /// # Errors
    /// Returns [`PortalError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PortalError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Builds a transport with a custom request timeout. Some deployments sit
    /// behind slow gateways and need more headroom than the default.
    ///
    /// # Errors
    /// Returns [`PortalError::Http`] if the underlying client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PortalError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let client = ClientBuilder::new(client)
            .with(TracingMiddleware::<PortalSpan>::new())
            .build();

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Builds a transport from `PORTAL_BASE_URL` and `PORTAL_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns [`PortalError::MissingConfig`] when `PORTAL_BASE_URL` is not
    /// set, and [`PortalError::Http`] if the client cannot be built.
    pub fn from_env() -> Result<Self, PortalError> {
        let base_url = PORTAL_BASE_URL
            .as_ref()
            .map_err(|e| PortalError::MissingConfig(e.to_string()))?;
        let timeout = PORTAL_TIMEOUT_SECS
            .as_ref()
            .map_err(|e| PortalError::MissingConfig(e.to_string()))?;

        Self::with_timeout(base_url.clone(), Duration::from_secs(*timeout))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<ApiResponse, PortalError> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let data = response.json().await?;
        Ok(ApiResponse { status, data })
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, PortalError> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        let status = response.status();
        let data = response.json().await?;
        Ok(ApiResponse { status, data })
    }
}
