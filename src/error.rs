//! Error types for the portal client.
//!
//! A single enum covers every failure the crate can surface. The policy is
//! strict pass-through: transport failures convert via `#[from]` and reach
//! the caller verbatim, and nothing in the crate catches, retries, or
//! substitutes a fallback value.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    /// A login endpoint answered with a status other than 200. The original
    /// response is discarded; callers get this fixed message and nothing else.
    #[error("Login failed")]
    LoginFailed,

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
