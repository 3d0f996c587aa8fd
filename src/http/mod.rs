//! HTTP transport seam for the portal client.
//!
//! The façade operations in [`crate::ops`] never talk to the network
//! directly; they go through the [`Transport`] trait, which mirrors the
//! backend collaborator contract: `get(path)` and `post(path, body)`, each
//! answering with a status code plus the raw JSON body, and failing on any
//! network-level error. [`HttpTransport`] is the production implementation.

mod transport;

pub use transport::{
    ApiResponse, HttpTransport, Transport, PORTAL_BASE_URL, PORTAL_TIMEOUT_SECS,
};

#[cfg(test)]
pub(crate) mod mock;
