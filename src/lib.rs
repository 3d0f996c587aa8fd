//! Async REST client for the MSME business portal backend.
//!
//! This crate wraps the portal's public endpoints (authentication, contact
//! form, feedback, subscriptions) behind narrow façade operations. The
//! implementation is organized into:
//!
//! - `error`: Error types and conversions
//! - `http`: The transport seam and the shared reqwest-backed client
//! - `ops`: One façade function per backend endpoint
//! - `client`: [`PortalClient`], the single entry point tying it together
//!
//! Each operation performs exactly one HTTP call and returns the backend's
//! JSON body unchanged, or re-raises the transport failure to the caller.
//! No validation, retry, caching, or logging happens in the façade layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use msme_portal_client::{PortalClient, ops::contact::ContactMessage};
//!
//! let client = PortalClient::from_env()?;
//!
//! let reply = client
//!     .create_contact(&ContactMessage {
//!         name: "Asha".into(),
//!         mobile: "9000000000".into(),
//!         email: "asha@example.com".into(),
//!         subject: "Onboarding".into(),
//!         message: "Please call back".into(),
//!     })
//!     .await?;
//! println!("{reply}");
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod ops;

pub use client::PortalClient;
pub use error::PortalError;
pub use http::{ApiResponse, HttpTransport, Transport};
