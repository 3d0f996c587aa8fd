//! Façade operations for the portal backend.
//!
//! Each module wraps one endpoint group:
//! - `auth`: Admin and MSME-business user login
//! - `contact`: Contact form submission
//! - `feedback`: Feedback listing and submission
//! - `subscribe`: Subscription listing and signup
//!
//! Every operation issues exactly one HTTP call through the shared
//! [`crate::http::Transport`] and returns the backend's JSON body unchanged.
//! Failures from the transport propagate verbatim; only the two login
//! operations manufacture their own error, on any non-200 status.

pub mod auth;
pub mod contact;
pub mod feedback;
pub mod subscribe;
