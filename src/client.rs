//! Entry point tying the façade operations to a shared transport.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::PortalError,
    http::{HttpTransport, Transport},
    ops::{
        auth::{self, AdminCredentials, UserCredentials},
        contact::{self, ContactMessage},
        feedback::{self, FeedbackMessage},
        subscribe::{self, Subscription},
    },
};

/// Client for the MSME portal backend.
///
/// Holds the one shared [`Transport`], constructed once and read-only for
/// the client's lifetime. Every method performs a single HTTP call and
/// relays the backend's JSON body; callers own presentation and recovery.
#[derive(Clone)]
pub struct PortalClient {
    transport: Arc<dyn Transport>,
}

impl PortalClient {
    /// Wraps an existing transport. Tests inject a double here.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds a client over the production [`HttpTransport`], configured
    /// from the environment.
    ///
    /// # Errors
    /// Returns [`PortalError::MissingConfig`] when `PORTAL_BASE_URL` is not
    /// set.
    pub fn from_env() -> Result<Self, PortalError> {
        Ok(Self::new(Arc::new(HttpTransport::from_env()?)))
    }

    // Thin delegating methods so the whole surface reads off one impl block;
    // the actual operations live in `ops::*` and are tested there.

    /// # Errors
    /// [`PortalError::LoginFailed`] on any non-200 status.
    pub async fn admin_login(&self, credentials: &AdminCredentials) -> Result<Value, PortalError> {
        auth::admin_login(self.transport.as_ref(), credentials).await
    }

    /// # Errors
    /// [`PortalError::LoginFailed`] on any non-200 status.
    pub async fn user_login(&self, credentials: &UserCredentials) -> Result<Value, PortalError> {
        auth::user_login(self.transport.as_ref(), credentials).await
    }

    /// # Errors
    /// Transport failures propagate unchanged.
    pub async fn create_contact(&self, message: &ContactMessage) -> Result<Value, PortalError> {
        contact::create_contact(self.transport.as_ref(), message).await
    }

    /// # Errors
    /// Transport failures propagate unchanged.
    pub async fn list_feedback(&self) -> Result<Value, PortalError> {
        feedback::list_feedback(self.transport.as_ref()).await
    }

    /// # Errors
    /// Transport failures propagate unchanged.
    pub async fn create_feedback(&self, entry: &FeedbackMessage) -> Result<Value, PortalError> {
        feedback::create_feedback(self.transport.as_ref(), entry).await
    }

    /// # Errors
    /// Transport failures propagate unchanged.
    pub async fn list_subscriptions(&self) -> Result<Value, PortalError> {
        subscribe::list_subscriptions(self.transport.as_ref()).await
    }

    /// # Errors
    /// Transport failures propagate unchanged.
    pub async fn create_subscribe(&self, subscription: &Subscription) -> Result<Value, PortalError> {
        subscribe::create_subscribe(self.transport.as_ref(), subscription).await
    }
}
