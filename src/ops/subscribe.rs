//! Newsletter subscription listing and signup.

use serde::Serialize;
use serde_json::Value;

use crate::{error::PortalError, http::Transport};

pub const LIST_SUBSCRIPTIONS_PATH: &str = "/subscribe/list";
pub const CREATE_SUBSCRIBE_PATH: &str = "/subscribe/add";

#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub email: String,
}

/// Fetches all subscriptions. The body comes back unchanged, whatever the
/// status code.
///
/// # Errors
/// Transport failures propagate unchanged.
pub async fn list_subscriptions(transport: &dyn Transport) -> Result<Value, PortalError> {
    let response = transport.get(LIST_SUBSCRIPTIONS_PATH).await?;
    Ok(response.data)
}

/// Signs an email address up. Any response the transport delivers counts as
/// success.
///
/// # Errors
/// Transport failures propagate unchanged.
pub async fn create_subscribe(
    transport: &dyn Transport,
    subscription: &Subscription,
) -> Result<Value, PortalError> {
    let body = serde_json::to_value(subscription)?;
    let response = transport.post(CREATE_SUBSCRIBE_PATH, body).await?;
    Ok(response.data)
}
