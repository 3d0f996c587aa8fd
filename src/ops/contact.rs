//! Contact form submission.

use serde::Serialize;
use serde_json::Value;

use crate::{error::PortalError, http::Transport};

pub const CREATE_CONTACT_PATH: &str = "/contact/add";

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Submits a contact message. Any response the transport delivers counts as
/// success, whatever its status code; the body comes back unchanged.
///
/// # Errors
/// Transport failures propagate unchanged.
pub async fn create_contact(
    transport: &dyn Transport,
    message: &ContactMessage,
) -> Result<Value, PortalError> {
    let body = serde_json::to_value(message)?;
    let response = transport.post(CREATE_CONTACT_PATH, body).await?;
    Ok(response.data)
}
