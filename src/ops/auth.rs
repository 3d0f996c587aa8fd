//! Login operations for portal administrators and MSME-business users.
//!
//! Unlike the rest of the façade, these two operations inspect the HTTP
//! status: anything other than 200 is a failed login, reported as
//! [`PortalError::LoginFailed`] with the backend's response discarded. The
//! asymmetry matches the backend contract the frontend was built against.

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{error::PortalError, http::Transport};

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const USER_LOGIN_PATH: &str = "/msme-business/login";

#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// The user login endpoint spells the email field differently from the
/// admin one; the wire name is part of the contract.
#[derive(Debug, Clone, Serialize)]
pub struct UserCredentials {
    pub email_address: String,
    pub password: String,
}

/// Authenticates a portal administrator.
///
/// # Errors
/// [`PortalError::LoginFailed`] on any non-200 status; transport failures
/// propagate unchanged.
pub async fn admin_login(
    transport: &dyn Transport,
    credentials: &AdminCredentials,
) -> Result<Value, PortalError> {
    let body = serde_json::to_value(credentials)?;
    let response = transport.post(ADMIN_LOGIN_PATH, body).await?;

    if response.status != StatusCode::OK {
        return Err(PortalError::LoginFailed);
    }

    Ok(response.data)
}

/// Authenticates an MSME-business user.
///
/// # Errors
/// [`PortalError::LoginFailed`] on any non-200 status; transport failures
/// propagate unchanged.
pub async fn user_login(
    transport: &dyn Transport,
    credentials: &UserCredentials,
) -> Result<Value, PortalError> {
    let body = serde_json::to_value(credentials)?;
    let response = transport.post(USER_LOGIN_PATH, body).await?;

    if response.status != StatusCode::OK {
        return Err(PortalError::LoginFailed);
    }

    Ok(response.data)
}
