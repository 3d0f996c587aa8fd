//! Feedback listing and submission.

use serde::Serialize;
use serde_json::Value;

use crate::{error::PortalError, http::Transport};

pub const LIST_FEEDBACK_PATH: &str = "/feedback/list";
pub const CREATE_FEEDBACK_PATH: &str = "/feedback/add";

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackMessage {
    /// Category chosen on the form, e.g. "complaint" or "suggestion". The
    /// backend expects the camelCase wire name.
    #[serde(rename = "feedbackType")]
    pub feedback_type: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

/// Fetches all feedback entries. The body comes back unchanged, whatever
/// the status code.
///
/// # Errors
/// Transport failures propagate unchanged.
pub async fn list_feedback(transport: &dyn Transport) -> Result<Value, PortalError> {
    let response = transport.get(LIST_FEEDBACK_PATH).await?;
    Ok(response.data)
}

/// Submits a feedback entry. Any response the transport delivers counts as
/// success.
///
/// # Errors
/// Transport failures propagate unchanged.
pub async fn create_feedback(
    transport: &dyn Transport,
    feedback: &FeedbackMessage,
) -> Result<Value, PortalError> {
    let body = serde_json::to_value(feedback)?;
    let response = transport.post(CREATE_FEEDBACK_PATH, body).await?;
    Ok(response.data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::http::mock::MockTransport;
    use http::StatusCode;
    use serde_json::json;

    fn sample() -> FeedbackMessage {
        FeedbackMessage {
            feedback_type: "suggestion".to_string(),
            name: "B".to_string(),
            mobile: "2".to_string(),
            email: "b@c.d".to_string(),
            message: "More hours".to_string(),
        }
    }

    #[tokio::test]
    async fn list_issues_get_and_returns_body() -> Result<(), PortalError> {
        let payload = json!([{"id": 1, "message": "hi"}]);
        let transport = MockTransport::respond(StatusCode::OK, payload.clone());

        let data = list_feedback(&transport).await?;
        assert_eq!(data, payload);

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "GET");
        assert_eq!(calls[0].path, LIST_FEEDBACK_PATH);
        assert_eq!(calls[0].body, None);
        Ok(())
    }

    #[tokio::test]
    async fn list_accepts_non_200_status() -> Result<(), PortalError> {
        let payload = json!({"error": "maintenance"});
        let transport = MockTransport::respond(StatusCode::SERVICE_UNAVAILABLE, payload.clone());

        let data = list_feedback(&transport).await?;
        assert_eq!(data, payload);
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_exact_body_with_camel_case_type() -> Result<(), PortalError> {
        let transport = MockTransport::respond(StatusCode::OK, json!({}));
        create_feedback(&transport, &sample()).await?;

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, CREATE_FEEDBACK_PATH);

        let body = calls[0].body.as_ref().unwrap();
        assert_eq!(
            body,
            &json!({
                "feedbackType": "suggestion",
                "name": "B",
                "mobile": "2",
                "email": "b@c.d",
                "message": "More hours"
            })
        );
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["feedbackType", "name", "mobile", "email", "message"]);
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_propagates_unwrapped() {
        let transport = MockTransport::fail("timeout");

        let err = list_feedback(&transport).await;
        match err {
            Err(PortalError::Internal(e)) => assert_eq!(e.to_string(), "timeout"),
            other => panic!("expected transport failure to pass through, got {other:?}"),
        }
    }
}
