//! In-memory [`Transport`] double for the façade tests.
//!
//! Replays a canned response (or failure) for every call and records the
//! method, path, and body it was invoked with, so tests can assert on the
//! exact wire contract without a network.

use anyhow::anyhow;
use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use std::sync::Mutex;

use crate::error::PortalError;

use super::{ApiResponse, Transport};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

enum Behavior {
    Respond { status: StatusCode, data: Value },
    Fail(String),
}

pub(crate) struct MockTransport {
    behavior: Behavior,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn respond(status: StatusCode, data: Value) -> Self {
        Self {
            behavior: Behavior::Respond { status, data },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call rejects with an internal error carrying `message`, standing
    /// in for a network-level failure.
    pub fn fail(message: &str) -> Self {
        Self {
            behavior: Behavior::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, method: &'static str, path: &str, body: Option<Value>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method,
                path: path.to_string(),
                body,
            });
        }
    }

    fn outcome(&self) -> Result<ApiResponse, PortalError> {
        match &self.behavior {
            Behavior::Respond { status, data } => Ok(ApiResponse {
                status: *status,
                data: data.clone(),
            }),
            Behavior::Fail(message) => Err(PortalError::Internal(anyhow!("{message}"))),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<ApiResponse, PortalError> {
        self.record("GET", path, None);
        self.outcome()
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, PortalError> {
        self.record("POST", path, Some(body));
        self.outcome()
    }
}
