//! Error taxonomy for the webhook ingress endpoint.
//!
//! Every failure resolves at the handler boundary; the sender observes only
//! the status code and a short JSON message. Redelivery on failure is the
//! sender's responsibility, driven by the status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the webhook ingress handler
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Unsupported content type: {0:?}")]
    UnsupportedContentType(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Failed to decode request body: {0}")]
    Parse(#[source] anyhow::Error),

    #[error("Post-validation hook failed: {0}")]
    Hook(#[source] anyhow::Error),
}

impl WebhookError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingFields => StatusCode::BAD_REQUEST,
            // Parse and hook failures both read as processing errors to the
            // sender, which redelivers on 5xx.
            Self::Parse(_) | Self::Hook(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::UnsupportedContentType(_) => "Unsupported content type",
            Self::MissingFields => "Missing required fields",
            Self::Parse(_) | Self::Hook(_) => "Error processing request",
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Webhook request failed");
        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}
