//! Webhook ingress handler for inbound-email notifications.
//!
//! Receives deliveries from the email-relay provider at `POST /api/webhooks`,
//! dispatches on the declared `Content-Type`, validates the extracted fields,
//! runs the post-validation hook, and acknowledges with a JSON status body.
//! The provider sends multipart form data by default but can be configured
//! for JSON; a raw-text fallback is accepted as well.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware;
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use super::error::WebhookError;
use super::hook::NotificationHook;
use super::notification::{
    JsonInboundPayload, RawNotificationFields, PLAIN_TEXT_SENDER, PLAIN_TEXT_SUBJECT,
};

/// State shared with the webhook handlers.
#[derive(Clone)]
pub struct WebhookState {
    pub hook: Arc<dyn NotificationHook>,
}

/// Acknowledgement body returned to the relay provider.
#[derive(Serialize)]
pub struct AckResponse {
    message: &'static str,
}

/// Build the axum router for webhook endpoints.
///
/// The CORS header set is attached to every response on these routes,
/// including error responses and the preflight answer.
pub fn router(state: WebhookState, cors: HeaderMap) -> Router {
    Router::new()
        .route("/api/webhooks", post(handle_inbound).options(preflight))
        .layer(middleware::map_response(
            move |mut response: Response| {
                let cors = cors.clone();
                async move {
                    response.headers_mut().extend(cors);
                    response
                }
            },
        ))
        .with_state(state)
}

/// Handle an inbound-email webhook delivery.
///
/// The declared `Content-Type` selects the parsing strategy; an unlisted or
/// absent content type is rejected with 415. Decode failures of a declared
/// type are 500 so the provider redelivers; missing fields after a clean
/// decode are 400.
async fn handle_inbound(
    State(state): State<WebhookState>,
    request: Request,
) -> Result<Json<AckResponse>, WebhookError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    tracing::debug!(content_type = %content_type, "Webhook request received");

    let fields = if content_type.contains("application/json") {
        parse_json_body(request).await?
    } else if content_type.contains("multipart/form-data") {
        parse_multipart_body(request).await?
    } else if content_type.contains("text/plain") {
        parse_text_body(request).await?
    } else {
        return Err(WebhookError::UnsupportedContentType(content_type));
    };

    let notification = fields.validate()?;

    // Operator visibility only; nothing is persisted.
    tracing::info!(
        sender = %notification.sender,
        subject = %notification.subject,
        body = %notification.body,
        "Inbound email webhook processed"
    );

    state
        .hook
        .on_notification(&notification)
        .await
        .map_err(WebhookError::Hook)?;

    Ok(Json(AckResponse {
        message: "Webhook processed successfully",
    }))
}

/// CORS preflight responder. Headers are attached by the response layer.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Decode a JSON delivery into the optional-field schema.
async fn parse_json_body(request: Request) -> Result<RawNotificationFields, WebhookError> {
    let bytes = Bytes::from_request(request, &())
        .await
        .map_err(|e| WebhookError::Parse(e.into()))?;
    let payload: JsonInboundPayload =
        serde_json::from_slice(&bytes).map_err(|e| WebhookError::Parse(e.into()))?;
    Ok(payload.into())
}

/// Read the named multipart fields the provider sends.
async fn parse_multipart_body(request: Request) -> Result<RawNotificationFields, WebhookError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| WebhookError::Parse(e.into()))?;

    let mut fields = RawNotificationFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebhookError::Parse(e.into()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| WebhookError::Parse(e.into()))?;
        match name.as_str() {
            "sender" => fields.sender = Some(value),
            "subject" => fields.subject = Some(value),
            "body-plain" => fields.body = Some(value),
            // The provider sends many more fields; only three matter here.
            _ => {}
        }
    }
    Ok(fields)
}

/// Treat the whole body as the message text; the format carries no
/// structured fields, so sender and subject get sentinel values.
async fn parse_text_body(request: Request) -> Result<RawNotificationFields, WebhookError> {
    let text = String::from_request(request, &())
        .await
        .map_err(|e| WebhookError::Parse(e.into()))?;
    Ok(RawNotificationFields {
        sender: Some(PLAIN_TEXT_SENDER.to_string()),
        subject: Some(PLAIN_TEXT_SUBJECT.to_string()),
        body: Some(text),
    })
}
