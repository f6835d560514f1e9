//! Normalized inbound-email notification and payload schemas.
//!
//! The relay provider delivers the same logical fields under different
//! encodings (JSON, multipart form data, raw text). Each encoding is decoded
//! into [`RawNotificationFields`] first; validation then enforces the
//! presence invariant and produces an [`InboundNotification`].

use serde::Deserialize;

use super::error::WebhookError;

/// Sender sentinel for `text/plain` deliveries, which carry no structured fields.
pub const PLAIN_TEXT_SENDER: &str = "Unknown (Plain Text)";
/// Subject sentinel for `text/plain` deliveries.
pub const PLAIN_TEXT_SUBJECT: &str = "No Subject (Plain Text)";

/// The normalized notification extracted from a webhook delivery.
///
/// Transient: logged, handed to the post-validation hook, then dropped.
/// Never persisted.
#[derive(Debug, Clone)]
pub struct InboundNotification {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

/// JSON payload shape used by the relay provider.
///
/// All fields are optional at the schema level; presence is enforced by
/// [`RawNotificationFields::validate`], not by deserialization, so a payload
/// missing a field yields 400 rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct JsonInboundPayload {
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "body-plain")]
    pub body_plain: Option<String>,
}

/// Fields extracted from any payload encoding, prior to validation.
#[derive(Debug, Default)]
pub struct RawNotificationFields {
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl From<JsonInboundPayload> for RawNotificationFields {
    fn from(payload: JsonInboundPayload) -> Self {
        Self {
            sender: payload.sender,
            subject: payload.subject,
            // The provider sends the text version as `body-plain`; accept
            // either, preferring `body`.
            body: payload.body.or(payload.body_plain),
        }
    }
}

impl RawNotificationFields {
    /// Enforce the presence invariant: all three fields non-empty.
    pub fn validate(self) -> Result<InboundNotification, WebhookError> {
        match (
            non_empty(self.sender),
            non_empty(self.subject),
            non_empty(self.body),
        ) {
            (Some(sender), Some(subject), Some(body)) => Ok(InboundNotification {
                sender,
                subject,
                body,
            }),
            _ => Err(WebhookError::MissingFields),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_plain_fallback() {
        let payload = JsonInboundPayload {
            sender: Some("a@example.org".to_string()),
            subject: Some("Hi".to_string()),
            body: None,
            body_plain: Some("plain text".to_string()),
        };
        let fields = RawNotificationFields::from(payload);
        assert_eq!(fields.body.as_deref(), Some("plain text"));
    }

    #[test]
    fn test_json_body_wins_over_body_plain() {
        let payload = JsonInboundPayload {
            sender: Some("a@example.org".to_string()),
            subject: Some("Hi".to_string()),
            body: Some("html-ish body".to_string()),
            body_plain: Some("plain text".to_string()),
        };
        let fields = RawNotificationFields::from(payload);
        assert_eq!(fields.body.as_deref(), Some("html-ish body"));
    }

    #[test]
    fn test_validate_accepts_complete_fields() {
        let fields = RawNotificationFields {
            sender: Some("a@example.org".to_string()),
            subject: Some("Hi".to_string()),
            body: Some("hello".to_string()),
        };
        let notification = fields.validate().expect("complete fields validate");
        assert_eq!(notification.sender, "a@example.org");
        assert_eq!(notification.subject, "Hi");
        assert_eq!(notification.body, "hello");
    }

    #[test]
    fn test_validate_rejects_missing_subject() {
        let fields = RawNotificationFields {
            sender: Some("a@example.org".to_string()),
            subject: None,
            body: Some("hello".to_string()),
        };
        assert!(matches!(
            fields.validate(),
            Err(WebhookError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_body() {
        let fields = RawNotificationFields {
            sender: Some("a@example.org".to_string()),
            subject: Some("Hi".to_string()),
            body: Some(String::new()),
        };
        assert!(matches!(
            fields.validate(),
            Err(WebhookError::MissingFields)
        ));
    }
}
