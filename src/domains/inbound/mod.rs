// Inbound-email webhook domain
pub mod cors;
pub mod error;
pub mod hook;
pub mod notification;
pub mod webhook;

pub use cors::cors_headers;
pub use error::WebhookError;
pub use hook::{NoopHook, NotificationHook};
pub use notification::{InboundNotification, PLAIN_TEXT_SENDER, PLAIN_TEXT_SUBJECT};
pub use webhook::WebhookState;
