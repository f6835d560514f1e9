//! Post-validation extension seam.
//!
//! Verification logic (sale-reference lookup, confirmation email dispatch)
//! plugs in here once it exists. The default hook accepts every notification
//! without side effects.

use async_trait::async_trait;

use super::notification::InboundNotification;

/// Hook invoked after a notification passes validation.
///
/// An error from the hook maps to a 500 response so the relay provider
/// redelivers the webhook.
#[async_trait]
pub trait NotificationHook: Send + Sync {
    async fn on_notification(&self, notification: &InboundNotification) -> anyhow::Result<()>;
}

/// Default hook: no verification, no side effects.
pub struct NoopHook;

#[async_trait]
impl NotificationHook for NoopHook {
    async fn on_notification(&self, _notification: &InboundNotification) -> anyhow::Result<()> {
        Ok(())
    }
}
