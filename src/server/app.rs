//! Application setup and server configuration.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::inbound::{cors_headers, webhook, NotificationHook, WebhookState};
use crate::server::routes::health_handler;

/// Build the Axum application router
///
/// The hook is the post-validation extension seam; production wiring passes
/// [`crate::domains::inbound::NoopHook`] until verification logic exists.
pub fn build_app(config: &Config, hook: Arc<dyn NotificationHook>) -> Router {
    let state = WebhookState { hook };
    let cors = cors_headers(&config.cors_allow_origin);

    Router::new()
        // Webhook ingress (CORS headers applied inside the domain router)
        .merge(webhook::router(state, cors))
        // Health check
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}
