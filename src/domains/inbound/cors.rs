//! CORS header set for the webhook endpoint.
//!
//! The relay provider's test console issues browser preflights, so the
//! endpoint answers OPTIONS and attaches the same headers to every POST
//! response. The header values never change at runtime; the set is built
//! once at startup and cloned into responses.

use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderMap;

/// Build the CORS header set from the configured allowed origin.
pub fn cors_headers(allow_origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(allow_origin)
            .unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}
