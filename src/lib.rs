// Inbound-Email Webhook Ingress
//
// This crate provides the HTTP service that receives inbound-email webhook
// notifications from the email-relay provider, normalizes the payload, and
// acknowledges delivery. Verification logic plugs in behind the
// NotificationHook seam in domains/inbound/hook.rs.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
