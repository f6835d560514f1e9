// Business domains
pub mod inbound;
