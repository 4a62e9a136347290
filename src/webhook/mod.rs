//! Webhook endpoints for the WhatsApp platform
//!
//! ## Modules
//!
//! - [`routes`] - Verification handshake (GET) and event receiver (POST)

pub mod routes;

// Re-export commonly used items for convenience
pub use routes::{receive, verify};
