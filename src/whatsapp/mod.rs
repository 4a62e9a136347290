//! WhatsApp Business API integration module
//!
//! This module provides the outbound side of the relay: the Graph API client
//! and the payload shapes it sends.
//!
//! ## Submodules
//!
//! - [`client`] - Graph API client issuing the outbound HTTP calls
//! - [`outgoing_schemas`] - Data structures for outgoing message payloads

pub mod client;
pub mod outgoing_schemas;
