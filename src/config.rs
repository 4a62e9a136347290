//! Application configuration management.
//!
//! All values are read from the environment once at startup and passed into
//! handlers through the ntex app state, so tests can substitute their own
//! values without touching the process environment.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Relay configuration, immutable for the process lifetime.
///
/// Every field defaults so the relay can boot without credentials; outbound
/// calls are rejected by the WhatsApp API until `META_ACCESS_TOKEN` is set.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// 🔒 SENSITIVE: Bearer token presented to the WhatsApp Business API
    #[envconfig(default = "")]
    pub meta_access_token: String,

    /// 🔒 SENSITIVE: Shared secret for the webhook verification handshake.
    /// Compared with exact equality, no prefix matching.
    #[envconfig(default = "")]
    pub verify_token: String,

    /// Fallback phone number ID used when a request omits `phoneNumberId`
    /// (SEMI-SENSITIVE). If both are absent the outbound URL is malformed
    /// and the API rejects the call.
    #[envconfig(default = "")]
    pub default_phone_number_id: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "3000")]
    pub web_server_port: u16,

    /// Local file served by `GET /media` (NON-SENSITIVE)
    #[envconfig(default = "sample-9s.mp3")]
    pub media_file_path: String,
}

impl AppConfig {
    /// Resolves the routing phone number ID for an outbound message,
    /// falling back to the configured default when the request omits it.
    pub fn routing_id(&self, explicit: Option<String>) -> String {
        explicit.unwrap_or_else(|| self.default_phone_number_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_default(default_id: &str) -> AppConfig {
        AppConfig {
            meta_access_token: "token".to_string(),
            verify_token: "secret".to_string(),
            default_phone_number_id: default_id.to_string(),
            web_server_port: 3000,
            media_file_path: "sample-9s.mp3".to_string(),
        }
    }

    #[test]
    fn test_routing_id_prefers_explicit_value() {
        let config = config_with_default("123");
        assert_eq!(config.routing_id(Some("456".to_string())), "456");
    }

    #[test]
    fn test_routing_id_falls_back_to_default() {
        let config = config_with_default("123");
        assert_eq!(config.routing_id(None), "123");
    }
}
