//! # WhatsApp API Client
//!
//! This module provides a client for the WhatsApp Business (Graph) API.
//! Every method issues exactly one outbound HTTP call and relays whatever
//! JSON the API returns, including error payloads: non-2xx statuses are
//! logged but not propagated, so handlers can wrap the body in the local
//! success envelope unchanged.

use crate::{config::AppConfig, consts, whatsapp::outgoing_schemas::RegisterPayload};
use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;

/// WhatsApp API client for message sending and account management
pub struct WhatsAppClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Authentication token
    auth_token: String,
}

impl WhatsAppClient {
    /// Creates a new WhatsApp client from the loaded configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth_token: config.meta_access_token.clone(),
        }
    }

    /// Graph API URL for an edge of a node, e.g. `.../v20.0/<id>/messages`
    fn endpoint(node_id: &str, edge: &str) -> String {
        format!(
            "{base}/{node_id}/{edge}",
            base = consts::GRAPH_API_BASE_URL
        )
    }

    /// Sends a message payload to the `/messages` edge of a phone number
    ///
    /// # Arguments
    /// * `phone_number_id` - WhatsApp Business phone number ID to send from
    /// * `message` - Any serializable outgoing message payload
    pub async fn send_message<T: serde::Serialize>(
        &self,
        phone_number_id: &str,
        message: &T,
    ) -> Result<Value> {
        let response = self
            .client
            .post(Self::endpoint(phone_number_id, "messages"))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to WhatsApp API")?;

        Self::relay_response(response).await
    }

    /// Registers a phone number for Cloud API usage with the fixed PIN
    pub async fn register_phone_number(&self, phone_number_id: &str) -> Result<Value> {
        let response = self
            .client
            .post(Self::endpoint(phone_number_id, "register"))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(&RegisterPayload::new())
            .send()
            .await
            .context("Failed to send register request to WhatsApp API")?;

        Self::relay_response(response).await
    }

    /// Lists the phone numbers attached to a business account
    pub async fn list_phone_numbers(&self, account_id: &str) -> Result<Value> {
        let response = self
            .client
            .get(Self::endpoint(account_id, "phone_numbers"))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await
            .context("Failed to fetch phone numbers from WhatsApp API")?;

        Self::relay_response(response).await
    }

    /// Subscribes the app to webhook events of a business account.
    /// The Graph API expects no body on this edge.
    pub async fn subscribe_account(&self, account_id: &str) -> Result<Value> {
        let response = self
            .client
            .post(Self::endpoint(account_id, "subscribed_apps"))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await
            .context("Failed to send subscribe request to WhatsApp API")?;

        Self::relay_response(response).await
    }

    /// Relays the API response body verbatim.
    ///
    /// Non-success statuses are logged and the body is still returned, so
    /// the caller cannot distinguish outbound failure from success by status
    /// code alone. A body that is not JSON at all is the one error path.
    async fn relay_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!("WhatsApp API returned error status {status}");
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse WhatsApp API response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_routing_id() {
        let url = WhatsAppClient::endpoint("123", "messages");
        assert_eq!(url, "https://graph.facebook.com/v20.0/123/messages");
        assert!(url.ends_with("/123/messages"));
    }

    #[test]
    fn test_endpoint_account_edges() {
        assert!(WhatsAppClient::endpoint("42", "phone_numbers").ends_with("/42/phone_numbers"));
        assert!(WhatsAppClient::endpoint("42", "subscribed_apps").ends_with("/42/subscribed_apps"));
        assert!(WhatsAppClient::endpoint("42", "register").ends_with("/42/register"));
    }
}
