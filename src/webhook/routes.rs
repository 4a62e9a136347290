//! WhatsApp webhook endpoint handlers
//!
//! This module handles inbound requests from the WhatsApp platform. It
//! implements both the verification handshake (GET) and the event
//! receiver (POST).

use crate::{
    api::{AppState, schemas::RelayEnvelope},
    errors,
};
use log::info;
use ntex::web;
use serde::Deserialize;

/// Query parameters for webhook verification.
///
/// All parameters are optional on the wire so that a missing one fails the
/// handshake with 403 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from WhatsApp
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Webhook verification endpoint (GET)
///
/// WhatsApp sends a GET request to verify the webhook URL. Succeeds only if
/// the mode is "subscribe" and the supplied token equals the configured
/// verify token exactly.
///
/// # Returns
/// - 200 with the challenge string verbatim if verification succeeds
/// - 403 "Forbidden" for any other combination
#[web::get("/webhook")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if query.mode.as_deref() != Some("subscribe") {
        return Err(errors::UserError::Forbidden.into());
    }

    if query.verify_token.as_deref() != Some(state.config.verify_token.as_str()) {
        return Err(errors::UserError::Forbidden.into());
    }

    info!("Webhook verified successfully");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.clone().unwrap_or_default()))
}

/// Webhook receiver endpoint (POST)
///
/// Acknowledges whatever payload the platform delivers. The body is logged
/// and echoed back inside the envelope; its structure is never inspected and
/// nothing downstream is triggered.
#[web::post("/webhook")]
pub async fn receive(
    payload: web::types::Json<serde_json::Value>,
) -> Result<impl web::Responder, web::Error> {
    let payload = payload.into_inner();

    info!("Received WhatsApp message: {payload}");

    Ok(web::HttpResponse::Ok().json(&RelayEnvelope::new("Message Received", payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::AppState, config::AppConfig};
    use ntex::{
        http::{Method, StatusCode},
        web::test,
    };
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(AppConfig {
            meta_access_token: "token".to_string(),
            verify_token: "secret".to_string(),
            default_phone_number_id: "123".to_string(),
            web_server_port: 3000,
            media_file_path: "sample-9s.mp3".to_string(),
        })
    }

    #[ntex::test]
    async fn test_verify_echoes_challenge() {
        let app =
            test::init_service(web::App::new().state(test_state()).service(verify)).await;

        let req = test::TestRequest::with_uri(
            "/webhook?hub.mode=subscribe&hub.verify_token=secret&hub.challenge=challenge123",
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"challenge123");
    }

    #[ntex::test]
    async fn test_verify_rejects_wrong_token() {
        let app =
            test::init_service(web::App::new().state(test_state()).service(verify)).await;

        let req = test::TestRequest::with_uri(
            "/webhook?hub.mode=subscribe&hub.verify_token=wrong&hub.challenge=x",
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Forbidden");
    }

    #[ntex::test]
    async fn test_verify_rejects_wrong_mode() {
        let app =
            test::init_service(web::App::new().state(test_state()).service(verify)).await;

        let req = test::TestRequest::with_uri(
            "/webhook?hub.mode=unsubscribe&hub.verify_token=secret&hub.challenge=x",
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[ntex::test]
    async fn test_verify_rejects_missing_token() {
        let app =
            test::init_service(web::App::new().state(test_state()).service(verify)).await;

        let req = test::TestRequest::with_uri("/webhook?hub.mode=subscribe&hub.challenge=x")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[ntex::test]
    async fn test_verify_rejects_bare_request() {
        let app =
            test::init_service(web::App::new().state(test_state()).service(verify)).await;

        let req = test::TestRequest::with_uri("/webhook").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[ntex::test]
    async fn test_receive_echoes_payload() {
        let app = test::init_service(web::App::new().service(receive)).await;

        let payload = json!({
            "object": "whatsapp_business_account",
            "entry": [{"id": "0", "changes": []}]
        });
        let req = test::TestRequest::with_uri("/webhook")
            .method(Method::POST)
            .header("content-type", "application/json")
            .set_payload(payload.to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let envelope: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["status"], "Message Received");
        assert_eq!(envelope["data"], payload);
    }

    #[test]
    fn test_verify_query_deserialization() {
        let json = r#"{"hub.mode":"subscribe","hub.verify_token":"test123","hub.challenge":"challenge123"}"#;
        let query: VerifyQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.mode.as_deref(), Some("subscribe"));
        assert_eq!(query.verify_token.as_deref(), Some("test123"));
        assert_eq!(query.challenge.as_deref(), Some("challenge123"));
    }
}
