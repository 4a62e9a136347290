use ntex::web;

/// Registers the message-sending endpoints.
///
/// # Routes
/// - `POST /send-wpp-message` - Send a text message
/// - `POST /send-template-message` - Send the hello_world template
/// - `POST /send-wpp-media-message` - Send a media message by link
pub fn messaging(cfg: &mut web::ServiceConfig) {
    cfg.service((
        super::messages::send_text,
        super::messages::send_template,
        super::messages::send_media,
    ));
}

/// Registers the account and phone-number management endpoints.
///
/// # Routes
/// - `POST /register` - Register a phone number for Cloud API usage
/// - `POST /phone-numbers` - List the phone numbers of an account
/// - `POST /subscribe` - Subscribe an account to webhook events
pub fn account(cfg: &mut web::ServiceConfig) {
    cfg.service((
        super::account::register_phone_number,
        super::account::list_phone_numbers,
        super::account::subscribe_account,
    ));
}
