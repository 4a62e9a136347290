pub const GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v20.0";
pub const MESSAGING_PRODUCT: &str = "whatsapp";

pub const TEMPLATE_NAME: &str = "hello_world";
pub const TEMPLATE_LANGUAGE_CODE: &str = "en_US";

pub const REGISTRATION_PIN: &str = "123456";
