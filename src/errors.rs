use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

/// Errors that map to the deliberate client-facing responses: the webhook
/// verification rejection and the route-not-found fallback.
#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    Forbidden,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let body = match self {
            UserError::UrlNotFound => "Not Found",
            UserError::Forbidden => "Forbidden",
        };

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(body)
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::Forbidden => http::StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    ExternalServiceError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::ExternalServiceError(msg) => format!("[ExternalServiceError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body("Internal Server Error")
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
