use crate::core::AppError;
use actix_web::{error, web, Error, HttpRequest};

/// Turn malformed JSON bodies into the crate's error response format
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid JSON body: {}", err)).into()
}

/// Turn malformed urlencoded bodies into the crate's error response format
pub fn form_error_handler(err: error::UrlencodedError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid form body: {}", err)).into()
}

/// Payload extractor configuration with the handlers above installed
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler));
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request payload"
    );
}
