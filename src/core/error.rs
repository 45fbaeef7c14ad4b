use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for signing, validation and the HTTP transport
///
/// A checksum mismatch is deliberately absent: it is a normal `false`
/// outcome of validation, not a fault.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A login or secret required for the requested direction is not configured
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Configuration values that are present but unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid payment intent or payer-entered data
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Never echo configuration details back to the payer
        let error_message = match self {
            AppError::ConfigurationMissing(_) | AppError::Configuration(_) => {
                "Payment gateway is not configured".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn missing(what: impl Into<String>) -> Self {
        AppError::ConfigurationMissing(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
