use crate::modules::signing::PaymentSigner;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub merchant_login: bool,
    pub request_secret: bool,
    pub notification_secret: bool,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 until both directions can be signed
pub async fn readiness_check(signer: web::Data<PaymentSigner>) -> impl Responder {
    let config = signer.config();
    let checks = ReadinessChecks {
        merchant_login: !config.merchant_login.is_empty(),
        request_secret: config.request_secret().is_ok(),
        notification_secret: config.notification_secret().is_ok(),
    };
    let ready = checks.merchant_login && checks.request_secret && checks.notification_secret;

    if !ready {
        tracing::warn!(?checks, "Readiness check failed");
    }

    let response = ReadinessResponse { ready, checks };
    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
