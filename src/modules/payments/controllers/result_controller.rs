use crate::core::Result;
use crate::modules::payments::repositories::NotificationLedger;
use crate::modules::signing::{NotificationOutcome, PaymentSigner};
use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use tracing::warn;

/// Body returned to the gateway when the checksum does not match
pub const REJECTION_BODY: &str = "bad sign";

/// Payment notification from the gateway (Result URL)
///
/// POST /payments/result (application/x-www-form-urlencoded)
/// GET  /payments/result (query string)
///
/// # Returns
/// * `200 OK` - `OK<InvId>` as plain text; also for repeated deliveries
/// * `400 Bad Request` - Checksum mismatch
/// * `500 Internal Server Error` - Notification secret not configured
pub async fn receive_result_form(
    form: web::Form<HashMap<String, String>>,
    signer: web::Data<PaymentSigner>,
    ledger: web::Data<dyn NotificationLedger>,
) -> Result<HttpResponse> {
    handle_notification(&form, &signer, ledger.get_ref()).await
}

pub async fn receive_result_query(
    query: web::Query<HashMap<String, String>>,
    signer: web::Data<PaymentSigner>,
    ledger: web::Data<dyn NotificationLedger>,
) -> Result<HttpResponse> {
    handle_notification(&query, &signer, ledger.get_ref()).await
}

async fn handle_notification(
    fields: &HashMap<String, String>,
    signer: &PaymentSigner,
    ledger: &dyn NotificationLedger,
) -> Result<HttpResponse> {
    match signer.process_notification(fields)? {
        NotificationOutcome::Accepted { invoice_id, ack } => {
            if !ledger.record(invoice_id).await? {
                // Acknowledge again so the gateway stops retrying
                warn!(invoice_id, "Duplicate payment notification");
            }

            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(ack))
        }
        NotificationOutcome::Rejected { .. } => Ok(HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(REJECTION_BODY)),
    }
}
