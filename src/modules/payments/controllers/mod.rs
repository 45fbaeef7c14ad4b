pub mod form_controller;
pub mod result_controller;

use actix_web::web;

pub use form_controller::FormRequest;
pub use result_controller::REJECTION_BODY;

/// Configure payment routes
///
/// Expects `web::Data<PaymentSigner>` and `web::Data<dyn NotificationLedger>`
/// to be registered on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .service(form_controller::create_form)
            .service(form_controller::submit_amount)
            .service(
                web::resource("/result")
                    .route(web::post().to(result_controller::receive_result_form))
                    .route(web::get().to(result_controller::receive_result_query)),
            ),
    );
}
