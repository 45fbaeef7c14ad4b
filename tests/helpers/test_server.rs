// Test application wiring, mirroring src/main.rs without binding a socket.

use actix_web::{web, App};
use paysigner::middleware::error_handler;
use paysigner::modules::{health, payments};
use paysigner::payments::{InMemoryLedger, NotificationLedger};
use paysigner::signing::PaymentSigner;
use std::sync::Arc;

/// Application with the full route set, a given signer and an empty ledger
pub fn test_app(
    signer: PaymentSigner,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let ledger: Arc<dyn NotificationLedger> = Arc::new(InMemoryLedger::new());

    App::new()
        .app_data(web::Data::new(signer))
        .app_data(web::Data::from(ledger))
        .configure(error_handler::configure)
        .configure(health::configure)
        .configure(payments::configure)
}
