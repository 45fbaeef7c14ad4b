use actix_web::{web, App, HttpServer};
use anyhow::Context;
use paysigner::config::Config;
use paysigner::middleware::error_handler;
use paysigner::modules::{health, payments};
use paysigner::payments::{InMemoryLedger, NotificationLedger};
use paysigner::PaymentSigner;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting payment signer");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        gateway = %config.merchant.environment,
        algorithm = %config.merchant.algorithm,
        amount_format = %config.merchant.amount_format,
        test_approval = config.merchant.test_approval,
        "Merchant configuration loaded"
    );

    let signer = web::Data::new(PaymentSigner::new(config.merchant.clone()));
    let ledger: Arc<dyn NotificationLedger> = Arc::new(InMemoryLedger::new());
    let ledger = web::Data::from(ledger);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(signer.clone())
            .app_data(ledger.clone())
            .configure(error_handler::configure)
            .configure(health::configure)
            .configure(payments::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
