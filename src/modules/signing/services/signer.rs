use super::checksum::ChecksumEngine;
use super::digest::ChecksumDigest;
use super::{field_mapper, notification_validator};
use crate::core::Result;
use crate::modules::signing::models::{
    FormFields, IntentBuilder, MerchantConfig, NotificationOutcome, NotificationRecord,
    PaymentIntent,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Signed form handed to the transport: where to post it and what to post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedForm {
    /// `None` for the open-amount form, which is posted back to this service
    pub action: Option<&'static str>,
    pub fields: FormFields,
}

/// Entry point for both protocol directions.
///
/// Holds the merchant configuration read-only; cheap to clone and safe to
/// share between concurrent requests.
#[derive(Debug, Clone)]
pub struct PaymentSigner {
    config: Arc<MerchantConfig>,
    engine: ChecksumEngine,
}

impl PaymentSigner {
    /// Create a signer using the digest selected in the configuration
    pub fn new(config: MerchantConfig) -> Self {
        let digest = config.algorithm.digest();
        Self::with_digest(config, digest)
    }

    /// Create a signer with a custom digest strategy
    pub fn with_digest(config: MerchantConfig, digest: Arc<dyn ChecksumDigest>) -> Self {
        let engine = ChecksumEngine::new(digest, config.amount_format);
        Self {
            config: Arc::new(config),
            engine,
        }
    }

    pub fn config(&self) -> &MerchantConfig {
        &self.config
    }

    pub fn engine(&self) -> &ChecksumEngine {
        &self.engine
    }

    /// Start a payment intent with this merchant's defaults
    pub fn intent(&self) -> IntentBuilder {
        PaymentIntent::builder(&self.config)
    }

    /// Form fields for an intent; open-amount intents need no secret
    pub fn build_fields(&self, intent: &PaymentIntent) -> Result<FormFields> {
        if intent.is_open_amount() {
            debug!(invoice_id = intent.invoice_id, "Building open-amount form");
            return Ok(field_mapper::open_amount_fields());
        }

        let secret = self.config.request_secret()?;
        let fields = field_mapper::build_fields(intent, &self.engine, secret)?;

        debug!(
            invoice_id = intent.invoice_id,
            algorithm = self.engine.algorithm(),
            custom_params = intent.custom_params.len(),
            test_marker = intent.test_approval,
            "Signed payment form"
        );

        Ok(fields)
    }

    /// Gateway URL for the form, or `None` for the open-amount form
    pub fn resolve_endpoint(&self, intent: &PaymentIntent) -> Option<&'static str> {
        if intent.is_open_amount() {
            return None;
        }
        Some(self.config.environment.endpoint())
    }

    pub fn sign(&self, intent: &PaymentIntent) -> Result<SignedForm> {
        Ok(SignedForm {
            action: self.resolve_endpoint(intent),
            fields: self.build_fields(intent)?,
        })
    }

    pub fn request_checksum(&self, intent: &PaymentIntent) -> Result<String> {
        self.engine
            .request_checksum(intent, self.config.request_secret()?)
    }

    pub fn notification_checksum(&self, record: &NotificationRecord) -> Result<String> {
        self.engine
            .notification_checksum(record, self.config.notification_secret()?)
    }

    pub fn parse<I, K, V>(fields: I) -> NotificationRecord
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        notification_validator::parse(fields)
    }

    pub fn validate(&self, record: &NotificationRecord) -> Result<bool> {
        notification_validator::validate(
            record,
            &self.engine,
            self.config.notification_secret()?,
        )
    }

    pub fn acknowledge(record: &NotificationRecord) -> String {
        notification_validator::acknowledge(record)
    }

    /// Parse, validate and, when the checksum matches, acknowledge
    pub fn process_notification<I, K, V>(&self, fields: I) -> Result<NotificationOutcome>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let record = Self::parse(fields);

        if self.validate(&record)? {
            info!(
                invoice_id = record.invoice_id,
                amount = %record.amount,
                "Payment notification accepted"
            );
            Ok(NotificationOutcome::Accepted {
                invoice_id: record.invoice_id,
                ack: Self::acknowledge(&record),
            })
        } else {
            warn!(
                invoice_id = record.invoice_id,
                amount = %record.amount,
                "Payment notification rejected: checksum mismatch"
            );
            Ok(NotificationOutcome::Rejected {
                invoice_id: record.invoice_id,
            })
        }
    }
}
