use super::digest::ChecksumDigest;
use crate::core::{AppError, Result};
use crate::modules::signing::models::{
    custom_field_name, AmountFormat, CustomParams, NotificationRecord, PaymentIntent, Secret,
};
use std::sync::Arc;

/// Computes request and notification checksums.
///
/// Request:      `login:amount:invoice:secret1[:shp_k=v...]`
/// Notification: `amount:invoice:secret2[:shp_k=v...]`
///
/// The two directions use different secrets and are never compared with
/// each other.
#[derive(Debug, Clone)]
pub struct ChecksumEngine {
    digest: Arc<dyn ChecksumDigest>,
    amount_format: AmountFormat,
}

impl ChecksumEngine {
    pub fn new(digest: Arc<dyn ChecksumDigest>, amount_format: AmountFormat) -> Self {
        Self {
            digest,
            amount_format,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.digest.name()
    }

    pub fn amount_format(&self) -> AmountFormat {
        self.amount_format
    }

    /// Checksum for an outbound payment form (password #1)
    pub fn request_checksum(&self, intent: &PaymentIntent, secret: &Secret) -> Result<String> {
        if intent.merchant_login.is_empty() {
            return Err(AppError::missing("merchant login"));
        }
        ensure_secret(secret, "request secret (password #1)")?;

        let amount = intent.amount.ok_or_else(|| {
            AppError::validation("Cannot sign a payment request without a fixed amount")
        })?;

        let base = signature_base(
            &[
                &intent.merchant_login,
                &self.amount_format.render(amount),
                &intent.invoice_id.to_string(),
                secret.expose(),
            ],
            &intent.custom_params,
        );

        Ok(self.digest.hex_digest(base.as_bytes()))
    }

    /// Checksum the gateway is expected to have sent with a notification (password #2)
    pub fn notification_checksum(
        &self,
        record: &NotificationRecord,
        secret: &Secret,
    ) -> Result<String> {
        ensure_secret(secret, "notification secret (password #2)")?;

        let base = signature_base(
            &[
                &record.signed_amount(),
                &record.signed_invoice_id(),
                secret.expose(),
            ],
            &record.custom_params,
        );

        Ok(self.digest.hex_digest(base.as_bytes()))
    }
}

fn ensure_secret(secret: &Secret, what: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(AppError::missing(what));
    }
    Ok(())
}

/// Canonical custom-parameter block: `shp_a=1:shp_b=2`, keys ascending.
///
/// Empty when there are no custom parameters.
pub fn custom_param_block(params: &CustomParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", custom_field_name(key), value))
        .collect::<Vec<_>>()
        .join(":")
}

fn signature_base(parts: &[&str], params: &CustomParams) -> String {
    let mut base = parts.join(":");
    let block = custom_param_block(params);
    if !block.is_empty() {
        base.push(':');
        base.push_str(&block);
    }
    base
}
