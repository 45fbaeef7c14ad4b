use super::checksum::ChecksumEngine;
use crate::core::Result;
use crate::modules::signing::models::{
    custom_key_from_field, FieldName, NotificationRecord, Secret,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Success marker the gateway expects before the invoice id
pub const ACK_MARKER: &str = "OK";

/// Load a notification from the gateway's flat field set.
///
/// Never fails. Unknown fields are ignored and unparseable values keep the
/// previous (default) value; `validate` is what rejects incomplete input.
/// `OutSum` and `InvId` are also kept verbatim, since the gateway signed
/// that text rather than the parsed values.
pub fn parse<I, K, V>(fields: I) -> NotificationRecord
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut record = NotificationRecord::default();

    for (name, value) in fields {
        let (name, value) = (name.as_ref(), value.as_ref());

        if let Some(key) = custom_key_from_field(name) {
            record
                .custom_params
                .insert(key.to_string(), value.to_string());
            continue;
        }

        match FieldName::from_wire(name) {
            Some(FieldName::InvId) => {
                record.invoice_id_text = Some(value.to_string());
                match value.trim().parse::<u64>() {
                    Ok(invoice_id) => record.invoice_id = invoice_id,
                    Err(_) => debug!(field = name, "Ignoring unparseable invoice id"),
                }
            }
            Some(FieldName::OutSum) => {
                record.amount_text = Some(value.to_string());
                match Decimal::from_str(value.trim()) {
                    Ok(amount) => record.amount = amount,
                    Err(_) => debug!(field = name, "Ignoring unparseable amount"),
                }
            }
            Some(FieldName::SignatureValue) => {
                record.supplied_checksum = value.trim().to_string();
            }
            _ => {}
        }
    }

    record
}

/// Recompute the notification checksum and compare it with the supplied one.
///
/// Case-insensitive; a mismatch is `Ok(false)`, not an error.
pub fn validate(
    record: &NotificationRecord,
    engine: &ChecksumEngine,
    notification_secret: &Secret,
) -> Result<bool> {
    let expected = engine.notification_checksum(record, notification_secret)?;
    Ok(checksums_match(&record.supplied_checksum, &expected))
}

/// Case-insensitive comparison in constant time for equal-length inputs
pub fn checksums_match(supplied: &str, expected: &str) -> bool {
    let supplied = supplied.to_ascii_lowercase();
    let expected = expected.to_ascii_lowercase();
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Response body that tells the gateway the notification was delivered
pub fn acknowledge(record: &NotificationRecord) -> String {
    format!("{}{}", ACK_MARKER, record.invoice_id)
}
