use super::fields::CustomParams;
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;

/// Typed view of an inbound payment notification.
///
/// Populated from the gateway's flat field set, validated once, then dropped.
/// Missing or unparseable fields stay at their defaults; such a record simply
/// fails checksum validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    pub invoice_id: u64,

    pub amount: Decimal,

    pub custom_params: CustomParams,

    #[serde(skip)]
    pub supplied_checksum: String,

    /// `OutSum` text as received, hashed instead of the parsed amount
    #[serde(skip)]
    pub amount_text: Option<String>,

    /// `InvId` text as received, hashed instead of the parsed id
    #[serde(skip)]
    pub invoice_id_text: Option<String>,
}

impl NotificationRecord {
    /// Amount as it enters the checksum: the received text when there is one
    pub fn signed_amount(&self) -> Cow<'_, str> {
        match &self.amount_text {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(self.amount.to_string()),
        }
    }

    /// Invoice id as it enters the checksum: the received text when there is one
    pub fn signed_invoice_id(&self) -> Cow<'_, str> {
        match &self.invoice_id_text {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(self.invoice_id.to_string()),
        }
    }
}

/// Result of processing one notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NotificationOutcome {
    /// Checksum matched; `ack` must be returned verbatim as the response body
    Accepted { invoice_id: u64, ack: String },
    /// Checksum did not match; no acknowledgment may be sent
    Rejected { invoice_id: u64 },
}

impl NotificationOutcome {
    pub fn invoice_id(&self) -> u64 {
        match self {
            NotificationOutcome::Accepted { invoice_id, .. }
            | NotificationOutcome::Rejected { invoice_id } => *invoice_id,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, NotificationOutcome::Accepted { .. })
    }
}
