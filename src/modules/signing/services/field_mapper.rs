use super::checksum::ChecksumEngine;
use crate::core::Result;
use crate::modules::signing::models::fields::flag;
use crate::modules::signing::models::{FieldName, FormFields, PaymentIntent, Secret};

/// Map a payment intent onto gateway form fields.
///
/// Without an amount this is the open-amount form: `OutSum=0` and
/// `AutoSubmit=0`, unsigned. With an amount every protocol field is emitted,
/// signed with the request secret, followed by custom parameters and the
/// optional test marker.
pub fn build_fields(
    intent: &PaymentIntent,
    engine: &ChecksumEngine,
    request_secret: &Secret,
) -> Result<FormFields> {
    let amount = match intent.amount {
        Some(amount) => amount,
        None => return Ok(open_amount_fields()),
    };

    let checksum = engine.request_checksum(intent, request_secret)?;

    let mut fields = FormFields::new().with_custom_params(&intent.custom_params);
    fields.insert(FieldName::MrchLogin, intent.merchant_login.as_str());
    fields.insert(FieldName::InvId, intent.invoice_id.to_string());
    fields.insert(FieldName::Desc, intent.description.as_str());
    fields.insert(FieldName::IncCurrLabel, intent.currency_label.as_str());
    fields.insert(FieldName::Culture, intent.culture.as_str());
    fields.insert(FieldName::Encoding, intent.encoding.as_str());
    fields.insert(FieldName::OutSum, engine.amount_format().render(amount));
    fields.insert(FieldName::SignatureValue, checksum);
    fields.insert(FieldName::AutoSubmit, flag(intent.auto_submit));

    // Valid against the live endpoint too, for test payments on approved shops
    if intent.test_approval {
        fields.insert(FieldName::IsTest, flag(true));
    }

    Ok(fields)
}

/// Fields of the form where the payer types the amount
pub fn open_amount_fields() -> FormFields {
    let mut fields = FormFields::new();
    fields.insert(FieldName::OutSum, "0");
    fields.insert(FieldName::AutoSubmit, flag(false));
    fields
}
