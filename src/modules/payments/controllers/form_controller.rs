use crate::core::{AppError, Culture, Result};
use crate::modules::signing::models::{custom_key_from_field, FieldName};
use crate::modules::signing::PaymentSigner;
use actix_web::{post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use tracing::info;

/// Request to build a payment form
#[derive(Debug, Deserialize)]
pub struct FormRequest {
    #[serde(default)]
    pub invoice_id: u64,

    /// Omit to let the payer enter the amount
    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub description: String,

    pub currency_label: Option<String>,
    pub culture: Option<Culture>,

    #[serde(default)]
    pub custom_params: BTreeMap<String, String>,
}

/// Build a payment form
///
/// POST /payments/form
///
/// # Returns
/// * `200 OK` - Signed form, or the open-amount form with `action: null`
/// * `400 Bad Request` - Invalid amount or custom parameter key
/// * `500 Internal Server Error` - Merchant login or secret not configured
#[post("/form")]
pub async fn create_form(
    body: web::Json<FormRequest>,
    signer: web::Data<PaymentSigner>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    let mut builder = signer
        .intent()
        .invoice_id(request.invoice_id)
        .maybe_amount(request.amount)
        .description(request.description)
        .custom_params(request.custom_params);

    if let Some(currency_label) = request.currency_label {
        builder = builder.currency_label(currency_label);
    }
    if let Some(culture) = request.culture {
        builder = builder.culture(culture);
    }

    let intent = builder.build()?;
    let form = signer.sign(&intent)?;

    info!(
        invoice_id = intent.invoice_id,
        open_amount = intent.is_open_amount(),
        "Payment form issued"
    );

    Ok(HttpResponse::Ok().json(form))
}

/// Resubmission of the open-amount form with the amount the payer typed
///
/// POST /payments/amount (application/x-www-form-urlencoded)
///
/// Reads `OutSum` and optionally `InvId`, `Desc` and `shp_*` fields, then
/// returns the signed form with auto-submit enabled.
#[post("/amount")]
pub async fn submit_amount(
    form: web::Form<HashMap<String, String>>,
    signer: web::Data<PaymentSigner>,
) -> Result<HttpResponse> {
    let fields = form.into_inner();

    let amount = entered_amount(&fields)?;
    let invoice_id = match fields.get(FieldName::InvId.as_str()) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::validation(format!("Invalid invoice id: {}", raw)))?,
        None => 0,
    };

    let custom_params = fields
        .iter()
        .filter_map(|(name, value)| custom_key_from_field(name).map(|key| (key, value.as_str())));

    let mut builder = signer
        .intent()
        .invoice_id(invoice_id)
        .custom_params(custom_params);
    if let Some(description) = fields.get(FieldName::Desc.as_str()) {
        builder = builder.description(description.as_str());
    }

    let intent = builder.build()?.with_entered_amount(amount)?;
    let form = signer.sign(&intent)?;

    info!(
        invoice_id = intent.invoice_id,
        amount = %amount,
        "Payer-entered amount signed"
    );

    Ok(HttpResponse::Ok().json(form))
}

fn entered_amount(fields: &HashMap<String, String>) -> Result<Decimal> {
    let raw = fields
        .get(FieldName::OutSum.as_str())
        .ok_or_else(|| AppError::validation("Amount (OutSum) is required"))?;

    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| AppError::validation(format!("Invalid amount: {}", raw)))?;

    if amount <= Decimal::ZERO {
        return Err(AppError::validation("Amount must be greater than zero"));
    }

    Ok(amount)
}
