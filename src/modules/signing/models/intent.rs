use super::fields::CustomParams;
use super::merchant_config::MerchantConfig;
use crate::core::{AppError, Culture, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A single payment request, built per form and discarded afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntent {
    pub merchant_login: String,

    /// Merchant invoice number; `0` lets the gateway assign one
    pub invoice_id: u64,

    /// `None` means the payer enters the amount (open-amount form)
    pub amount: Option<Decimal>,

    pub description: String,
    pub currency_label: String,
    pub culture: Culture,
    pub encoding: String,
    pub custom_params: CustomParams,
    pub auto_submit: bool,

    /// Append the `IsTest` marker to the signed form
    pub test_approval: bool,
}

impl PaymentIntent {
    /// Start an intent pre-filled with the merchant's defaults
    pub fn builder(config: &MerchantConfig) -> IntentBuilder {
        IntentBuilder {
            intent: PaymentIntent {
                merchant_login: config.merchant_login.clone(),
                invoice_id: 0,
                amount: None,
                description: String::new(),
                currency_label: config.currency_label.clone(),
                culture: config.culture,
                encoding: config.encoding.clone(),
                custom_params: CustomParams::new(),
                auto_submit: false,
                test_approval: config.test_approval,
            },
        }
    }

    pub fn is_open_amount(&self) -> bool {
        self.amount.is_none()
    }

    /// Complete an open-amount intent with what the payer typed.
    ///
    /// The resubmitted form goes straight to the gateway, so auto-submit is
    /// forced on.
    pub fn with_entered_amount(mut self, amount: Decimal) -> Result<Self> {
        validate_amount(amount)?;
        self.amount = Some(amount);
        self.auto_submit = true;
        Ok(self)
    }
}

/// Builder for [`PaymentIntent`]; validation happens in [`IntentBuilder::build`]
#[derive(Debug, Clone)]
pub struct IntentBuilder {
    intent: PaymentIntent,
}

impl IntentBuilder {
    pub fn invoice_id(mut self, invoice_id: u64) -> Self {
        self.intent.invoice_id = invoice_id;
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.intent.amount = Some(amount);
        self
    }

    pub fn maybe_amount(mut self, amount: Option<Decimal>) -> Self {
        self.intent.amount = amount;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.intent.description = description.into();
        self
    }

    pub fn currency_label(mut self, currency_label: impl Into<String>) -> Self {
        self.intent.currency_label = currency_label.into();
        self
    }

    pub fn culture(mut self, culture: Culture) -> Self {
        self.intent.culture = culture;
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.intent.encoding = encoding.into();
        self
    }

    pub fn custom_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.intent.custom_params.insert(key.into(), value.into());
        self
    }

    pub fn custom_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.intent
            .custom_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn auto_submit(mut self, auto_submit: bool) -> Self {
        self.intent.auto_submit = auto_submit;
        self
    }

    pub fn test_approval(mut self, test_approval: bool) -> Self {
        self.intent.test_approval = test_approval;
        self
    }

    pub fn build(self) -> Result<PaymentIntent> {
        if let Some(amount) = self.intent.amount {
            validate_amount(amount)?;
        }

        for key in self.intent.custom_params.keys() {
            validate_custom_key(key)?;
        }

        Ok(self.intent)
    }
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "Amount cannot be negative, got {}",
            amount
        )));
    }
    Ok(())
}

/// Custom keys become part of a field name, so they are restricted to
/// identifier characters.
fn validate_custom_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(AppError::validation("Custom parameter key cannot be empty"));
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::validation(format!(
            "Custom parameter key '{}' must contain only ASCII letters, digits or '_'",
            key
        )));
    }

    Ok(())
}
