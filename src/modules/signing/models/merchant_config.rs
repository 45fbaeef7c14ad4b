use super::amount::AmountFormat;
use crate::core::{AppError, Culture, Result};
use crate::modules::signing::services::digest::DigestAlgorithm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway endpoint used for testing
pub const ACTION_TEST: &str = "http://test.robokassa.ru/Index.aspx";

/// Gateway endpoint accepting live payments
pub const ACTION_LIVE: &str = "https://merchant.roboxchange.com/Index.aspx";

/// Shared secret configured in the merchant's shop settings.
///
/// Never serialized and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEnvironment {
    Sandbox,
    #[default]
    Production,
}

impl GatewayEnvironment {
    pub fn from_test_flag(test: bool) -> Self {
        if test {
            GatewayEnvironment::Sandbox
        } else {
            GatewayEnvironment::Production
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            GatewayEnvironment::Sandbox => ACTION_TEST,
            GatewayEnvironment::Production => ACTION_LIVE,
        }
    }
}

impl fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayEnvironment::Sandbox => write!(f, "sandbox"),
            GatewayEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Immutable merchant configuration.
///
/// Built once at start-up and shared read-only between concurrent requests.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    pub merchant_login: String,

    /// Password #1, signs outbound payment requests
    pub request_secret: Option<Secret>,

    /// Password #2, verifies inbound notifications
    pub notification_secret: Option<Secret>,

    pub environment: GatewayEnvironment,

    /// Emit `IsTest=1` on signed forms.
    ///
    /// Independent of `environment`: the live endpoint accepts the marker for
    /// test payments once the shop has been approved.
    pub test_approval: bool,

    pub currency_label: String,
    pub culture: Culture,
    pub encoding: String,
    pub algorithm: DigestAlgorithm,
    pub amount_format: AmountFormat,
}

impl MerchantConfig {
    pub fn new(merchant_login: impl Into<String>) -> Self {
        Self {
            merchant_login: merchant_login.into(),
            request_secret: None,
            notification_secret: None,
            environment: GatewayEnvironment::Production,
            test_approval: false,
            currency_label: String::new(),
            culture: Culture::Ru,
            encoding: "utf-8".to_string(),
            algorithm: DigestAlgorithm::Md5,
            amount_format: AmountFormat::Natural,
        }
    }

    pub fn with_secrets(mut self, request: impl Into<Secret>, notification: impl Into<Secret>) -> Self {
        self.request_secret = Some(request.into());
        self.notification_secret = Some(notification.into());
        self
    }

    pub fn with_environment(mut self, environment: GatewayEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_test_approval(mut self, test_approval: bool) -> Self {
        self.test_approval = test_approval;
        self
    }

    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_amount_format(mut self, amount_format: AmountFormat) -> Self {
        self.amount_format = amount_format;
        self
    }

    /// Secret for the request direction, refusing an absent or empty one
    pub fn request_secret(&self) -> Result<&Secret> {
        present(self.request_secret.as_ref(), "request secret (password #1)")
    }

    /// Secret for the notification direction, refusing an absent or empty one
    pub fn notification_secret(&self) -> Result<&Secret> {
        present(
            self.notification_secret.as_ref(),
            "notification secret (password #2)",
        )
    }
}

fn present<'a>(secret: Option<&'a Secret>, what: &str) -> Result<&'a Secret> {
    match secret {
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(AppError::missing(what)),
    }
}
