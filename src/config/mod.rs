use crate::core::{AppError, Culture, Result};
use crate::modules::signing::{
    AmountFormat, DigestAlgorithm, GatewayEnvironment, MerchantConfig, Secret,
};
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub merchant: MerchantConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    /// Fallback tracing filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        format!("paysigner={},actix_web=info", self.log_level)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            app: AppConfig {
                env: or("APP_ENV", "development"),
                log_level: or("LOG_LEVEL", "info"),
            },
            server: ServerConfig::from_vars(&var)?,
            merchant: merchant_from_vars(&var)?,
        };

        Ok(config)
    }

    /// Validate configuration for serving traffic.
    ///
    /// Secrets are optional while loading; the server refuses to start
    /// without them.
    pub fn validate(&self) -> Result<()> {
        if self.merchant.merchant_login.is_empty() {
            return Err(AppError::missing("MERCHANT_LOGIN not set"));
        }

        self.merchant
            .request_secret()
            .map_err(|_| AppError::missing("MERCHANT_PASSWORD1 not set"))?;
        self.merchant
            .notification_secret()
            .map_err(|_| AppError::missing("MERCHANT_PASSWORD2 not set"))?;

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn merchant_from_vars<F>(var: &F) -> Result<MerchantConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut merchant = MerchantConfig::new(var("MERCHANT_LOGIN").unwrap_or_default());

    merchant.request_secret = var("MERCHANT_PASSWORD1").map(Secret::from);
    merchant.notification_secret = var("MERCHANT_PASSWORD2").map(Secret::from);

    merchant.environment =
        GatewayEnvironment::from_test_flag(parse_flag(var, "GATEWAY_TEST_MODE")?);
    merchant.test_approval = parse_flag(var, "GATEWAY_TEST_APPROVAL")?;

    if let Some(label) = var("DEFAULT_CURRENCY_LABEL") {
        merchant.currency_label = label;
    }
    if let Some(culture) = var("DEFAULT_CULTURE") {
        merchant.culture = culture
            .parse::<Culture>()
            .map_err(|e| AppError::configuration(format!("Invalid DEFAULT_CULTURE: {}", e)))?;
    }
    if let Some(encoding) = var("DEFAULT_ENCODING") {
        merchant.encoding = encoding;
    }
    if let Some(algorithm) = var("CHECKSUM_ALGORITHM") {
        merchant.algorithm = algorithm
            .parse::<DigestAlgorithm>()
            .map_err(|e| AppError::configuration(format!("Invalid CHECKSUM_ALGORITHM: {}", e)))?;
    }
    if let Some(places) = var("AMOUNT_DECIMAL_PLACES") {
        let places = places
            .parse::<u32>()
            .map_err(|_| AppError::configuration("Invalid AMOUNT_DECIMAL_PLACES"))?;
        merchant.amount_format = AmountFormat::Fixed(places);
    }

    Ok(merchant)
}

fn parse_flag<F>(var: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::configuration(format!("Invalid {}: {}", key, value))),
        },
    }
}
