//! Signing of outbound payment forms and validation of inbound notifications

pub mod models;
pub mod services;

pub use models::{
    AmountFormat, CustomParams, FieldName, FormFields, GatewayEnvironment, IntentBuilder,
    MerchantConfig, NotificationOutcome, NotificationRecord, PaymentIntent, Secret,
};
pub use services::{ChecksumDigest, ChecksumEngine, DigestAlgorithm, PaymentSigner, SignedForm};
