pub mod amount;
pub mod fields;
pub mod intent;
pub mod merchant_config;
pub mod notification;

pub use amount::AmountFormat;
pub use fields::{
    custom_field_name, custom_key_from_field, CustomParams, FieldName, FormFields,
    CUSTOM_PARAM_PREFIX, CUSTOM_PARAM_SEPARATOR,
};
pub use intent::{IntentBuilder, PaymentIntent};
pub use merchant_config::{GatewayEnvironment, MerchantConfig, Secret, ACTION_LIVE, ACTION_TEST};
pub use notification::{NotificationOutcome, NotificationRecord};
