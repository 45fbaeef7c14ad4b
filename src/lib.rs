//! Signing and notification validation for a hosted payment form gateway.
//!
//! The core lives in [`modules::signing`]: it builds signed form fields for an
//! outbound payment and validates the gateway's asynchronous notification.
//! [`modules::payments`] is a thin actix-web transport around it.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::payments;
pub use modules::signing;
pub use modules::signing::{MerchantConfig, PaymentIntent, PaymentSigner};
