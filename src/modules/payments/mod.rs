//! HTTP transport around the signing core: form issuing and the gateway's
//! notification endpoint

pub mod controllers;
pub mod repositories;

pub use controllers::configure;
pub use repositories::{InMemoryLedger, NotificationLedger};
