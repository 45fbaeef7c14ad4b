pub mod notification_ledger;

pub use notification_ledger::{InMemoryLedger, NotificationLedger};
