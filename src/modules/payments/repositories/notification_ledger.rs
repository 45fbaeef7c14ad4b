use crate::core::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Bookkeeping of invoices whose notification has already been accepted.
///
/// The signing core is stateless; duplicate deliveries are detected here.
#[async_trait]
pub trait NotificationLedger: Send + Sync {
    /// Record an accepted invoice. Returns `false` if it was already recorded.
    async fn record(&self, invoice_id: u64) -> Result<bool>;
}

/// Process-local ledger; forgets everything on restart
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accepted: Mutex<HashSet<u64>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationLedger for InMemoryLedger {
    async fn record(&self, invoice_id: u64) -> Result<bool> {
        Ok(self.accepted.lock().await.insert(invoice_id))
    }
}
