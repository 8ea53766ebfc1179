//! Implements the `Ledger` trait using in-memory data.
//!
//! Note: this is compiled even in the "production" version of this app so
//! that the whole app can run, top-to-bottom, without touching the
//! filesystem (see `Mode`).

use crate::api::Ledger;
use crate::model::Donation;
use crate::seed::demo_donations;
use crate::Result;
use tokio::sync::RwLock;

/// A ledger that holds the collection in memory. Fresh instances are empty;
/// [`MemoryLedger::demo`] starts with the built-in demo records.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    donations: RwLock<Vec<Donation>>,
}

impl MemoryLedger {
    /// An empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// An in-memory ledger seeded with the demo records.
    pub fn demo() -> Self {
        Self::with_donations(demo_donations())
    }

    /// An in-memory ledger holding `donations`.
    pub fn with_donations(donations: Vec<Donation>) -> Self {
        Self {
            donations: RwLock::new(donations),
        }
    }
}

#[async_trait::async_trait]
impl Ledger for MemoryLedger {
    async fn load(&self) -> Result<Vec<Donation>> {
        Ok(self.donations.read().await.clone())
    }

    async fn save(&self, donations: &[Donation]) -> Result<()> {
        *self.donations.write().await = donations.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_is_empty() {
        let ledger = MemoryLedger::new();
        assert!(ledger.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_is_seeded() {
        let ledger = MemoryLedger::demo();
        assert_eq!(ledger.load().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_save_replaces_contents() {
        let ledger = MemoryLedger::demo();
        let donations = ledger.load().await.unwrap();
        ledger.save(&donations[..2]).await.unwrap();
        assert_eq!(ledger.load().await.unwrap().len(), 2);
    }
}
