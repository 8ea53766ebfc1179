//! The persistence collaborator boundary.
//!
//! The store does not know where donations are kept durably; it hands the
//! whole post-mutation collection to a [`Ledger`] and swaps its in-memory
//! state only after the ledger accepts it. A real deployment would put a
//! persistence service behind this trait; this crate ships a JSON snapshot
//! file and an in-memory stand-in.

mod file_ledger;
mod memory_ledger;

use crate::model::Donation;
use crate::notify::LogSink;
use crate::store::DonationStore;
use crate::{Config, Mode, Result};
use std::sync::Arc;

pub use file_ledger::FileLedger;
pub use memory_ledger::MemoryLedger;

/// Builds the ledger collaborator for `mode` and opens the store over it.
///
/// `Mode::File` reads and writes `$GIVING_HOME/ledger.json`; `Mode::Memory`
/// runs against the built-in demo records without touching disk.
pub async fn store(config: &Config, mode: Mode) -> Result<Arc<DonationStore>> {
    let ledger: Arc<dyn Ledger> = match mode {
        Mode::File => Arc::new(FileLedger::new(config.ledger_path())),
        Mode::Memory => Arc::new(MemoryLedger::demo()),
    };
    let store = DonationStore::open(ledger, Arc::new(LogSink)).await?;
    Ok(Arc::new(store))
}

/// Durable storage for the canonical donation collection.
///
/// Snapshot-style: `save` receives the entire collection, so a failed call
/// can never leave a partial write visible to a later `load`.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    /// Reads the full collection.
    async fn load(&self) -> Result<Vec<Donation>>;

    /// Replaces the full collection.
    async fn save(&self, donations: &[Donation]) -> Result<()>;
}
