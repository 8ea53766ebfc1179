//! Implements the `Ledger` trait with a JSON snapshot file.

use crate::api::Ledger;
use crate::model::Donation;
use crate::{fs, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// A ledger kept as a pretty-printed JSON array, by default at
/// `$GIVING_HOME/ledger.json`.
///
/// Every save rewrites the whole file. `giving init` creates it empty (or
/// with the demo records), so a missing file is an error rather than an
/// empty collection.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the ledger file with the given initial records.
    pub async fn create(path: impl Into<PathBuf>, donations: &[Donation]) -> Result<Self> {
        let ledger = Self::new(path);
        ledger.save_impl(donations).await?;
        Ok(ledger)
    }

    async fn save_impl(&self, donations: &[Donation]) -> Result<()> {
        let data =
            serde_json::to_string_pretty(donations).context("Unable to serialize the ledger")?;
        fs::write(&self.path, data)
            .await
            .context("Unable to write the ledger file")
    }
}

#[async_trait::async_trait]
impl Ledger for FileLedger {
    async fn load(&self) -> Result<Vec<Donation>> {
        fs::deserialize(&self.path)
            .await
            .with_context(|| format!("Unable to load the ledger at {}", self.path.display()))
    }

    async fn save(&self, donations: &[Donation]) -> Result<()> {
        self.save_impl(donations).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_donations;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let donations = demo_donations();

        let ledger = FileLedger::create(&path, &donations).await.unwrap();
        let loaded = ledger.load().await.unwrap();
        assert_eq!(loaded.len(), donations.len());
        assert_eq!(loaded[0].organization_name, "Red Cross");
        assert_eq!(loaded[0].id, donations[0].id);
    }

    #[tokio::test]
    async fn test_save_replaces_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let donations = demo_donations();
        let ledger = FileLedger::create(&path, &donations).await.unwrap();

        ledger.save(&donations[..1]).await.unwrap();
        let loaded = ledger.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let ledger = FileLedger::new(dir.path().join("absent.json"));
        let err = ledger.load().await.unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[tokio::test]
    async fn test_create_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let ledger = FileLedger::create(&path, &[]).await.unwrap();
        assert!(ledger.load().await.unwrap().is_empty());
        assert_eq!(fs::read(&path).await.unwrap(), "[]");
    }
}
