//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::api::{FileLedger, Ledger};
use crate::config::DEFAULT_SHARE_BASE;
use crate::model::{Donation, DonorId};
use crate::seed::demo_donations;
use crate::Config;
use std::path::PathBuf;
use tempfile::TempDir;
use url::Url;

/// Test environment that sets up a giving home directory with a config file
/// and ledger. Holds TempDir to keep the directory alive for the duration of
/// the test.
pub struct TestEnv {
    temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    /// Creates a test environment with an empty ledger and no active donor.
    pub async fn new() -> Self {
        Self::with_donations(&[]).await
    }

    /// Creates a test environment whose ledger holds the demo records.
    pub async fn with_demo_data() -> Self {
        Self::with_donations(&demo_donations()).await
    }

    /// Creates a test environment whose ledger holds `donations`.
    pub async fn with_donations(donations: &[Donation]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("giving");
        let share_base = Url::parse(DEFAULT_SHARE_BASE).unwrap();
        let config = Config::create(&root, &share_base, donations).await.unwrap();
        Self { temp_dir, config }
    }

    /// Returns a clone of the Config.
    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Loads the Config fresh from disk, picking up changes a command saved.
    pub async fn reload_config(&self) -> Config {
        Config::load(self.config.root()).await.unwrap()
    }

    /// Sets the active donor, as `giving use` would.
    pub async fn sign_in(&mut self, donor: &str) {
        self.config
            .set_active_donor(Some(DonorId::from(donor)))
            .await
            .unwrap();
    }

    /// Reads the donations currently stored in the ledger file.
    pub async fn ledger_donations(&self) -> Vec<Donation> {
        FileLedger::new(self.config.ledger_path())
            .load()
            .await
            .unwrap()
    }

    /// A path inside the temp directory, outside the giving home, for
    /// scratch files such as CSV imports.
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
