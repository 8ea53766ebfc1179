//! Configuration file handling for the giving home directory.
//!
//! The configuration file is stored at `$GIVING_HOME/config.json` and holds
//! the share-link base URL and the active donor id. The donation records
//! themselves live next to it in `ledger.json`.

use crate::error::StoreError;
use crate::model::{Donation, DonorId};
use crate::{api, fs, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

const APP_NAME: &str = "giving";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const LEDGER_JSON: &str = "ledger.json";

/// The default base URL for shareable profile links.
pub const DEFAULT_SHARE_BASE: &str = "https://giving.example.com";

/// The `Config` object represents the configuration of the app. You
/// instantiate it by providing the path to `$GIVING_HOME` and from there it
/// loads `$GIVING_HOME/config.json`. It provides paths to the other items
/// expected in the giving home directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    ledger_path: PathBuf,
    config_file: ConfigFile,
    share_base: Url,
}

impl Config {
    /// Creates the giving home directory and:
    /// - Writes an initial `config.json` with default settings and no active
    ///   donor.
    /// - Writes `ledger.json` containing `donations` (empty, or the demo
    ///   records when initializing with seed data).
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the giving home, e.g.
    ///   `$HOME/giving`
    /// - `share_base` - The base URL used to build shareable profile links.
    /// - `donations` - The initial contents of the ledger file.
    ///
    /// # Errors
    /// - Returns an error if a config file already exists at the location, or
    ///   if any file operations fail.
    pub async fn create(
        dir: impl Into<PathBuf>,
        share_base: &Url,
        donations: &[Donation],
    ) -> Result<Self> {
        // Create the directory if it does not exist
        let maybe_relative = dir.into();
        fs::make_dir(&maybe_relative)
            .await
            .context("Unable to create the giving home directory")?;

        // Canonicalize the directory path
        let root = fs::canonicalize(&maybe_relative).await?;

        // Refuse to clobber an existing home, which would lose its ledger
        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!(
                "A giving home already exists at '{}'",
                config_path.display()
            )
        }

        // Create and save an initial ConfigFile in the home directory
        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            share_base: share_base.to_string(),
            active_donor: None,
        };
        config_file.save(&config_path).await?;

        // Create the ledger file with the initial records
        let ledger_path = root.join(LEDGER_JSON);
        api::FileLedger::create(&ledger_path, donations)
            .await
            .context("Unable to create the ledger file")?;

        Ok(Self {
            root,
            config_path,
            ledger_path,
            config_file,
            share_base: share_base.clone(),
        })
    }

    /// This will
    /// - validate that the giving home exists and that the config file exists
    /// - load the config file
    /// - validate that the ledger file exists
    /// - return the loaded configuration object
    pub async fn load(giving_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = giving_home.into();
        let root = fs::canonicalize(&maybe_relative)
            .await
            .context("Giving home is missing; run 'giving init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let share_base = Url::parse(&config_file.share_base).with_context(|| {
            format!(
                "Invalid share base URL in config file: '{}'",
                config_file.share_base
            )
        })?;

        let ledger_path = root.join(LEDGER_JSON);
        if !ledger_path.is_file() {
            bail!("The ledger file is missing '{}'", ledger_path.display())
        }

        Ok(Self {
            root,
            config_path,
            ledger_path,
            config_file,
            share_base,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    pub fn share_base(&self) -> &Url {
        &self.share_base
    }

    /// The donor id that commands act as, if one has been set with
    /// `giving use`.
    pub fn active_donor(&self) -> Option<&DonorId> {
        self.config_file.active_donor.as_ref()
    }

    /// Returns the active donor id.
    ///
    /// # Errors
    /// Fails with [`StoreError::NotAuthenticated`] as the underlying cause
    /// when no donor is active.
    pub fn require_donor(&self) -> Result<&DonorId> {
        self.config_file.active_donor.as_ref().ok_or_else(|| {
            anyhow::Error::new(StoreError::NotAuthenticated)
                .context("No donor is active. Run 'giving use <donor-id>'.")
        })
    }

    /// Sets or clears the active donor id and saves the config file.
    pub async fn set_active_donor(&mut self, donor: Option<DonorId>) -> Result<()> {
        self.config_file.active_donor = donor;
        self.config_file.save(&self.config_path).await
    }
}

/// Represents the serialization and deserialization format of the
/// configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "giving",
///   "config_version": 1,
///   "share_base": "https://giving.example.com/",
///   "active_donor": "u1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "giving"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Base URL for shareable profile links
    share_base: String,

    /// The donor id that commands act as (optional; absent when signed out)
    #[serde(skip_serializing_if = "Option::is_none")]
    active_donor: Option<DonorId>,
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Arguments
    /// * `path` - Path to the config.json file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        // Validate app_name
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Arguments
    /// * `path` - Path where the config.json file should be saved
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        fs::write(p, data).await.context("Unable to write config file")
    }
}
