mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
mod fs;
pub mod model;
mod notify;
mod seed;
mod session;
mod store;

#[cfg(test)]
mod test;

pub use api::{FileLedger, Ledger, MemoryLedger};
pub use config::Config;
pub use error::{Result, StoreError, StoreResult};
pub use notify::{LogSink, Notice, NotificationSink, RecordingSink};
pub use seed::demo_donations;
pub use session::{SessionEvent, SessionView};
pub use store::DonationStore;

use serde::{Deserialize, Serialize};

/// Where donation records live for an invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Read and write `$GIVING_HOME/ledger.json`.
    #[default]
    File,
    /// Run against the built-in demo records without touching disk.
    Memory,
}

serde_plain::derive_display_from_serialize!(Mode);
serde_plain::derive_fromstr_from_deserialize!(Mode);

impl Mode {
    /// `Memory` when `GIVING_IN_TEST_MODE` is set and non-empty, otherwise
    /// `File`.
    pub fn from_env() -> Self {
        match std::env::var("GIVING_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Memory,
            _ => Mode::File,
        }
    }
}
