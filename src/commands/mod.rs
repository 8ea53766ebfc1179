//! Command handlers for the giving CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod add;
mod delete;
mod donor;
mod edit;
mod export;
mod import;
mod init;
mod list;
mod share;
mod summary;

use crate::model::DonorId;
use crate::session::{SessionEvent, SessionView};
use crate::store::DonationStore;
use crate::{api, Config, Mode, Result};
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info};

pub use add::add;
pub use delete::delete;
pub use donor::{signout, use_donor, whoami, Identity};
pub use edit::edit;
pub use export::export;
pub use import::import;
pub use init::init;
pub use list::list;
pub use share::{share, ShareLink};
pub use summary::summary;

/// The output type for a command. This allows the command to return a
/// consistent message and, optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the
    /// command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Opens the store for `mode` and binds a session view to the active donor.
///
/// Commands that show donor-scoped data go through the view rather than
/// reading the store directly, so what they print is exactly what a bound
/// session would see.
pub(crate) async fn bound_view(
    config: &Config,
    mode: Mode,
) -> Result<(DonorId, Arc<DonationStore>, SessionView)> {
    let donor = config.require_donor()?.clone();
    let store = api::store(config, mode).await?;
    let mut view = SessionView::new(store.clone());
    view.on_change(SessionEvent::IdentityChanged(Some(donor.clone())))
        .await;
    Ok((donor, store, view))
}

/// "" when `count == 1`, otherwise "s".
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
