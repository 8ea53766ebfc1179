//! Builds a shareable link to the active donor's public giving profile.

use crate::commands::{bound_view, Out};
use crate::model::{Amount, DonorId};
use crate::{Config, Mode, Result};
use anyhow::Context;

/// The share link and the figures quoted alongside it.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    url: String,
    donor: DonorId,
    total: Amount,
}

impl ShareLink {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn donor(&self) -> &DonorId {
        &self.donor
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

/// Builds the public profile link for the active donor.
///
/// The link is `<share base>/donors/<donor-id>`, with the share base taken
/// from the config file. The message includes ready-to-paste share text
/// quoting the donor's total.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor and the share base URL.
/// - `mode` - Where donation records are read from.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - The link and share text as the message.
/// - A `ShareLink` as structured data.
///
/// # Errors
///
/// Returns an error when no donor is active.
pub async fn share(config: Config, mode: Mode) -> Result<Out<ShareLink>> {
    let (donor, _store, view) = bound_view(&config, mode).await?;
    let url = config
        .share_base()
        .join(&format!("donors/{donor}"))
        .context("Unable to build the share link")?;
    let total = view.summary().total;

    let message = format!(
        "{url}\nCheck out my charitable giving profile with a total of {total} in donations!"
    );
    let link = ShareLink {
        url: url.to_string(),
        donor,
        total,
    };
    Ok(Out::new(message, link))
}
