use crate::args::EditArgs;
use crate::commands::Out;
use crate::model::Donation;
use crate::{api, Config, Mode, Result};
use anyhow::bail;

/// Changes fields of one donation, found by id.
///
/// Only the fields given on the command line change; the rest keep their
/// stored values. The merged record is validated before anything is written,
/// so an invalid change leaves the record as it was.
///
/// # Arguments
///
/// - `config` - The application configuration.
/// - `mode` - Where donation records are read and written.
/// - `args` - The record id and the fields to change.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message naming the updated donation.
/// - The `Donation` as stored after the merge.
///
/// # Errors
///
/// - Returns an error when no field to change was given.
/// - Returns an error when no record has the given id.
/// - Returns an error when the merged record fails validation.
/// - Returns an error if the ledger rejects the write.
pub async fn edit(config: Config, mode: Mode, args: &EditArgs) -> Result<Out<Donation>> {
    let patch = args.patch();
    if patch.is_empty() {
        bail!(
            "Nothing to change; pass at least one of --amount, --org, --date, \
            --frequency, --category or --notes"
        );
    }

    let store = api::store(&config, mode).await?;
    let updated = store.update(args.id(), patch).await?;
    let message = format!(
        "Updated the donation to {}; it is now {} on {}",
        updated.organization_name, updated.amount, updated.date
    );
    Ok(Out::new(message, updated))
}
