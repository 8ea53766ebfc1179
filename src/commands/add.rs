use crate::args::AddArgs;
use crate::commands::{bound_view, plural, Out};
use crate::model::Donation;
use crate::session::SessionEvent;
use crate::{Config, Mode, Result};

/// Records a donation for the active donor.
///
/// The record's id is assigned by the store and its owner is stamped from the
/// active donor; neither can be supplied by the caller.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor.
/// - `mode` - Where donation records are read and written.
/// - `args` - The donation fields. The date defaults to today.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the stored amount, organization and new record count.
/// - The stored `Donation`, including its assigned id.
///
/// # Errors
///
/// - Returns an error when no donor is active.
/// - Returns an error when the fields fail validation; nothing is stored.
/// - Returns an error if the ledger rejects the write.
pub async fn add(config: Config, mode: Mode, args: &AddArgs) -> Result<Out<Donation>> {
    let (donor, store, mut view) = bound_view(&config, mode).await?;

    let created = store.create(Some(&donor), args.draft()).await?;
    view.on_change(SessionEvent::RecordsChanged).await;

    let count = view.visible().len();
    let message = format!(
        "Added {} to {}. Donor '{donor}' now has {count} donation{}",
        created.amount,
        created.organization_name,
        plural(count)
    );
    Ok(Out::new(message, created))
}
