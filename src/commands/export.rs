//! CSV export: write the active donor's donations as a spreadsheet
//! interchange file.

use crate::args::ExportArgs;
use crate::commands::import::CsvDonation;
use crate::commands::{bound_view, plural, Out};
use crate::model::Donation;
use crate::{fs, Config, Mode, Result};
use anyhow::Context;

/// The column order shared by `export`, `import` and `list --format csv`.
pub(crate) const CSV_HEADER: [&str; 6] = [
    "Date",
    "Organization",
    "Amount",
    "Frequency",
    "Category",
    "Notes",
];

/// Renders donations as CSV, header row included even when there are no
/// donations.
pub(crate) fn to_csv(donations: &[Donation]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .context("Unable to write the CSV header")?;
    for donation in donations {
        writer
            .serialize(CsvDonation::from_donation(donation))
            .context("Unable to serialize a donation as CSV")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Unable to finish writing CSV: {e}"))?;
    String::from_utf8(bytes).context("The CSV output was not valid UTF-8")
}

/// Writes the active donor's donations as CSV, either to a file or to the
/// command output.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor.
/// - `mode` - Where donation records are read from.
/// - `args` - An optional output file; without one the CSV itself becomes
///   the command output.
///
/// # Returns
///
/// On success, returns an `Out` whose message reports the export (or is the
/// CSV itself when no file was given).
///
/// # Errors
///
/// - Returns an error when no donor is active.
/// - Returns an error if the output file cannot be written.
pub async fn export(config: Config, mode: Mode, args: &ExportArgs) -> Result<Out<String>> {
    let (donor, _store, view) = bound_view(&config, mode).await?;
    let csv = to_csv(view.visible())?;

    match args.file() {
        Some(path) => {
            fs::write(path, &csv).await?;
            let count = view.visible().len();
            let message = format!(
                "Exported {count} donation{} for donor '{donor}' to '{}'",
                plural(count),
                path.display()
            );
            Ok(Out::new(message, csv))
        }
        None => Ok(Out::new_message(csv)),
    }
}
