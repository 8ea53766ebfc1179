//! CSV import: create donations for the active donor from a spreadsheet
//! interchange file.

use crate::args::ImportArgs;
use crate::commands::{bound_view, plural, Out};
use crate::model::{Amount, Donation, DonationDraft, Frequency};
use crate::session::SessionEvent;
use crate::{fs, Config, Mode, Result};
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the CSV interchange format.
///
/// The header row is `Date,Organization,Amount,Frequency,Category,Notes`.
/// Amounts may be plain numbers or formatted like `$1,250.00`; Category and
/// Notes may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CsvDonation {
    date: NaiveDate,
    organization: String,
    amount: Amount,
    frequency: Frequency,
    #[serde(default)]
    category: String,
    #[serde(default)]
    notes: String,
}

impl CsvDonation {
    pub(crate) fn from_donation(donation: &Donation) -> Self {
        Self {
            date: donation.date,
            organization: donation.organization_name.clone(),
            amount: donation.amount,
            frequency: donation.frequency,
            category: donation.category.clone().unwrap_or_default(),
            notes: donation.notes.clone().unwrap_or_default(),
        }
    }

    pub(crate) fn into_draft(self) -> DonationDraft {
        DonationDraft {
            amount: self.amount,
            organization_name: self.organization,
            date: self.date,
            frequency: self.frequency,
            category: none_if_empty(self.category),
            notes: none_if_empty(self.notes),
        }
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Creates donations for the active donor from a CSV file.
///
/// Every row is parsed and validated before anything is created, so a bad
/// row stops the import with nothing stored. Records are then created
/// one-by-one; if the ledger fails partway through, the rows created before
/// the failure remain stored.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor.
/// - `mode` - Where donation records are read and written.
/// - `args` - The CSV file to read.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the number of imported rows and the donor's new record
///   count.
/// - The created `Donation` records, including their assigned ids.
///
/// # Errors
///
/// - Returns an error when no donor is active.
/// - Returns an error naming the offending line when a row cannot be parsed
///   or fails validation.
/// - Returns an error if the ledger rejects a write.
pub async fn import(config: Config, mode: Mode, args: &ImportArgs) -> Result<Out<Vec<Donation>>> {
    let (donor, store, mut view) = bound_view(&config, mode).await?;

    let content = fs::read(args.file()).await?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut drafts = Vec::new();
    for (index, row) in reader.deserialize::<CsvDonation>().enumerate() {
        // Line 1 is the header row.
        let line = index + 2;
        let row: CsvDonation =
            row.with_context(|| format!("Invalid CSV record on line {line}"))?;
        let draft = row.into_draft();
        draft
            .validate()
            .with_context(|| format!("Invalid donation on line {line}"))?;
        drafts.push(draft);
    }

    let mut created = Vec::with_capacity(drafts.len());
    for draft in drafts {
        created.push(store.create(Some(&donor), draft).await?);
    }
    view.on_change(SessionEvent::RecordsChanged).await;

    let count = created.len();
    let total = view.visible().len();
    let message = format!(
        "Imported {count} donation{} for donor '{donor}'; {total} now on record",
        plural(count)
    );
    Ok(Out::new(message, created))
}
