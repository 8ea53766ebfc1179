//! These structs provide the CLI interface for the giving CLI.

use crate::config::DEFAULT_SHARE_BASE;
use crate::model::{Amount, DonationDraft, DonationId, DonationPatch, DonorId, Frequency};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

/// giving: A command-line tool for tracking charitable donations.
///
/// The purpose of this program is to keep a local ledger of your charitable
/// giving. Donations are recorded per donor, summarized by frequency, and can
/// be exported to or imported from CSV for use in a spreadsheet.
///
/// Run 'giving init' once to create the data directory, then 'giving use
/// <donor-id>' to choose the donor to act as. The remaining commands operate
/// on that donor's records.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration files.
    ///
    /// This is the first command you should run when setting up the giving
    /// CLI.
    ///
    /// - Decide what directory you want to store data in and pass this as
    ///   --giving-home. By default, it will be $HOME/giving. If you want it
    ///   somewhere else then you should specify it.
    ///
    /// - Optionally pass --demo to start with a few example donations so you
    ///   can try the other commands right away.
    Init(InitArgs),
    /// Set the donor id that subsequent commands act as.
    Use(UseArgs),
    /// Clear the active donor id.
    Signout,
    /// Show the active donor id and how many records it has.
    Whoami,
    /// Record a donation for the active donor.
    Add(AddArgs),
    /// List the active donor's donations.
    List(ListArgs),
    /// Change fields of one donation, found by id.
    Edit(EditArgs),
    /// Remove one donation, found by id.
    Delete(DeleteArgs),
    /// Show the active donor's totals by frequency.
    Summary,
    /// Print the active donor's shareable profile link.
    Share,
    /// Write the active donor's donations as CSV.
    Export(ExportArgs),
    /// Create donations for the active donor from a CSV file.
    Import(ImportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate
    /// for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where giving data and configuration is held. Defaults
    /// to ~/giving
    #[arg(long, env = "GIVING_HOME", default_value_t = default_giving_home())]
    giving_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, giving_home: PathBuf) -> Self {
        Self {
            log_level,
            giving_home: giving_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn giving_home(&self) -> &DisplayPath {
        &self.giving_home
    }
}

/// Args for the `giving init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// Seed the ledger with a few example donations for donors 'u1' and 'u2'.
    #[arg(long)]
    demo: bool,

    /// The base URL used to build shareable profile links.
    #[arg(long, default_value = DEFAULT_SHARE_BASE)]
    share_base: Url,
}

impl InitArgs {
    pub fn new(demo: bool, share_base: Url) -> Self {
        Self { demo, share_base }
    }

    pub fn demo(&self) -> bool {
        self.demo
    }

    pub fn share_base(&self) -> &Url {
        &self.share_base
    }
}

/// Args for the `giving use` command.
#[derive(Debug, Parser, Clone)]
pub struct UseArgs {
    /// The donor id to act as, e.g. 'u1'.
    donor: DonorId,
}

impl UseArgs {
    pub fn new(donor: DonorId) -> Self {
        Self { donor }
    }

    pub fn donor(&self) -> &DonorId {
        &self.donor
    }
}

/// Args for the `giving add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The donation amount, e.g. '25.00' or '$1,250.00'.
    #[arg(long)]
    amount: Amount,

    /// The name of the receiving organization.
    #[arg(long)]
    org: String,

    /// The date of the donation (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// How often the donation repeats.
    #[arg(long, value_enum, default_value_t = Frequency::OneTime)]
    frequency: Frequency,

    /// An optional category, e.g. 'Disaster Relief'.
    #[arg(long)]
    category: Option<String>,

    /// Optional free-form notes.
    #[arg(long)]
    notes: Option<String>,
}

impl AddArgs {
    pub fn new(
        amount: Amount,
        org: impl Into<String>,
        date: Option<NaiveDate>,
        frequency: Frequency,
        category: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            amount,
            org: org.into(),
            date,
            frequency,
            category,
            notes,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Builds the record fields from these args, using today's date when
    /// --date was not given.
    pub fn draft(&self) -> DonationDraft {
        DonationDraft {
            amount: self.amount,
            organization_name: self.org.clone(),
            date: self
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            frequency: self.frequency,
            category: self.category.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Args for the `giving list` command.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// The output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ListArgs {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// Args for the `giving edit` command.
#[derive(Debug, Parser, Clone)]
pub struct EditArgs {
    /// The id of the donation to change.
    id: DonationId,

    /// The new amount.
    #[arg(long)]
    amount: Option<Amount>,

    /// The new organization name.
    #[arg(long)]
    org: Option<String>,

    /// The new date (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// The new frequency.
    #[arg(long, value_enum)]
    frequency: Option<Frequency>,

    /// The new category.
    #[arg(long)]
    category: Option<String>,

    /// The new notes.
    #[arg(long)]
    notes: Option<String>,
}

impl EditArgs {
    pub fn new(id: DonationId, patch: DonationPatch) -> Self {
        Self {
            id,
            amount: patch.amount,
            org: patch.organization_name,
            date: patch.date,
            frequency: patch.frequency,
            category: patch.category,
            notes: patch.notes,
        }
    }

    pub fn id(&self) -> &DonationId {
        &self.id
    }

    /// The given fields as a patch; fields that were not given are left out.
    pub fn patch(&self) -> DonationPatch {
        DonationPatch {
            amount: self.amount,
            organization_name: self.org.clone(),
            date: self.date,
            frequency: self.frequency,
            category: self.category.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Args for the `giving delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the donation to remove.
    id: DonationId,
}

impl DeleteArgs {
    pub fn new(id: DonationId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &DonationId {
        &self.id
    }
}

/// Args for the `giving export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Write the CSV to this file instead of stdout.
    #[arg(long)]
    file: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Args for the `giving import` command.
#[derive(Debug, Parser, Clone)]
pub struct ImportArgs {
    /// The CSV file to read donations from.
    file: PathBuf,
}

impl ImportArgs {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

fn default_giving_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("giving"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --giving-home or GIVING_HOME instead of relying on the default \
                giving home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("giving")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal::Decimal;

    #[test]
    fn test_cli_definition() {
        <Args as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "giving",
            "add",
            "--amount",
            "$1,250.00",
            "--org",
            "Red Cross",
            "--date",
            "2024-03-01",
            "--frequency",
            "monthly",
            "--category",
            "Disaster Relief",
        ])
        .unwrap();

        let Command::Add(add) = args.command() else {
            panic!("expected the add command, got {:?}", args.command());
        };
        assert_eq!(add.amount().value(), Decimal::from(1250));
        assert_eq!(add.org(), "Red Cross");
        assert_eq!(add.frequency(), Frequency::Monthly);
        assert_eq!(add.category(), Some("Disaster Relief"));
        assert_eq!(add.notes(), None);

        let draft = add.draft();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(draft.organization_name, "Red Cross");
    }

    #[test]
    fn test_parse_add_defaults() {
        let args =
            Args::try_parse_from(["giving", "add", "--amount", "10", "--org", "Anywhere"]).unwrap();
        let Command::Add(add) = args.command() else {
            panic!("expected the add command, got {:?}", args.command());
        };
        assert_eq!(add.frequency(), Frequency::OneTime);
        assert_eq!(add.date(), None);
        // The draft fills in today's date.
        assert_eq!(add.draft().date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_parse_add_rejects_unknown_frequency() {
        let result = Args::try_parse_from([
            "giving",
            "add",
            "--amount",
            "10",
            "--org",
            "Anywhere",
            "--frequency",
            "weekly",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_format() {
        let args = Args::try_parse_from(["giving", "list", "--format", "csv"]).unwrap();
        let Command::List(list) = args.command() else {
            panic!("expected the list command, got {:?}", args.command());
        };
        assert_eq!(list.format(), OutputFormat::Csv);

        let args = Args::try_parse_from(["giving", "list"]).unwrap();
        let Command::List(list) = args.command() else {
            panic!("expected the list command, got {:?}", args.command());
        };
        assert_eq!(list.format(), OutputFormat::Table);
    }

    #[test]
    fn test_parse_edit_patch() {
        let id = DonationId::fresh();
        let args = Args::try_parse_from([
            "giving",
            "edit",
            &id.to_string(),
            "--amount",
            "75",
            "--notes",
            "matched by employer",
        ])
        .unwrap();
        let Command::Edit(edit) = args.command() else {
            panic!("expected the edit command, got {:?}", args.command());
        };
        assert_eq!(edit.id(), &id);

        let patch = edit.patch();
        assert_eq!(patch.amount.unwrap().value(), Decimal::from(75));
        assert_eq!(patch.notes.as_deref(), Some("matched by employer"));
        assert!(patch.organization_name.is_none());
        assert!(patch.frequency.is_none());
    }

    #[test]
    fn test_parse_delete_rejects_a_bad_id() {
        let result = Args::try_parse_from(["giving", "delete", "not-a-uuid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_giving_home() {
        let args = Args::try_parse_from(["giving", "--giving-home", "/tmp/elsewhere", "whoami"])
            .unwrap();
        assert_eq!(
            args.common().giving_home().path(),
            Path::new("/tmp/elsewhere")
        );
    }

    #[test]
    fn test_output_format_strings() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(
            <OutputFormat as FromStr>::from_str("json").unwrap(),
            OutputFormat::Json
        );
        assert!(<OutputFormat as FromStr>::from_str("yaml").is_err());
    }
}
