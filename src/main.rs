use clap::Parser;
use giving_ledger::args::{Args, Command};
use giving_ledger::{commands, Config, Mode, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().giving_home().path();

    // This allows for exercising the program without a ledger file on disk.
    // When GIVING_IN_TEST_MODE is set and non-zero in length, then the mode
    // will be Mode::Memory, otherwise it will be Mode::File.
    let mode = Mode::from_env();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init(init_args) => {
            commands::init(home, init_args.demo(), init_args.share_base())
                .await?
                .print()
        }

        Command::Use(use_args) => commands::use_donor(Config::load(home).await?, use_args)
            .await?
            .print(),

        Command::Signout => commands::signout(Config::load(home).await?).await?.print(),

        Command::Whoami => commands::whoami(Config::load(home).await?, mode)
            .await?
            .print(),

        Command::Add(add_args) => commands::add(Config::load(home).await?, mode, add_args)
            .await?
            .print(),

        Command::List(list_args) => commands::list(Config::load(home).await?, mode, list_args)
            .await?
            .print(),

        Command::Edit(edit_args) => commands::edit(Config::load(home).await?, mode, edit_args)
            .await?
            .print(),

        Command::Delete(delete_args) => {
            commands::delete(Config::load(home).await?, mode, delete_args)
                .await?
                .print()
        }

        Command::Summary => commands::summary(Config::load(home).await?, mode)
            .await?
            .print(),

        Command::Share => commands::share(Config::load(home).await?, mode)
            .await?
            .print(),

        Command::Export(export_args) => {
            commands::export(Config::load(home).await?, mode, export_args)
                .await?
                .print()
        }

        Command::Import(import_args) => {
            commands::import(Config::load(home).await?, mode, import_args)
                .await?
                .print()
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
