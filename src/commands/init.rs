use crate::commands::{plural, Out};
use crate::seed::demo_donations;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;
use url::Url;

/// Creates the giving home directory and:
/// - Creates an initial `config.json` file with default settings and no
///   active donor.
/// - Creates `ledger.json`, empty or seeded with the demo donations.
///
/// # Arguments
/// - `giving_home` - The directory that will be the root of the data
///   directory, e.g. `$HOME/giving`
/// - `demo` - When true, the ledger starts with a few example donations for
///   donors 'u1' and 'u2' instead of empty.
/// - `share_base` - The base URL used to build shareable profile links.
///
/// # Errors
/// - Returns an error if a giving home already exists at the location, or if
///   any file operations fail.
pub async fn init(giving_home: &Path, demo: bool, share_base: &Url) -> Result<Out<()>> {
    let donations = if demo { demo_donations() } else { Vec::new() };
    let config = Config::create(giving_home, share_base, &donations)
        .await
        .context("Unable to create the giving home directory and configs")?;

    let message = if demo {
        format!(
            "Created the giving home at '{}' and seeded {} demo donation{}",
            config.root().display(),
            donations.len(),
            plural(donations.len())
        )
    } else {
        format!("Created the giving home at '{}'", config.root().display())
    };
    Ok(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FileLedger, Ledger};
    use crate::config::DEFAULT_SHARE_BASE;
    use tempfile::TempDir;

    fn share_base() -> Url {
        Url::parse(DEFAULT_SHARE_BASE).unwrap()
    }

    #[tokio::test]
    async fn test_init_creates_an_empty_home() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("giving");

        let out = init(&home, false, &share_base()).await.unwrap();
        let contains = "Created the giving home";
        assert!(
            out.message().contains(contains),
            "Expected message to contain '{contains}', but message was {}",
            out.message()
        );

        let config = Config::load(&home).await.unwrap();
        let donations = FileLedger::new(config.ledger_path()).load().await.unwrap();
        assert!(donations.is_empty());
    }

    #[tokio::test]
    async fn test_init_with_demo_data() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("giving");

        let out = init(&home, true, &share_base()).await.unwrap();
        assert!(out.message().contains("seeded 4 demo donations"));

        let config = Config::load(&home).await.unwrap();
        let donations = FileLedger::new(config.ledger_path()).load().await.unwrap();
        let seed = demo_donations();
        assert_eq!(donations.len(), seed.len());
        assert_eq!(donations[0].organization_name, seed[0].organization_name);
        assert_eq!(donations[0].user_id, seed[0].user_id);
    }

    #[tokio::test]
    async fn test_init_refuses_a_second_run() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("giving");

        init(&home, false, &share_base()).await.unwrap();
        let result = init(&home, true, &share_base()).await;
        assert!(result.is_err());
    }
}
