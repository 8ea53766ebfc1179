//! Commands for choosing which donor to act as.
//!
//! This is profile selection, not authentication: any donor id is accepted,
//! and the choice is stored in the config file until `giving signout`.

use crate::args::UseArgs;
use crate::commands::{plural, Out};
use crate::model::DonorId;
use crate::{api, Config, Mode, Result};
use serde::Serialize;

/// Sets the active donor id in the config file.
///
/// # Returns
///
/// A message confirming which donor subsequent commands will act as.
///
/// # Errors
///
/// - Returns an error if the config file cannot be written.
pub async fn use_donor(mut config: Config, args: &UseArgs) -> Result<Out<DonorId>> {
    let donor = args.donor().clone();
    config.set_active_donor(Some(donor.clone())).await?;
    let message = format!("Acting as donor '{donor}'");
    Ok(Out::new(message, donor))
}

/// Clears the active donor id from the config file.
///
/// Signing out when no donor is active is not an error.
pub async fn signout(mut config: Config) -> Result<Out<()>> {
    let previous = config.active_donor().cloned();
    config.set_active_donor(None).await?;
    let message = match previous {
        Some(donor) => format!("Signed out donor '{donor}'"),
        None => "No donor was active".to_string(),
    };
    Ok(message.into())
}

/// The active identity, as reported by `giving whoami`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    donor: DonorId,
    donations: usize,
}

impl Identity {
    pub fn donor(&self) -> &DonorId {
        &self.donor
    }

    pub fn donations(&self) -> usize {
        self.donations
    }
}

/// Reports the active donor id and how many records it has.
///
/// # Returns
///
/// An [`Identity`] with the donor id and record count, or a message only when
/// no donor is active.
///
/// # Errors
///
/// - Returns an error if the store cannot be opened.
pub async fn whoami(config: Config, mode: Mode) -> Result<Out<Identity>> {
    let Some(donor) = config.active_donor().cloned() else {
        return Ok("No donor is active. Run 'giving use <donor-id>'.".into());
    };

    let store = api::store(&config, mode).await?;
    let donations = store.list_by_owner(&donor).await.len();
    let message = format!(
        "Acting as donor '{donor}' with {donations} donation{}",
        plural(donations)
    );
    Ok(Out::new(message, Identity { donor, donations }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_use_donor() {
        let env = TestEnv::new().await;
        let args = UseArgs::new(DonorId::from("u1"));

        let out = use_donor(env.config(), &args).await.unwrap();
        assert_eq!(out.message(), "Acting as donor 'u1'");

        // The choice is persisted in the config file.
        let reloaded = env.reload_config().await;
        assert_eq!(reloaded.active_donor(), Some(&DonorId::from("u1")));
    }

    #[tokio::test]
    async fn test_use_donor_replaces_the_previous_one() {
        let mut env = TestEnv::new().await;
        env.sign_in("u1").await;

        let args = UseArgs::new(DonorId::from("u2"));
        use_donor(env.config(), &args).await.unwrap();

        let reloaded = env.reload_config().await;
        assert_eq!(reloaded.active_donor(), Some(&DonorId::from("u2")));
    }

    #[tokio::test]
    async fn test_signout() {
        let mut env = TestEnv::new().await;
        env.sign_in("u1").await;

        let out = signout(env.reload_config().await).await.unwrap();
        assert_eq!(out.message(), "Signed out donor 'u1'");

        let reloaded = env.reload_config().await;
        assert_eq!(reloaded.active_donor(), None);
    }

    #[tokio::test]
    async fn test_signout_when_nobody_is_active() {
        let env = TestEnv::new().await;
        let out = signout(env.config()).await.unwrap();
        assert_eq!(out.message(), "No donor was active");
    }

    #[tokio::test]
    async fn test_whoami_without_a_donor() {
        let env = TestEnv::new().await;
        let out = whoami(env.config(), Mode::File).await.unwrap();
        assert!(out.message().contains("No donor is active"));
        assert!(out.structure().is_none());
    }

    #[tokio::test]
    async fn test_whoami_reports_the_record_count() {
        let mut env = TestEnv::with_demo_data().await;
        env.sign_in("u1").await;

        let out = whoami(env.reload_config().await, Mode::File).await.unwrap();
        assert_eq!(out.message(), "Acting as donor 'u1' with 3 donations");
        let identity = out.structure().unwrap();
        assert_eq!(identity.donor(), &DonorId::from("u1"));
        assert_eq!(identity.donations(), 3);
    }
}
