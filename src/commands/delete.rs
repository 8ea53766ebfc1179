use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::model::Donation;
use crate::{api, Config, Mode, Result};

/// Removes one donation, found by id.
///
/// Deleting an id that does not exist is reported as an error rather than
/// silently ignored.
///
/// # Arguments
///
/// - `config` - The application configuration.
/// - `mode` - Where donation records are read and written.
/// - `args` - The id of the record to remove.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message naming the removed donation.
/// - The removed `Donation`.
///
/// # Errors
///
/// - Returns an error when no record has the given id.
/// - Returns an error if the ledger rejects the write.
pub async fn delete(config: Config, mode: Mode, args: &DeleteArgs) -> Result<Out<Donation>> {
    let store = api::store(&config, mode).await?;
    let removed = store.delete(args.id()).await?;
    let message = format!(
        "Deleted the {} donation to {}",
        removed.amount, removed.organization_name
    );
    Ok(Out::new(message, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DonationId;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_success() {
        let env = TestEnv::with_demo_data().await;
        let target = env.ledger_donations().await[1].clone();

        let out = delete(env.config(), Mode::File, &DeleteArgs::new(target.id))
            .await
            .unwrap();
        let contains = "Deleted the $25.00 donation to World Wildlife Fund";
        assert!(
            out.message().contains(contains),
            "Expected message to contain '{contains}', but message was {}",
            out.message()
        );

        // Verify the removal was persisted
        let stored = env.ledger_donations().await;
        assert_eq!(stored.len(), 3);
        assert!(stored.iter().all(|d| d.id != target.id));
    }

    #[tokio::test]
    async fn test_delete_not_found_error() {
        let env = TestEnv::with_demo_data().await;

        let result = delete(
            env.config(),
            Mode::File,
            &DeleteArgs::new(DonationId::fresh()),
        )
        .await;

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(
            err_msg.contains("no donation found"),
            "Expected 'no donation found' but got '{err_msg}'"
        );
        assert_eq!(env.ledger_donations().await.len(), 4);
    }
}
