//! Per-frequency donation totals for the active donor.

use crate::commands::{bound_view, Out};
use crate::model::DonationSummary;
use crate::{Config, Mode, Result};

/// Shows the active donor's donation totals, grouped by frequency.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor.
/// - `mode` - Where donation records are read from.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message with the total and the per-frequency breakdown.
/// - The `DonationSummary` as structured data.
///
/// # Errors
///
/// Returns an error when no donor is active.
pub async fn summary(config: Config, mode: Mode) -> Result<Out<DonationSummary>> {
    let (donor, _store, view) = bound_view(&config, mode).await?;
    let summary = view.summary();

    let rows = [
        ("Total Donations", summary.total),
        ("Monthly Donations", summary.monthly),
        ("Annual Donations", summary.annual),
        ("One-time Donations", summary.one_time),
    ];
    let width = rows
        .iter()
        .map(|(label, _)| label.len() + 1)
        .max()
        .unwrap_or(0);

    let mut message = format!("Donation summary for donor '{donor}':\n");
    for (label, amount) in rows {
        let label = format!("{label}:");
        message.push_str(&format!("\n  {label:<width$} {amount}"));
    }
    Ok(Out::new(message, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_summary_for_the_demo_donor() {
        let mut env = TestEnv::with_demo_data().await;
        env.sign_in("u1").await;

        let out = summary(env.config(), Mode::File).await.unwrap();
        let message = out.message();
        assert!(message.contains("Donation summary for donor 'u1':"));
        assert!(message.contains("Total Donations:"));
        assert!(message.contains("$625.00"));
        assert!(message.contains("Monthly Donations:"));
        assert!(message.contains("$25.00"));
        assert!(message.contains("Annual Donations:"));
        assert!(message.contains("$500.00"));
        assert!(message.contains("One-time Donations:"));
        assert!(message.contains("$100.00"));

        let structure = out.structure().unwrap();
        assert_eq!(structure.total.value(), Decimal::from(625));
    }

    #[tokio::test]
    async fn test_summary_with_no_donations_is_all_zeros() {
        let mut env = TestEnv::new().await;
        env.sign_in("u1").await;

        let out = summary(env.config(), Mode::File).await.unwrap();
        assert!(out.message().contains("$0.00"));
        assert_eq!(out.structure().copied(), Some(DonationSummary::default()));
    }

    #[tokio::test]
    async fn test_summary_requires_an_active_donor() {
        let env = TestEnv::with_demo_data().await;
        let result = summary(env.config(), Mode::File).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No donor is active"));
    }

    #[tokio::test]
    async fn test_summary_only_counts_the_active_donor() {
        let mut env = TestEnv::with_demo_data().await;
        env.sign_in("u2").await;

        let out = summary(env.config(), Mode::File).await.unwrap();
        let structure = out.structure().unwrap();
        assert_eq!(structure.total.value(), Decimal::from(200));
        assert_eq!(structure.one_time.value(), Decimal::from(200));
        assert!(structure.monthly.is_zero());
        assert!(structure.annual.is_zero());
    }
}
