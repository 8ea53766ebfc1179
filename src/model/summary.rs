//! Derived per-frequency totals for one donor's records.

use crate::model::{Amount, Donation, Frequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The aggregate sums over one donor's visible records, grouped by frequency.
///
/// A summary is always derived from scratch by [`summarize`]; it is never
/// persisted and never patched incrementally. The three frequency buckets
/// partition the records, so `monthly + annual + oneTime == total` always
/// holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSummary {
    pub total: Amount,
    pub monthly: Amount,
    pub annual: Amount,
    pub one_time: Amount,
}

/// Computes the summary for a sequence of records.
///
/// A total function: any well-formed input yields a summary, the empty slice
/// yields the all-zero summary, and the input is never mutated. Sums are
/// accumulated left to right with exact decimal arithmetic.
pub fn summarize(records: &[Donation]) -> DonationSummary {
    let mut total = Decimal::ZERO;
    let mut monthly = Decimal::ZERO;
    let mut annual = Decimal::ZERO;
    let mut one_time = Decimal::ZERO;

    for record in records {
        let amount = record.amount.value();
        total += amount;
        match record.frequency {
            Frequency::OneTime => one_time += amount,
            Frequency::Monthly => monthly += amount,
            Frequency::Annual => annual += amount,
        }
    }

    DonationSummary {
        total: Amount::new(total),
        monthly: Amount::new(monthly),
        annual: Amount::new(annual),
        one_time: Amount::new(one_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DonationDraft, DonationId, DonorId};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn donation(amount: &str, frequency: Frequency) -> Donation {
        Donation::new(
            DonationId::fresh(),
            DonorId::from("u1"),
            DonationDraft {
                amount: Amount::from_str(amount).unwrap(),
                organization_name: "Test Org".to_string(),
                date: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
                frequency,
                category: None,
                notes: None,
            },
        )
    }

    #[test]
    fn test_empty_input_yields_zero_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary, DonationSummary::default());
        assert!(summary.total.is_zero());
        assert!(summary.monthly.is_zero());
        assert!(summary.annual.is_zero());
        assert!(summary.one_time.is_zero());
    }

    #[test]
    fn test_known_scenario() {
        let records = vec![
            donation("100", Frequency::OneTime),
            donation("25", Frequency::Monthly),
            donation("500", Frequency::Annual),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total.value(), 625.into());
        assert_eq!(summary.monthly.value(), 25.into());
        assert_eq!(summary.annual.value(), 500.into());
        assert_eq!(summary.one_time.value(), 100.into());
    }

    #[test]
    fn test_buckets_partition_the_total() {
        let records = vec![
            donation("10.10", Frequency::OneTime),
            donation("20.20", Frequency::Monthly),
            donation("30.30", Frequency::Monthly),
            donation("40.40", Frequency::Annual),
        ];
        let summary = summarize(&records);
        let rebuilt =
            summary.monthly.value() + summary.annual.value() + summary.one_time.value();
        assert_eq!(summary.total.value(), rebuilt);
        assert_eq!(summary.total.value(), Decimal::from_str("101.00").unwrap());
    }

    #[test]
    fn test_cents_are_exact() {
        let records = vec![
            donation("0.10", Frequency::OneTime),
            donation("0.20", Frequency::OneTime),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.one_time.value(), Decimal::from_str("0.30").unwrap());
    }

    #[test]
    fn test_input_order_does_not_matter_for_sums() {
        let a = vec![
            donation("1", Frequency::Monthly),
            donation("2", Frequency::Annual),
        ];
        let b = vec![
            donation("2", Frequency::Annual),
            donation("1", Frequency::Monthly),
        ];
        assert_eq!(summarize(&a), summarize(&b));
    }

    #[test]
    fn test_serializes_camel_case_numbers() {
        let summary = summarize(&[donation("625", Frequency::OneTime)]);
        let value = serde_json::to_value(summary).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("oneTime"));
        assert!(object["total"].is_number());
    }

    #[test]
    fn test_input_is_unchanged() {
        let records = vec![donation("50", Frequency::Monthly)];
        let before = records.clone();
        let _ = summarize(&records);
        assert_eq!(records, before);
    }
}
