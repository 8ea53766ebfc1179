//! Built-in demo donations.
//!
//! Used by `giving init --demo` and by the in-memory test mode so the whole
//! app can be exercised without any real data. Two donors: `u1` holds three
//! records (one of each frequency), `u2` holds one.

use crate::model::{Amount, Donation, DonationDraft, DonationId, DonorId, Frequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The demo records, in insertion order. Ids are freshly allocated on each
/// call.
pub fn demo_donations() -> Vec<Donation> {
    vec![
        demo(
            "u1",
            100,
            "Red Cross",
            (2023, 12, 15),
            Frequency::OneTime,
            Some("Disaster Relief"),
            Some("Annual holiday donation"),
        ),
        demo(
            "u1",
            25,
            "World Wildlife Fund",
            (2023, 11, 20),
            Frequency::Monthly,
            Some("Environment"),
            None,
        ),
        demo(
            "u1",
            500,
            "Local Food Bank",
            (2023, 10, 5),
            Frequency::Annual,
            Some("Hunger"),
            Some("Supporting local community"),
        ),
        demo(
            "u2",
            200,
            "Doctors Without Borders",
            (2023, 9, 10),
            Frequency::OneTime,
            Some("Healthcare"),
            None,
        ),
    ]
}

fn demo(
    donor: &str,
    amount: i64,
    organization: &str,
    (year, month, day): (i32, u32, u32),
    frequency: Frequency,
    category: Option<&str>,
    notes: Option<&str>,
) -> Donation {
    // All dates here are valid literals.
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    Donation::new(
        DonationId::fresh(),
        DonorId::from(donor),
        DonationDraft {
            amount: Amount::new(Decimal::from(amount)),
            organization_name: organization.to_string(),
            date,
            frequency,
            category: category.map(str::to_string),
            notes: notes.map(str::to_string),
        },
    )
}
