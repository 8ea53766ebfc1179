//! The recurrence classification of a donation.

use serde::{Deserialize, Serialize};

/// How often a donation recurs.
///
/// The wire names are `one-time`, `monthly` and `annual`; anything else is
/// rejected when parsing.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// A single, non-recurring donation.
    #[default]
    OneTime,
    /// Recurs every month.
    Monthly,
    /// Recurs every year.
    Annual,
}

serde_plain::derive_display_from_serialize!(Frequency);
serde_plain::derive_fromstr_from_deserialize!(Frequency);

impl Frequency {
    /// All frequencies, in display order.
    pub const ALL: [Frequency; 3] = [Frequency::OneTime, Frequency::Monthly, Frequency::Annual];

    /// A human-readable label, e.g. for table cells: `One-time`, `Monthly`,
    /// `Annual`.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Monthly => "Monthly",
            Frequency::Annual => "Annual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(Frequency::OneTime.to_string(), "one-time");
        assert_eq!(Frequency::Monthly.to_string(), "monthly");
        assert_eq!(Frequency::Annual.to_string(), "annual");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Frequency::from_str("one-time").unwrap(), Frequency::OneTime);
        assert_eq!(Frequency::from_str("monthly").unwrap(), Frequency::Monthly);
        assert_eq!(Frequency::from_str("annual").unwrap(), Frequency::Annual);
    }

    #[test]
    fn test_unrecognized_value_is_rejected() {
        assert!(Frequency::from_str("weekly").is_err());
        assert!(Frequency::from_str("ONE-TIME").is_err());
        assert!(Frequency::from_str("").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&Frequency::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");
        let parsed: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Frequency::OneTime);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Frequency::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["One-time", "Monthly", "Annual"]);
    }
}
