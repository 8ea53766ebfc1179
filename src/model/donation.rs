//! The donation record and its input shapes.
//!
//! A [`Donation`] is one charitable contribution entry. Callers never supply
//! `id` or `userId`: the store allocates the id and stamps the owner from the
//! acting identity. Create input arrives as a [`DonationDraft`]; update input
//! arrives as a [`DonationPatch`] holding only the fields to change.

use crate::error::StoreError;
use crate::model::{Amount, Frequency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// The opaque identifier of a donor (the owning identity of records and
/// views). How an identity is established is not this crate's concern; it is
/// carried around verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorId(String);

impl DonorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DonorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DonorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DonorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for DonorId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// The unique identifier of a donation, assigned on creation and immutable
/// thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DonationId(Uuid);

impl DonationId {
    /// Allocates a fresh, globally unique id.
    pub(crate) fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for DonationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DonationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One charitable contribution entry.
///
/// Serialized with camelCase field names (`userId`, `organizationName`) and a
/// numeric `amount`, matching the input contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: DonationId,
    pub user_id: DonorId,
    pub amount: Amount,
    pub organization_name: String,
    pub date: NaiveDate,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Donation {
    /// Builds a record from a validated draft, stamping the id and owner.
    pub fn new(id: DonationId, user_id: DonorId, draft: DonationDraft) -> Self {
        Self {
            id,
            user_id,
            amount: draft.amount,
            organization_name: draft.organization_name,
            date: draft.date,
            frequency: draft.frequency,
            category: draft.category,
            notes: draft.notes,
        }
    }

    /// Checks the record against the same rules as [`DonationDraft::validate`].
    /// Used after a patch merge, since a merge must not be able to produce an
    /// invalid record.
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_fields(&self.amount, &self.organization_name)
    }
}

/// The caller-supplied fields for creating a donation.
///
/// Wire shape: `{"amount": 100, "organizationName": "Red Cross", "date":
/// "2023-12-15", "frequency": "one-time", "category": ..., "notes": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDraft {
    pub amount: Amount,
    pub organization_name: String,
    pub date: NaiveDate,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DonationDraft {
    /// Validates the draft before any mutation is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] when `amount` is not strictly
    /// greater than zero or `organizationName` is blank. The date and
    /// frequency fields cannot hold invalid values once parsed, so they need
    /// no further checks here.
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_fields(&self.amount, &self.organization_name)
    }
}

/// The subset of mutable fields for an update. `None` leaves a field
/// unchanged; `id` and `userId` are not part of the patch and can never
/// change.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DonationPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.organization_name.is_none()
            && self.date.is_none()
            && self.frequency.is_none()
            && self.category.is_none()
            && self.notes.is_none()
    }

    /// Merges the patch into `donation`, field by field.
    pub fn apply(&self, donation: &mut Donation) {
        if let Some(amount) = self.amount {
            donation.amount = amount;
        }
        if let Some(organization_name) = &self.organization_name {
            donation.organization_name = organization_name.clone();
        }
        if let Some(date) = self.date {
            donation.date = date;
        }
        if let Some(frequency) = self.frequency {
            donation.frequency = frequency;
        }
        if let Some(category) = &self.category {
            donation.category = Some(category.clone());
        }
        if let Some(notes) = &self.notes {
            donation.notes = Some(notes.clone());
        }
    }
}

/// The validation rules shared by create and update: `amount > 0` and a
/// non-blank organization name. Error field names use the wire spelling.
fn validate_fields(amount: &Amount, organization_name: &str) -> Result<(), StoreError> {
    if !amount.is_positive() {
        return Err(StoreError::invalid_input(
            "amount",
            "must be greater than zero",
        ));
    }
    if organization_name.trim().is_empty() {
        return Err(StoreError::invalid_input("organizationName", "is required"));
    }
    Ok(())
}
