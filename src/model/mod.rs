//! Types that represent the core data model, such as `Donation` and
//! `DonationSummary`.

mod amount;
mod donation;
mod frequency;
mod summary;

pub use amount::{dollars, Amount, AmountFormat};
pub use donation::{Donation, DonationDraft, DonationId, DonationPatch, DonorId};
pub use frequency::Frequency;
pub use summary::{summarize, DonationSummary};
