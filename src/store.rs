//! The donation store: sole authority over the donation record lifecycle.

use crate::api::Ledger;
use crate::error::{StoreError, StoreResult};
use crate::model::{Donation, DonationDraft, DonationId, DonationPatch, DonorId};
use crate::notify::NotificationSink;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Owns the canonical collection of all donors' donation records.
///
/// All mutation goes through [`create`](Self::create),
/// [`update`](Self::update) and [`delete`](Self::delete); reads return
/// clones, so nothing outside the store can touch the canonical records.
/// Each mutation validates first, then persists the prospective collection to
/// the [`Ledger`] collaborator, and only then swaps it in: a failure at any
/// point leaves the store exactly as it was.
///
/// Mutations hold the write lock across the ledger await, so concurrent
/// mutations on shared handles serialize and readers always observe a
/// consistent snapshot. Mutation outcomes are reported to the
/// [`NotificationSink`] as a side channel; errors still propagate to the
/// caller.
pub struct DonationStore {
    records: RwLock<Vec<Donation>>,
    ledger: Arc<dyn Ledger>,
    sink: Arc<dyn NotificationSink>,
    in_flight: AtomicUsize,
}

impl DonationStore {
    /// Opens the store by loading the current collection from the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Collaborator`] if the ledger cannot be read.
    pub async fn open(
        ledger: Arc<dyn Ledger>,
        sink: Arc<dyn NotificationSink>,
    ) -> StoreResult<Self> {
        let records = ledger.load().await.map_err(StoreError::collaborator)?;
        debug!(
            "Opened the donation store with {} record{}",
            records.len(),
            if records.len() == 1 { "" } else { "s" }
        );
        Ok(Self {
            records: RwLock::new(records),
            ledger,
            sink,
            in_flight: AtomicUsize::new(0),
        })
    }

    /// Creates a donation owned by `owner`.
    ///
    /// The caller never supplies `id` or `userId`: a fresh id is allocated
    /// and the owner is stamped from the acting identity.
    ///
    /// # Arguments
    ///
    /// - `owner` - The acting identity, or `None` when no donor is bound.
    /// - `draft` - The caller-supplied fields.
    ///
    /// # Returns
    ///
    /// The stored record, including its assigned id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotAuthenticated`] when `owner` is `None`.
    /// - [`StoreError::InvalidInput`] when the draft breaks a validation
    ///   rule. Checked before any mutation.
    /// - [`StoreError::Collaborator`] when the ledger rejects the write.
    pub async fn create(
        &self,
        owner: Option<&DonorId>,
        draft: DonationDraft,
    ) -> StoreResult<Donation> {
        let _busy = BusyGuard::enter(&self.in_flight);
        let outcome = self.create_inner(owner, draft).await;
        match &outcome {
            Ok(donation) => self.sink.notify_success(&format!(
                "Donation added: {} to {}",
                donation.amount, donation.organization_name
            )),
            Err(e) => {
                debug!("create failed: {e}");
                self.sink.notify_failure("Failed to add donation");
            }
        }
        outcome
    }

    async fn create_inner(
        &self,
        owner: Option<&DonorId>,
        draft: DonationDraft,
    ) -> StoreResult<Donation> {
        let owner = owner.ok_or(StoreError::NotAuthenticated)?;
        draft.validate()?;
        let donation = Donation::new(DonationId::fresh(), owner.clone(), draft);

        let mut records = self.records.write().await;
        let mut next = records.clone();
        next.push(donation.clone());
        self.ledger.save(&next).await.map_err(StoreError::collaborator)?;
        *records = next;
        Ok(donation)
    }

    /// Merges `patch` into the record with the given `id` and re-validates
    /// the merged result. `id` and `userId` are never part of a patch.
    ///
    /// # Returns
    ///
    /// The record as stored after the merge.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when no record has that id.
    /// - [`StoreError::InvalidInput`] when the merged record would break a
    ///   validation rule; the stored record is left unchanged.
    /// - [`StoreError::Collaborator`] when the ledger rejects the write.
    pub async fn update(&self, id: &DonationId, patch: DonationPatch) -> StoreResult<Donation> {
        let _busy = BusyGuard::enter(&self.in_flight);
        let outcome = self.update_inner(id, patch).await;
        match &outcome {
            Ok(_) => self.sink.notify_success("Donation updated"),
            Err(e) => {
                debug!("update failed: {e}");
                self.sink.notify_failure("Failed to update donation");
            }
        }
        outcome
    }

    async fn update_inner(&self, id: &DonationId, patch: DonationPatch) -> StoreResult<Donation> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|d| d.id == *id)
            .ok_or_else(|| StoreError::not_found(*id))?;

        let mut updated = records[index].clone();
        patch.apply(&mut updated);
        updated.validate()?;

        let mut next = records.clone();
        next[index] = updated.clone();
        self.ledger.save(&next).await.map_err(StoreError::collaborator)?;
        *records = next;
        Ok(updated)
    }

    /// Removes the record with the given `id`.
    ///
    /// Deleting an absent id is reported as [`StoreError::NotFound`] rather
    /// than silently ignored, so callers can tell "deleted" from "nothing
    /// happened". Callers that want delete-if-present can match that variant.
    ///
    /// # Returns
    ///
    /// The removed record.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when no record has that id.
    /// - [`StoreError::Collaborator`] when the ledger rejects the write.
    pub async fn delete(&self, id: &DonationId) -> StoreResult<Donation> {
        let _busy = BusyGuard::enter(&self.in_flight);
        let outcome = self.delete_inner(id).await;
        match &outcome {
            Ok(_) => self.sink.notify_success("Donation deleted"),
            Err(e) => {
                debug!("delete failed: {e}");
                self.sink.notify_failure("Failed to delete donation");
            }
        }
        outcome
    }

    async fn delete_inner(&self, id: &DonationId) -> StoreResult<Donation> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|d| d.id == *id)
            .ok_or_else(|| StoreError::not_found(*id))?;

        let mut next = records.clone();
        let removed = next.remove(index);
        self.ledger.save(&next).await.map_err(StoreError::collaborator)?;
        *records = next;
        Ok(removed)
    }

    /// Returns `owner`'s records in insertion order. Never mutates state.
    pub async fn list_by_owner(&self, owner: &DonorId) -> Vec<Donation> {
        self.records
            .read()
            .await
            .iter()
            .filter(|d| d.user_id == *owner)
            .cloned()
            .collect()
    }

    /// Returns every record, across all donors, in insertion order.
    pub async fn list_all(&self) -> Vec<Donation> {
        self.records.read().await.clone()
    }

    /// True while a mutation is awaiting the ledger. Released on every
    /// completion path, success or failure.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

impl std::fmt::Debug for DonationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DonationStore")
            .field("records", &self.records)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

/// Counts an in-flight mutation; decrements on drop so no failure path can
/// leave the store marked busy.
struct BusyGuard<'a>(&'a AtomicUsize);

impl<'a> BusyGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
