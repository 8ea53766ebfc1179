//! A per-session, donor-scoped view over the donation store.

use crate::model::{summarize, Donation, DonationSummary, DonorId};
use crate::store::DonationStore;
use std::sync::Arc;
use tracing::debug;

/// An occurrence that can change what a session should be showing.
///
/// Both variants funnel through [`SessionView::on_change`], the view's sole
/// entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The acting identity changed: a donor signed in, switched accounts, or
    /// signed out (`None`).
    IdentityChanged(Option<DonorId>),
    /// A mutation completed on the store, so bound views must re-read.
    RecordsChanged,
}

enum SessionState {
    /// No donor is bound. The view shows nothing and refresh events are
    /// ignored.
    Unbound,
    /// A donor is bound and the view holds that donor's records and their
    /// summary, as of the last refresh.
    Bound {
        owner: DonorId,
        visible: Vec<Donation>,
        summary: DonationSummary,
    },
}

/// Tracks which donor a session is acting as and mirrors that donor's slice
/// of the [`DonationStore`].
///
/// The view is a consumer of the store, never an authority: it holds clones
/// for display and every refresh is a full re-read of the owner's records
/// followed by a full recompute of the summary. Binding, switching and
/// signing out all replace the visible records wholesale; none of it touches
/// the store. Each session owns its own view, so two sessions bound to
/// different donors never see each other's records.
pub struct SessionView {
    store: Arc<DonationStore>,
    state: SessionState,
}

impl SessionView {
    /// Creates a view with no bound donor.
    pub fn new(store: Arc<DonationStore>) -> Self {
        Self {
            store,
            state: SessionState::Unbound,
        }
    }

    /// Applies one event to the view.
    ///
    /// - `IdentityChanged(Some(owner))` binds to `owner` and re-reads, even
    ///   when the owner is unchanged.
    /// - `IdentityChanged(None)` unbinds and drops the visible records.
    /// - `RecordsChanged` re-reads for the bound owner, and does nothing when
    ///   unbound.
    pub async fn on_change(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::IdentityChanged(Some(owner)) => {
                debug!("Session bound to donor {owner}");
                self.state = self.refreshed(owner).await;
            }
            SessionEvent::IdentityChanged(None) => {
                debug!("Session unbound");
                self.state = SessionState::Unbound;
            }
            SessionEvent::RecordsChanged => {
                if let SessionState::Bound { owner, .. } = &self.state {
                    let owner = owner.clone();
                    self.state = self.refreshed(owner).await;
                }
            }
        }
    }

    async fn refreshed(&self, owner: DonorId) -> SessionState {
        let visible = self.store.list_by_owner(&owner).await;
        let summary = summarize(&visible);
        debug!(
            "Session refreshed: {} record{} visible for donor {owner}",
            visible.len(),
            if visible.len() == 1 { "" } else { "s" }
        );
        SessionState::Bound {
            owner,
            visible,
            summary,
        }
    }

    /// The bound donor, or `None` when unbound.
    pub fn owner(&self) -> Option<&DonorId> {
        match &self.state {
            SessionState::Bound { owner, .. } => Some(owner),
            SessionState::Unbound => None,
        }
    }

    /// The bound donor's records as of the last refresh. Empty when unbound.
    pub fn visible(&self) -> &[Donation] {
        match &self.state {
            SessionState::Bound { visible, .. } => visible,
            SessionState::Unbound => &[],
        }
    }

    /// The summary of [`visible`](Self::visible) as of the last refresh.
    /// All zeros when unbound.
    pub fn summary(&self) -> DonationSummary {
        match &self.state {
            SessionState::Bound { summary, .. } => *summary,
            SessionState::Unbound => DonationSummary::default(),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, SessionState::Bound { .. })
    }
}
