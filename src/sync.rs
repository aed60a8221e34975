//! Optimistic Mutation Synchronizer
//!
//! Applies a user action to the in-memory list mirror before the backend
//! confirms it. On success the mirror is already correct and other views
//! are notified; on failure the optimistic guess is discarded by replacing
//! the mirror wholesale with a fresh authoritative fetch. No partial
//! rollback is attempted.

use std::future::Future;

use leptos::prelude::*;

use crate::api::ApiError;
use crate::context::ChangeNotifier;
use crate::models::SalesLead;

/// Sync status of a remotely-owned resource mirrored in view state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncState {
    /// Local view matches the last known remote state
    #[default]
    Synced,
    /// Local view updated ahead of remote confirmation
    PendingOptimistic,
    /// Remote rejected the update; refetching the authoritative list
    Reconciling,
}

impl SyncState {
    pub fn on_local_write(self) -> Self {
        SyncState::PendingOptimistic
    }

    pub fn on_persist_ok(self) -> Self {
        SyncState::Synced
    }

    pub fn on_persist_err(self) -> Self {
        SyncState::Reconciling
    }

    pub fn on_reconciled(self) -> Self {
        SyncState::Synced
    }
}

/// Resources addressable by id within a mirrored list
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for SalesLead {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Optimistically patch one resource in the mirrored list, persist the
/// change remotely, and reconcile.
///
/// The local write happens synchronously, so the view re-renders before
/// `persist` resolves. On success the `changed` notifier fires so sibling
/// views observing the same collection refetch. On failure `reload` is
/// asked for the authoritative list, which replaces the mirror wholesale;
/// if the refetch itself fails the mirror is left as-is. Errors are
/// swallowed here on purpose: this flow stays quiet and self-corrects
/// instead of alerting.
///
/// Concurrent calls for the same id are issued independently; the last
/// local write wins for display, and a reconciliation always overwrites
/// any interleaved optimistic guess for that id.
pub async fn apply_optimistic_change<T, F, P, R, RF>(
    items: RwSignal<Vec<T>>,
    sync_state: RwSignal<SyncState>,
    resource_id: u32,
    patch: F,
    persist: P,
    reload: R,
    changed: ChangeNotifier,
) -> SyncState
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: FnOnce(&mut T),
    P: Future<Output = Result<(), ApiError>>,
    R: FnOnce() -> RF,
    RF: Future<Output = Option<Vec<T>>>,
{
    let mut applied = false;
    items.update(|list| {
        if let Some(item) = list.iter_mut().find(|i| i.key() == resource_id) {
            patch(item);
            applied = true;
        }
    });
    if !applied {
        // Unknown id: nothing to persist
        return sync_state.get_untracked();
    }
    sync_state.update(|s| *s = s.on_local_write());

    match persist.await {
        Ok(()) => {
            sync_state.update(|s| *s = s.on_persist_ok());
            changed.notify();
        }
        Err(_) => {
            sync_state.update(|s| *s = s.on_persist_err());
            if let Some(fresh) = reload().await {
                items.set(fresh);
            }
            sync_state.update(|s| *s = s.on_reconciled());
        }
    }
    sync_state.get_untracked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadPriority, LeadStatus};
    use futures::channel::oneshot;
    use futures::task::noop_waker;
    use std::task::{Context, Poll};

    fn lead(id: u32, status: LeadStatus) -> SalesLead {
        SalesLead {
            id,
            company_name: format!("Company {}", id),
            owner: "Owner".to_string(),
            email: None,
            phone: None,
            status,
            location: None,
            segment: None,
            project_code: None,
            notes: None,
            priority: LeadPriority::default(),
        }
    }

    fn status_of(items: RwSignal<Vec<SalesLead>>, id: u32) -> LeadStatus {
        items.get_untracked().iter().find(|l| l.id == id).unwrap().status
    }

    #[test]
    fn state_machine_transitions() {
        let state = SyncState::Synced.on_local_write();
        assert_eq!(state, SyncState::PendingOptimistic);
        assert_eq!(state.on_persist_ok(), SyncState::Synced);
        assert_eq!(state.on_persist_err(), SyncState::Reconciling);
        assert_eq!(state.on_persist_err().on_reconciled(), SyncState::Synced);
    }

    #[test]
    fn local_write_is_visible_before_persist_resolves() {
        let items = RwSignal::new(vec![lead(1, LeadStatus::New)]);
        let sync_state = RwSignal::new(SyncState::Synced);
        let changed = ChangeNotifier::new();

        let (tx, rx) = oneshot::channel::<Result<(), ApiError>>();
        let fut = apply_optimistic_change(
            items,
            sync_state,
            1,
            |l: &mut SalesLead| l.status = LeadStatus::Contacted,
            async move { rx.await.unwrap_or(Err(ApiError::Network("dropped".to_string()))) },
            || async { None },
            changed,
        );

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = Box::pin(fut);

        // Suspended on the network call, but the mirror already shows the move
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert_eq!(status_of(items, 1), LeadStatus::Contacted);
        assert_eq!(sync_state.get_untracked(), SyncState::PendingOptimistic);
        assert_eq!(changed.watch(), 0);

        tx.send(Ok(())).unwrap();
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(SyncState::Synced));
        assert_eq!(status_of(items, 1), LeadStatus::Contacted);
        assert_eq!(changed.watch(), 1);
    }

    #[test]
    fn failed_persist_reconciles_to_authoritative_state() {
        let items = RwSignal::new(vec![lead(1, LeadStatus::New), lead(2, LeadStatus::Lost)]);
        let sync_state = RwSignal::new(SyncState::Synced);
        let changed = ChangeNotifier::new();

        // Backend actually holds "qualified", not the original "new"
        let authoritative = vec![lead(1, LeadStatus::Qualified), lead(2, LeadStatus::Lost)];
        let fresh = authoritative.clone();

        let final_state = futures::executor::block_on(apply_optimistic_change(
            items,
            sync_state,
            1,
            |l: &mut SalesLead| l.status = LeadStatus::Contacted,
            async { Err(ApiError::Network("connection reset".to_string())) },
            move || async move { Some(fresh) },
            changed,
        ));

        assert_eq!(final_state, SyncState::Synced);
        assert_eq!(items.get_untracked(), authoritative);
        // Silent revert: no success broadcast
        assert_eq!(changed.watch(), 0);
    }

    #[test]
    fn failed_reload_leaves_mirror_untouched() {
        let items = RwSignal::new(vec![lead(1, LeadStatus::New)]);
        let sync_state = RwSignal::new(SyncState::Synced);
        let changed = ChangeNotifier::new();

        let final_state = futures::executor::block_on(apply_optimistic_change(
            items,
            sync_state,
            1,
            |l: &mut SalesLead| l.status = LeadStatus::Contacted,
            async { Err(ApiError::Network("timeout".to_string())) },
            || async { None },
            changed,
        ));

        assert_eq!(final_state, SyncState::Synced);
        assert_eq!(status_of(items, 1), LeadStatus::Contacted);
    }

    #[test]
    fn unknown_resource_id_is_a_no_op() {
        let original = vec![lead(1, LeadStatus::New)];
        let items = RwSignal::new(original.clone());
        let sync_state = RwSignal::new(SyncState::Synced);
        let changed = ChangeNotifier::new();

        let final_state = futures::executor::block_on(apply_optimistic_change(
            items,
            sync_state,
            99,
            |l: &mut SalesLead| l.status = LeadStatus::Contacted,
            async { Ok(()) },
            || async { None },
            changed,
        ));

        assert_eq!(final_state, SyncState::Synced);
        assert_eq!(items.get_untracked(), original);
        assert_eq!(changed.watch(), 0);
    }

    #[test]
    fn last_local_write_wins_while_both_persists_are_in_flight() {
        let items = RwSignal::new(vec![lead(1, LeadStatus::New)]);
        let sync_state = RwSignal::new(SyncState::Synced);
        let changed = ChangeNotifier::new();

        let (tx_a, rx_a) = oneshot::channel::<Result<(), ApiError>>();
        let (tx_b, rx_b) = oneshot::channel::<Result<(), ApiError>>();

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut first = Box::pin(apply_optimistic_change(
            items,
            sync_state,
            1,
            |l: &mut SalesLead| l.status = LeadStatus::Contacted,
            async move { rx_a.await.unwrap_or(Err(ApiError::Network("dropped".to_string()))) },
            || async { None },
            changed,
        ));
        let mut second = Box::pin(apply_optimistic_change(
            items,
            sync_state,
            1,
            |l: &mut SalesLead| l.status = LeadStatus::Qualified,
            async move { rx_b.await.unwrap_or(Err(ApiError::Network("dropped".to_string()))) },
            || async { None },
            changed,
        ));

        assert!(first.as_mut().poll(&mut cx).is_pending());
        assert!(second.as_mut().poll(&mut cx).is_pending());
        assert_eq!(status_of(items, 1), LeadStatus::Qualified);

        // Both calls were issued independently; completion order does not
        // change what is displayed
        tx_a.send(Ok(())).unwrap();
        tx_b.send(Ok(())).unwrap();
        assert!(first.as_mut().poll(&mut cx).is_ready());
        assert!(second.as_mut().poll(&mut cx).is_ready());
        assert_eq!(status_of(items, 1), LeadStatus::Qualified);
        assert_eq!(changed.watch(), 2);
    }
}
