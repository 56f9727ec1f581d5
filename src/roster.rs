//! In-process driver onboarding roster.
//!
//! Drivers are split into a pending set and an approved set. Every transition
//! builds a fresh [`DriverRoster`] and publishes it through a watch channel, so a
//! snapshot handed out earlier is never mutated and subscribers can detect
//! changes by pointer. Transitions that change nothing do not publish.
//! Nothing here is persisted.

use crate::domain::driver::{Driver, DriverStatus};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverRoster {
    pub pending: Vec<Driver>,
    pub approved: Vec<Driver>,
}

impl DriverRoster {
    #[must_use]
    pub fn pending_driver(&self, id: Uuid) -> Option<&Driver> {
        self.pending.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn approved_driver(&self, id: Uuid) -> Option<&Driver> {
        self.approved.iter().find(|d| d.id == id)
    }

    fn with_pending(&self, mut driver: Driver) -> Self {
        driver.status = DriverStatus::Pending;
        let mut pending = self.pending.clone();
        pending.push(driver);
        Self { pending, approved: self.approved.clone() }
    }

    fn with_approved(&self, id: Uuid) -> Option<Self> {
        let mut driver = self.pending_driver(id)?.clone();
        driver.status = DriverStatus::Active;
        let pending = self.pending.iter().filter(|d| d.id != id).cloned().collect();
        let mut approved = self.approved.clone();
        approved.push(driver);
        Some(Self { pending, approved })
    }

    fn without_pending(&self, id: Uuid) -> Option<Self> {
        if !self.pending.iter().any(|d| d.id == id) {
            return None;
        }
        let pending = self.pending.iter().filter(|d| d.id != id).cloned().collect();
        Some(Self { pending, approved: self.approved.clone() })
    }
}

#[derive(Clone, Debug)]
pub struct DriverStore {
    tx: Arc<watch::Sender<Arc<DriverRoster>>>,
}

impl Default for DriverStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(DriverRoster::default()));
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<DriverRoster> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receives a notification for every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<DriverRoster>> {
        self.tx.subscribe()
    }

    /// Appends a driver to the pending set, forcing its status to pending.
    #[tracing::instrument(level = "debug", skip(self, driver), fields(driver_id = %driver.id))]
    pub fn add_pending_driver(&self, driver: Driver) {
        self.tx.send_modify(|roster| {
            *roster = Arc::new(roster.with_pending(driver));
        });
    }

    /// Moves a pending driver to the approved set as active.
    ///
    /// Returns false and leaves the roster untouched if the driver is not pending.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn approve_driver(&self, driver_id: Uuid) -> bool {
        self.tx.send_if_modified(|roster| match roster.with_approved(driver_id) {
            Some(next) => {
                *roster = Arc::new(next);
                true
            }
            None => false,
        })
    }

    /// Drops a driver from the pending set.
    ///
    /// Returns false if the driver was not pending.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reject_driver(&self, driver_id: Uuid) -> bool {
        self.tx.send_if_modified(|roster| match roster.without_pending(driver_id) {
            Some(next) => {
                *roster = Arc::new(next);
                true
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::driver::DriverProfile;

    fn driver(name: &str) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            profile: DriverProfile {
                name: name.to_string(),
                email: format!("{name}@example.com"),
                phone: None,
                license_number: Some("DL-1234".into()),
                photo: None,
            },
            status: DriverStatus::Active,
        }
    }

    #[test]
    fn test_add_forces_pending() {
        let store = DriverStore::new();
        let d = driver("ana");
        store.add_pending_driver(d.clone());

        let roster = store.snapshot();
        assert_eq!(roster.pending.len(), 1);
        assert_eq!(roster.pending_driver(d.id).unwrap().status, DriverStatus::Pending);
        assert!(roster.approved.is_empty());
    }

    #[test]
    fn test_approve_moves_to_active() {
        let store = DriverStore::new();
        let d = driver("ben");
        store.add_pending_driver(d.clone());

        assert!(store.approve_driver(d.id));

        let roster = store.snapshot();
        assert!(roster.pending_driver(d.id).is_none());
        let approved = roster.approved_driver(d.id).unwrap();
        assert_eq!(approved.status, DriverStatus::Active);
        assert_eq!(approved.profile, d.profile);
    }

    #[test]
    fn test_approve_clears_every_pending_copy() {
        let store = DriverStore::new();
        let d = driver("bea");
        store.add_pending_driver(d.clone());
        store.add_pending_driver(d.clone());

        assert!(store.approve_driver(d.id));

        let roster = store.snapshot();
        assert!(roster.pending_driver(d.id).is_none());
        assert_eq!(roster.approved.iter().filter(|a| a.id == d.id).count(), 1);
    }

    #[test]
    fn test_reject_removes_everywhere() {
        let store = DriverStore::new();
        let d = driver("cai");
        store.add_pending_driver(d.clone());

        assert!(store.reject_driver(d.id));

        let roster = store.snapshot();
        assert!(roster.pending_driver(d.id).is_none());
        assert!(roster.approved_driver(d.id).is_none());
    }

    #[test]
    fn test_approve_unknown_is_noop() {
        let store = DriverStore::new();
        store.add_pending_driver(driver("dan"));
        let before = store.snapshot();

        assert!(!store.approve_driver(Uuid::new_v4()));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_reject_does_not_touch_approved() {
        let store = DriverStore::new();
        let d = driver("eve");
        store.add_pending_driver(d.clone());
        store.approve_driver(d.id);

        assert!(!store.reject_driver(d.id));
        assert!(store.snapshot().approved_driver(d.id).is_some());
    }

    #[test]
    fn test_old_snapshots_are_untouched() {
        let store = DriverStore::new();
        let d = driver("fay");
        store.add_pending_driver(d.clone());
        let before = store.snapshot();

        store.approve_driver(d.id);

        assert_eq!(before.pending.len(), 1);
        assert!(before.approved.is_empty());
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_subscribers_only_see_real_changes() {
        let store = DriverStore::new();
        let mut rx = store.subscribe();
        let d = driver("gus");

        store.approve_driver(d.id);
        assert!(!rx.has_changed().unwrap());

        store.add_pending_driver(d.clone());
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        store.reject_driver(Uuid::new_v4());
        assert!(!rx.has_changed().unwrap());

        store.approve_driver(d.id);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().approved.len(), 1);
    }
}
