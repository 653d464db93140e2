//! Observer registry and the handle returned by `Store::subscribe`.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

pub(crate) type Observer = Arc<dyn Fn() + Send + Sync>;

/// One registration. Shared between the registry and in-flight snapshots.
pub(crate) struct ObserverSlot {
    id: u64,
    active: AtomicBool,
    callback: Observer,
}

impl ObserverSlot {
    /// Invoke the observer unless it was removed after the snapshot was taken.
    pub(crate) fn notify(&self) {
        if self.active.load(Ordering::Acquire) {
            (self.callback)();
        }
    }
}

/// Registered observers in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    slots: Vec<Arc<ObserverSlot>>,
}

impl ObserverRegistry {
    pub(crate) fn insert(&mut self, callback: Observer) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Arc::new(ObserverSlot {
            id,
            active: AtomicBool::new(true),
            callback,
        }));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let Some(pos) = self.slots.iter().position(|slot| slot.id == id) else {
            return false;
        };
        let slot = self.slots.remove(pos);
        slot.active.store(false, Ordering::Release);
        true
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    /// Copy of the current registrations for one notification pass.
    pub(crate) fn snapshot(&self) -> Vec<Arc<ObserverSlot>> {
        self.slots.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Handle for one observer registration.
///
/// Redeem it with [`Subscription::unsubscribe`]. The first call removes the
/// observer; later calls do nothing. Dropping the handle keeps the observer
/// registered for as long as the store lives.
pub struct Subscription {
    registry: Weak<Mutex<ObserverRegistry>>,
    id: u64,
    redeemed: AtomicBool,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<Mutex<ObserverRegistry>>, id: u64) -> Self {
        Self {
            registry,
            id,
            redeemed: AtomicBool::new(false),
        }
    }

    /// Remove the observer from its store.
    ///
    /// Returns `true` if this call removed it. Safe to call from inside an
    /// observer: a removed observer that is still pending in the current
    /// notification pass is skipped.
    pub fn unsubscribe(&self) -> bool {
        if self.redeemed.swap(true, Ordering::AcqRel) {
            return false;
        }
        match self.registry.upgrade() {
            Some(registry) => registry.lock().remove(self.id),
            None => false,
        }
    }

    /// Whether the observer is still registered with a live store.
    pub fn is_active(&self) -> bool {
        if self.redeemed.load(Ordering::Acquire) {
            return false;
        }
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("redeemed", &self.redeemed.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_observer(calls: &Arc<AtomicUsize>) -> Observer {
        let calls = Arc::clone(calls);
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn insert_assigns_distinct_ids() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ObserverRegistry::default();
        let a = registry.insert(counting_observer(&calls));
        let b = registry.insert(counting_observer(&calls));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn removed_slot_in_snapshot_is_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ObserverRegistry::default();
        let id = registry.insert(counting_observer(&calls));

        let snapshot = registry.snapshot();
        assert!(registry.remove(id));
        for slot in &snapshot {
            slot.notify();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut registry = ObserverRegistry::default();
        assert!(!registry.remove(42));
    }

    #[test]
    fn unsubscribe_is_redeemable_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Arc::new(Mutex::new(ObserverRegistry::default()));
        let id = registry.lock().insert(counting_observer(&calls));
        let subscription = Subscription::new(Arc::downgrade(&registry), id);

        assert!(subscription.is_active());
        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
        assert!(!subscription.is_active());
        assert_eq!(registry.lock().len(), 0);
    }

    #[test]
    fn unsubscribe_after_registry_dropped_is_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Arc::new(Mutex::new(ObserverRegistry::default()));
        let id = registry.lock().insert(counting_observer(&calls));
        let subscription = Subscription::new(Arc::downgrade(&registry), id);
        drop(registry);

        assert!(!subscription.is_active());
        assert!(!subscription.unsubscribe());
    }
}
