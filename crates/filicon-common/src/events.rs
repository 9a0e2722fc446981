//! Theme-changed observer registry.
//!
//! Callbacks carry no payload; subscribers re-read the active theme when
//! notified. Notification is synchronous and follows registration order.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::id::SubscriptionId;

type Callback = Arc<dyn Fn() + Send + Sync>;
type Entries = Mutex<Vec<(SubscriptionId, Callback)>>;

/// Registry of theme-changed callbacks.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ThemeSubscribers {
    entries: Arc<Entries>,
}

impl ThemeSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It stays registered until the returned
    /// [`Subscription`] is explicitly unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        lock(&self.entries).push((id.clone(), Arc::new(callback)));
        tracing::debug!(subscription = %id, "theme subscriber registered");

        Subscription {
            id,
            entries: Arc::downgrade(&self.entries),
        }
    }

    /// Remove a callback by id. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: &SubscriptionId) -> bool {
        remove(&self.entries, id)
    }

    /// Invoke every callback in registration order and return how many ran.
    ///
    /// The registry lock is released before callbacks run, so a callback may
    /// subscribe or unsubscribe without deadlocking.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<Callback> = lock(&self.entries)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in &snapshot {
            callback();
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ThemeSubscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSubscribers")
            .field("len", &self.len())
            .finish()
    }
}

/// Handle returned by [`ThemeSubscribers::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    entries: Weak<Entries>,
}

impl Subscription {
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Remove this callback from its registry.
    ///
    /// A no-op if the registry has already been dropped.
    pub fn unsubscribe(self) -> bool {
        match self.entries.upgrade() {
            Some(entries) => remove(&entries, &self.id),
            None => false,
        }
    }
}

fn lock(entries: &Entries) -> MutexGuard<'_, Vec<(SubscriptionId, Callback)>> {
    entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn remove(entries: &Entries, id: &SubscriptionId) -> bool {
    let mut guard = lock(entries);
    let before = guard.len();
    guard.retain(|(existing, _)| existing != id);
    let removed = guard.len() != before;
    if removed {
        tracing::debug!(subscription = %id, "theme subscriber removed");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_with_no_subscribers_returns_zero() {
        let subscribers = ThemeSubscribers::new();
        assert_eq!(subscribers.notify(), 0);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn notify_runs_every_callback() {
        let subscribers = ThemeSubscribers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            subscribers.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(subscribers.notify(), 3);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let subscribers = ThemeSubscribers::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..4 {
            let order = Arc::clone(&order);
            subscribers.subscribe(move || order.lock().unwrap().push(n));
        }

        subscribers.notify();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let subscribers = ThemeSubscribers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let first = {
            let hits = Arc::clone(&hits);
            subscribers.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let _second = {
            let hits = Arc::clone(&hits);
            subscribers.subscribe(move || {
                hits.fetch_add(10, Ordering::SeqCst);
            })
        };

        assert!(first.unsubscribe());
        assert_eq!(subscribers.len(), 1);

        subscribers.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn unsubscribe_by_id_twice_reports_false() {
        let subscribers = ThemeSubscribers::new();
        let sub = subscribers.subscribe(|| {});
        let id = sub.id().clone();

        assert!(subscribers.unsubscribe(&id));
        assert!(!subscribers.unsubscribe(&id));
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn unsubscribe_after_registry_dropped_is_noop() {
        let subscribers = ThemeSubscribers::new();
        let sub = subscribers.subscribe(|| {});
        drop(subscribers);
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn callback_may_subscribe_during_notify() {
        let subscribers = ThemeSubscribers::new();
        let inner = subscribers.clone();
        subscribers.subscribe(move || {
            inner.subscribe(|| {});
        });

        assert_eq!(subscribers.notify(), 1);
        assert_eq!(subscribers.len(), 2);
    }

    #[test]
    fn clones_share_the_same_registry() {
        let a = ThemeSubscribers::new();
        let b = a.clone();
        a.subscribe(|| {});
        assert_eq!(b.len(), 1);
    }
}
