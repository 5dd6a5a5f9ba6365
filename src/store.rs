// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reactive state container.
//!
//! A [`Store`] holds one value and pushes every change to its subscribers,
//! synchronously and in registration order. The application keeps three of
//! these (activity log, running total, current user) inside
//! [`AppContext`](crate::AppContext).
//!
//! Notification semantics:
//! - Subscribing delivers the current value immediately, so late
//!   subscribers never miss the latest state.
//! - `set` notifies unconditionally, even when the new value compares
//!   equal to the old one (same behavior as the web frontend's stores).
//! - All subscribers for a given `set`/`update` run before the call
//!   returns; mutations are serialized per store.
//! - A panicking subscriber is caught and logged; the remaining
//!   subscribers in the same pass still run.
//!
//! Subscribers must not call `set`/`update` on the store they are
//! subscribed to; the store is locked for the duration of a notification
//! pass and a re-entrant mutation would deadlock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Reactive container for a single value of type `T`.
///
/// Cloning a `Store` is cheap and yields a second handle to the same
/// underlying value and subscriber list.
pub struct Store<T> {
    inner: Arc<Mutex<StoreInner<T>>>,
}

struct StoreInner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

impl<T> Store<T> {
    /// Create a store seeded with `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                value: initial,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register `callback` and invoke it once with the current value.
    ///
    /// Returns a [`Subscription`] handle; call
    /// [`unsubscribe`](Subscription::unsubscribe) to deregister. Dropping
    /// the handle without unsubscribing leaves the callback registered
    /// for the lifetime of the store.
    pub fn subscribe(&self, callback: impl FnMut(&T) + Send + 'static) -> Subscription<T> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));

        // Initial delivery happens under the lock so a concurrent `set`
        // cannot slip in between registration and the first invocation.
        let StoreInner {
            value, subscribers, ..
        } = &mut *inner;
        if let Some((sub_id, callback)) = subscribers.last_mut() {
            invoke_isolated(*sub_id, callback, value);
        }

        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Replace the value and notify every subscriber in registration
    /// order.
    ///
    /// Notification is unconditional; there is no equality check on the
    /// new value.
    pub fn set(&self, new_value: T) {
        let mut inner = self.lock();
        inner.value = new_value;
        notify_all(&mut inner);
    }

    /// Apply `f` to the current value and store the result, then notify
    /// as [`set`](Store::set) does.
    ///
    /// The transform runs under the store lock, so no other mutation can
    /// interleave between the read and the write.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let mut inner = self.lock();
        inner.value = f(&inner.value);
        notify_all(&mut inner);
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner<T>> {
        // Subscriber panics are caught before they can unwind through the
        // lock, so poisoning can only come from a panicking `update`
        // transform; the value itself is still consistent in that case.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Store<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Store").field(&self.lock().value).finish()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Holds only a weak reference to the store, so an outstanding handle
/// never keeps the store alive.
pub struct Subscription<T> {
    inner: Weak<Mutex<StoreInner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Deregister the callback.
    ///
    /// Calling this more than once, or after the store has been dropped,
    /// is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Invoke every subscriber with the current value, in registration order.
fn notify_all<T>(inner: &mut StoreInner<T>) {
    let StoreInner {
        value, subscribers, ..
    } = inner;
    for (id, callback) in subscribers.iter_mut() {
        invoke_isolated(*id, callback, value);
    }
}

/// Invoke one subscriber, containing any panic it raises.
fn invoke_isolated<T>(id: u64, callback: &mut Callback<T>, value: &T) {
    let result = panic::catch_unwind(AssertUnwindSafe(|| callback(value)));
    if let Err(payload) = result {
        tracing::error!(
            subscriber_id = id,
            panic = panic_message(payload.as_ref()),
            "Subscriber panicked during notification"
        );
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect observed values into a shared vec for assertions.
    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static)
    {
        let seen: Arc<Mutex<Vec<T>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
    }

    #[test]
    fn test_subscribe_delivers_current_value() {
        let store = Store::new(42);
        let (seen, callback) = recorder();

        let _sub = store.subscribe(callback);

        assert_eq!(*seen.lock().unwrap(), vec![42]);
    }

    #[test]
    fn test_set_notifies_in_order() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let _sub = store.subscribe(callback);

        store.set(1);
        store.set(2);
        store.set(3);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(store.get(), 3);
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let store = Store::new(0);
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        let _a = store.subscribe(move |_| first.lock().unwrap().push("a"));
        let second = order.clone();
        let _b = store.subscribe(move |_| second.lock().unwrap().push("b"));

        order.lock().unwrap().clear();
        store.set(1);

        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_update_applies_transform() {
        let store = Store::new(5);
        let (seen, callback) = recorder();
        let _sub = store.subscribe(callback);

        store.update(|x| x + 1);

        assert_eq!(store.get(), 6);
        assert_eq!(*seen.lock().unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_equal_value_still_notifies() {
        let store = Store::new(7);
        let (seen, callback) = recorder();
        let _sub = store.subscribe(callback);

        store.set(7);

        assert_eq!(*seen.lock().unwrap(), vec![7, 7]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let sub = store.subscribe(callback);

        sub.unsubscribe();
        store.set(1);

        assert_eq!(*seen.lock().unwrap(), vec![0]);
    }

    #[test]
    fn test_double_unsubscribe_is_noop() {
        let store = Store::new(0);
        let (seen_a, callback_a) = recorder();
        let sub_a = store.subscribe(callback_a);
        let (seen_b, callback_b) = recorder();
        let _sub_b = store.subscribe(callback_b);

        sub_a.unsubscribe();
        sub_a.unsubscribe();
        store.set(9);

        assert_eq!(*seen_a.lock().unwrap(), vec![0]);
        assert_eq!(*seen_b.lock().unwrap(), vec![0, 9]);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = Store::new(0);
        let sub = store.subscribe(|_| {});
        drop(store);

        // Weak reference fails to upgrade; nothing to do.
        sub.unsubscribe();
    }

    #[test]
    fn test_late_subscriber_sees_latest_value() {
        let store = Store::new(0);
        let (seen_a, callback_a) = recorder();
        let _a = store.subscribe(callback_a);

        store.set(5);

        let (seen_b, callback_b) = recorder();
        let _b = store.subscribe(callback_b);
        assert_eq!(*seen_b.lock().unwrap(), vec![5]);

        store.set(10);

        assert_eq!(*seen_a.lock().unwrap(), vec![0, 5, 10]);
        assert_eq!(*seen_b.lock().unwrap(), vec![5, 10]);
    }

    #[test]
    fn test_panicking_subscriber_does_not_starve_others() {
        let store = Store::new(0);
        let _bad = store.subscribe(|value: &i32| {
            if *value > 0 {
                panic!("subscriber failure");
            }
        });
        let (seen, callback) = recorder();
        let _good = store.subscribe(callback);

        store.set(1);
        store.set(2);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_store_holds_collections() {
        let store: Store<Vec<String>> = Store::default();
        let (seen, callback) = recorder();
        let _sub = store.subscribe(callback);

        store.update(|list| {
            let mut next = list.clone();
            next.push("velo".to_string());
            next
        });

        assert_eq!(store.get(), vec!["velo".to_string()]);
        let observed = seen.lock().unwrap();
        assert_eq!(observed.len(), 2);
        assert!(observed[0].is_empty());
    }
}
