//! Observable state for UI bindings
//!
//! A typed value whose subscribers are told about every change. Backed by a
//! `tokio::sync::watch` channel: publishing never needs a runtime, and
//! subscribers may poll `has_changed()` or await `changed()`.

use tokio::sync::watch;

pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value. Subscribers are notified only if it differs.
    /// Returns whether a notification was sent.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Mutate in place. Subscribers are notified only if the value changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
