//! Synchronous change notification.
//!
//! A component owns a `Signal<T>` and emits on each state transition.
//! Callbacks run inline, in subscription order, on the caller's thread.

use std::fmt;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A list of observers for events of type `T`.
pub struct Signal<T: ?Sized> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: ?Sized> Signal<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Register a callback. It is invoked for every subsequent `emit`.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn emit(&mut self, event: &T) {
        for (_, callback) in self.observers.iter_mut() {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_observers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<str> = Signal::new();

        let l1 = Rc::clone(&log);
        signal.subscribe(move |s: &str| l1.borrow_mut().push(format!("a:{}", s)));
        let l2 = Rc::clone(&log);
        signal.subscribe(move |s: &str| l2.borrow_mut().push(format!("b:{}", s)));

        signal.emit("Europe");
        assert_eq!(*log.borrow(), vec!["a:Europe", "b:Europe"]);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(RefCell::new(0));
        let mut signal: Signal<()> = Signal::new();
        let h = Rc::clone(&hits);
        let id = signal.subscribe(move |_| *h.borrow_mut() += 1);

        signal.emit(&());
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&());

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }
}
