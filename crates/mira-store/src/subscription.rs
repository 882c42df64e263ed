//! Change-notification registry shared by the stores.
//!
//! Subscribers register explicitly and receive a synchronous callback
//! after every effective mutation and pull whatever state they need from
//! the store. Everything here is single-threaded; re-entrancy (a callback
//! reading the store, subscribing, or unsubscribing mid-dispatch) is
//! handled, nested notification is suppressed.

use std::cell::{Cell, RefCell};

/// Handle returned by `on_change`, used to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut()>;

struct Entry {
    id: SubscriptionId,
    callback: Callback,
}

/// Registry of change listeners for one store.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: Cell<u64>,
    entries: RefCell<Vec<Entry>>,
    // Staging for mutations that arrive while a dispatch is in progress.
    added: RefCell<Vec<Entry>>,
    removed: RefCell<Vec<SubscriptionId>>,
    dispatching: Cell<bool>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Registrations made from inside a callback take
    /// effect from the next notification onward.
    pub(crate) fn subscribe(&self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let entry = Entry {
            id,
            callback: Box::new(callback),
        };
        if self.dispatching.get() {
            self.added.borrow_mut().push(entry);
        } else {
            self.entries.borrow_mut().push(entry);
        }
        id
    }

    /// Remove a callback. Unknown ids are tolerated no-ops. Unsubscribing
    /// mid-dispatch suppresses the callback if it has not run yet.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) {
        if self.dispatching.get() {
            self.added.borrow_mut().retain(|e| e.id != id);
            self.removed.borrow_mut().push(id);
        } else {
            self.entries.borrow_mut().retain(|e| e.id != id);
        }
    }

    /// Invoke every registered callback, in registration order.
    ///
    /// The entry list is moved out for the duration of the dispatch so
    /// callbacks can freely call back into the store. A notification
    /// triggered from inside a callback is dropped; the triggering
    /// mutation is already visible to every listener of the current pass.
    pub(crate) fn notify(&self) {
        if self.dispatching.get() {
            tracing::debug!("nested store notification suppressed");
            return;
        }
        self.dispatching.set(true);
        let mut entries = self.entries.take();
        for entry in &mut entries {
            if self.removed.borrow().contains(&entry.id) {
                continue;
            }
            (entry.callback)();
        }
        self.dispatching.set(false);

        let removed = self.removed.take();
        if !removed.is_empty() {
            entries.retain(|e| !removed.contains(&e.id));
        }
        entries.append(&mut self.added.borrow_mut());
        *self.entries.borrow_mut() = entries;
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
