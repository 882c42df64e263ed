//! Session-scoped store of saved content cards.

use std::cell::RefCell;

use mira_model::SavedCard;

use crate::subscription::{Observers, SubscriptionId};

/// Holds the cards the user has bookmarked this session.
///
/// Constructed once at startup and shared (by reference or `Rc`) with
/// every screen controller that shows bookmark state. All operations are
/// total: misuse such as unsaving an absent id is a tolerated no-op, never
/// an error. Subscribers are notified synchronously after each effective
/// mutation so multiple screens stay consistent without a refresh step.
#[derive(Default)]
pub struct BookmarkStore {
    cards: RefCell<Vec<SavedCard>>,
    observers: Observers,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a card. Idempotent and first-write-wins: if a card with the
    /// same id is already saved the call is a no-op and the existing
    /// fields are kept.
    pub fn save(&self, card: SavedCard) {
        {
            let mut cards = self.cards.borrow_mut();
            if cards.iter().any(|c| c.id == card.id) {
                tracing::debug!(id = %card.id, "card already saved, keeping existing entry");
                return;
            }
            cards.push(card);
        }
        self.observers.notify();
    }

    /// Remove the card with `id`, if present.
    pub fn unsave(&self, id: &str) {
        let removed = {
            let mut cards = self.cards.borrow_mut();
            let before = cards.len();
            cards.retain(|c| c.id != id);
            cards.len() != before
        };
        if removed {
            self.observers.notify();
        } else {
            tracing::debug!(id, "unsave of a card that was not saved");
        }
    }

    /// Whether a card with `id` is currently saved. Pure query.
    pub fn is_saved(&self, id: &str) -> bool {
        self.cards.borrow().iter().any(|c| c.id == id)
    }

    /// Remove every saved card.
    pub fn clear(&self) {
        let had_cards = {
            let mut cards = self.cards.borrow_mut();
            let had = !cards.is_empty();
            cards.clear();
            had
        };
        if had_cards {
            self.observers.notify();
        }
    }

    /// Snapshot of the current collection. Insertion order is preserved
    /// but not contractual; screens re-sort as they see fit.
    pub fn cards(&self) -> Vec<SavedCard> {
        self.cards.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.cards.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.borrow().is_empty()
    }

    /// Register a change listener; it fires synchronously after each
    /// effective mutation. Returns the handle to pass to
    /// [`BookmarkStore::unsubscribe`].
    pub fn on_change(&self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }
}
