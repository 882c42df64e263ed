#![allow(missing_docs)]

use std::cell::Cell;
use std::rc::Rc;

use mira_model::SavedCard;
use mira_store::BookmarkStore;

fn card(id: &str) -> SavedCard {
    SavedCard::new(id, format!("Title {id}"), format!("Description {id}"))
}

fn counting_listener(store: &BookmarkStore) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0u32));
    let handle = Rc::clone(&count);
    store.on_change(move || handle.set(handle.get() + 1));
    count
}

#[test]
fn save_is_idempotent() {
    let store = BookmarkStore::new();
    store.save(card("c1"));
    store.save(card("c1"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.cards(), vec![card("c1")]);
}

#[test]
fn save_keeps_the_first_entry() {
    let store = BookmarkStore::new();
    store.save(card("c1"));
    store.save(SavedCard::new("c1", "Renamed", "Other text"));
    assert_eq!(store.cards()[0].title, "Title c1");
}

#[test]
fn unsave_of_absent_id_changes_nothing() {
    let store = BookmarkStore::new();
    store.save(card("c1"));
    let before = store.cards();
    store.unsave("missing");
    assert_eq!(store.cards(), before);
}

#[test]
fn save_then_unsave_removes_the_card() {
    let store = BookmarkStore::new();
    store.save(card("c1"));
    store.save(card("c2"));
    store.unsave("c1");
    assert!(!store.is_saved("c1"));
    assert!(store.is_saved("c2"));
    assert_eq!(store.cards(), vec![card("c2")]);
}

#[test]
fn clear_empties_regardless_of_prior_state() {
    let store = BookmarkStore::new();
    store.clear();
    assert!(store.is_empty());

    store.save(card("c1"));
    store.save(card("c2"));
    store.clear();
    assert!(store.cards().is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn notifies_once_per_effective_mutation() {
    let store = BookmarkStore::new();
    let count = counting_listener(&store);

    store.save(card("c1")); // 1
    store.save(card("c1")); // no-op
    store.unsave("missing"); // no-op
    store.unsave("c1"); // 2
    store.clear(); // empty already, no-op
    store.save(card("c2")); // 3
    store.clear(); // 4
    assert_eq!(count.get(), 4);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = BookmarkStore::new();
    let count = Rc::new(Cell::new(0u32));
    let handle = Rc::clone(&count);
    let id = store.on_change(move || handle.set(handle.get() + 1));

    store.save(card("c1"));
    store.unsubscribe(id);
    store.save(card("c2"));
    assert_eq!(count.get(), 1);
}

#[test]
fn listeners_can_read_the_store() {
    let store = Rc::new(BookmarkStore::new());
    let seen_len = Rc::new(Cell::new(0usize));
    {
        let store = Rc::clone(&store);
        let seen_len = Rc::clone(&seen_len);
        store.clone().on_change(move || seen_len.set(store.len()));
    }
    store.save(card("c1"));
    store.save(card("c2"));
    assert_eq!(seen_len.get(), 2);
}
