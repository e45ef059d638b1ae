//! Loaded record lists shared between the main panel and the modal slot, so a
//! form in the modal can update the list on screen without a refetch.

use crate::api::{Employee, Visitor};
use leptos::*;

pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Employee {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Visitor {
    fn key(&self) -> i64 {
        self.id
    }
}

pub fn upsert<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

pub fn remove<T: Keyed>(items: &mut Vec<T>, key: i64) -> bool {
    let before = items.len();
    items.retain(|item| item.key() != key);
    items.len() != before
}

pub struct Roster<T: 'static> {
    items: RwSignal<Vec<T>>,
    loaded: RwSignal<bool>,
    revision: RwSignal<u32>,
}

impl<T: 'static> Clone for Roster<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Roster<T> {}

impl<T: Keyed + Clone + 'static> Roster<T> {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loaded: create_rw_signal(false),
            revision: create_rw_signal(0),
        }
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        self.items.into()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn replace(&self, items: Vec<T>) {
        self.items.set(items);
        self.loaded.set(true);
    }

    pub fn upsert(&self, item: T) {
        self.items.update(|items| upsert(items, item));
    }

    /// Tracked; lists key their fetch on it.
    pub fn revision(&self) -> u32 {
        self.revision.get()
    }

    /// Asks the list to refetch, for changes the server did not echo back.
    pub fn invalidate(&self) {
        self.revision.update(|value| *value = value.wrapping_add(1));
    }

    pub fn remove(&self, key: i64) {
        self.items.update(|items| {
            remove(items, key);
        });
    }
}

impl<T: Keyed + Clone + 'static> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_roster<T: Keyed + Clone + 'static>() -> Roster<T> {
    let roster = Roster::<T>::new();
    provide_context(roster);
    roster
}

pub fn use_roster<T: Keyed + Clone + 'static>() -> Roster<T> {
    use_context::<Roster<T>>().unwrap_or_else(provide_roster::<T>)
}
