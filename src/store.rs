//! Board State Store
//!
//! Uses Leptos reactive_stores so the list and the message area update independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::message::{MessageKind, MessageSlot, StatusMessage, Ticket};
use crate::models::ListPane;

/// Client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Last load result
    pub list: ListPane,
    /// Status line under the add form
    pub message: MessageSlot,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_list_pane(store: &BoardStore) -> ListPane {
    store.list().get()
}

pub fn store_set_list_pane(store: &BoardStore, pane: ListPane) {
    *store.list().write() = pane;
}

pub fn store_message(store: &BoardStore) -> Option<StatusMessage> {
    store.message().read().current().cloned()
}

pub fn store_show_message(store: &BoardStore, text: &str, kind: MessageKind) -> Ticket {
    store.message().write().show(text, kind)
}

pub fn store_expire_message(store: &BoardStore, ticket: Ticket) {
    // Leave the signal untouched when a newer message holds the slot
    let mut next = store.message().get_untracked();
    if next.expire(ticket) {
        *store.message().write() = next;
    }
}
