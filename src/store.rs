//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ListSummary;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task list overview entries
    pub lists: Vec<ListSummary>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the overview entries wholesale (initial fetch)
pub fn store_set_lists(store: &AppStore, lists: Vec<ListSummary>) {
    *store.lists().write() = lists;
}

/// Add a list to the store
pub fn store_add_list(store: &AppStore, list: ListSummary) {
    store.lists().write().push(list);
}

/// Remove a list from the store by ID
pub fn store_remove_list(store: &AppStore, list_id: &str) {
    store.lists().write().retain(|list| list.id != list_id);
}
