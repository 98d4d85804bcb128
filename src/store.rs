//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::entries::EntryList;
use crate::models::Entry;

/// Entry list plus the shuffle presentation state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Entries in display order
    pub entries: EntryList,
    /// Last shuffle result
    pub selected: Option<Entry>,
    /// A shuffle is running (trigger disabled)
    pub shuffling: bool,
    /// The selected entry is on display
    pub show_result: bool,
}

impl AppState {
    pub fn with_entries(entries: EntryList) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn can_shuffle(&self) -> bool {
        !self.shuffling && !self.entries.is_empty()
    }

    /// Remove an entry, clearing the selection if it pointed at it
    pub fn remove_entry(&mut self, id: &str) -> Option<Entry> {
        let removed = self.entries.remove(id)?;
        if self.selected.as_ref().is_some_and(|selected| selected.id == id) {
            self.selected = None;
            self.show_result = false;
        }
        Some(removed)
    }

    /// Enter the rolling phase; `false` when shuffling is unavailable
    pub fn begin_shuffle(&mut self) -> bool {
        if !self.can_shuffle() {
            return false;
        }
        self.shuffling = true;
        self.show_result = false;
        true
    }

    /// Record the pick and leave the rolling phase
    pub fn finish_shuffle(&mut self, picked: Option<Entry>) -> Option<&Entry> {
        self.selected = picked;
        self.shuffling = false;
        self.selected.as_ref()
    }

    /// Show the picked entry, if it is still there
    pub fn reveal(&mut self) -> bool {
        self.show_result = self.selected.is_some();
        self.show_result
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
