//! Entry Persistence
//!
//! Reads and writes the entry list as one JSON document in storage.
//! Writes are refused until the initial load has run, so an empty
//! pre-load list can never overwrite saved entries.

use std::cell::Cell;

use crate::config::ENTRIES_KEY;
use crate::entries::EntryList;
use crate::storage::{KeyValueStore, SharedStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not encode entries: {0}")]
    Encode(serde_json::Error),
    #[error("stored entries are malformed: {0}")]
    Decode(serde_json::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Parse a stored entry payload
pub fn decode_entries(raw: &str) -> PersistResult<EntryList> {
    let mut entries: EntryList = serde_json::from_str(raw).map_err(PersistError::Decode)?;
    let dropped = entries.sanitize();
    if dropped > 0 {
        log::warn!("[ENTRIES] dropped {} invalid stored entries", dropped);
    }
    Ok(entries)
}

pub fn encode_entries(entries: &EntryList) -> PersistResult<String> {
    serde_json::to_string(entries).map_err(PersistError::Encode)
}

/// Storage-backed entry list with a load-completion guard
pub struct EntryPersister {
    storage: SharedStore,
    loaded: Cell<bool>,
}

impl EntryPersister {
    pub fn new(storage: SharedStore) -> Self {
        Self {
            storage,
            loaded: Cell::new(false),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    fn try_load(&self) -> PersistResult<EntryList> {
        match self.storage.get(ENTRIES_KEY)? {
            Some(raw) => decode_entries(&raw),
            None => Ok(EntryList::new()),
        }
    }

    /// Load the saved entries, or an empty list when they are absent or
    /// unreadable. Saving is allowed from here on.
    pub fn load(&self) -> EntryList {
        let entries = self.try_load().unwrap_or_else(|err| {
            log::warn!("[ENTRIES] failed to load saved entries: {}", err);
            EntryList::new()
        });
        self.loaded.set(true);
        log::debug!("[ENTRIES] loaded {} entries", entries.len());
        entries
    }

    /// Write the full list.
    ///
    /// Returns `Ok(false)` without touching storage if `load` has not run yet.
    pub fn save(&self, entries: &EntryList) -> PersistResult<bool> {
        if !self.loaded.get() {
            log::debug!("[ENTRIES] save skipped before initial load");
            return Ok(false);
        }
        let payload = encode_entries(entries)?;
        self.storage.set(ENTRIES_KEY, &payload)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{BrokenStorage, MemoryStorage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::rc::Rc;

    fn memory() -> SharedStore {
        Rc::new(MemoryStorage::new())
    }

    #[test]
    fn test_absent_payload_loads_empty() {
        let persister = EntryPersister::new(memory());
        assert!(persister.load().is_empty());
        assert!(persister.is_loaded());
    }

    #[test]
    fn test_malformed_payloads_load_empty() {
        let payloads = [
            "",
            "not json",
            "{",
            "{\"id\":\"1\"}",
            "[{\"id\":\"1\",\"name\":\"Alice\"}]",
            "[1, 2, 3]",
            "null",
            "\"Alice,Bob\"",
        ];
        for raw in payloads {
            let storage = memory();
            storage.set(ENTRIES_KEY, raw).unwrap();
            let persister = EntryPersister::new(storage);
            assert!(persister.load().is_empty(), "payload {:?}", raw);
            assert!(persister.is_loaded());
        }
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let persister = EntryPersister::new(Rc::new(BrokenStorage));
        assert!(persister.load().is_empty());
    }

    #[test]
    fn test_save_before_load_is_skipped() {
        let storage = memory();
        storage
            .set(ENTRIES_KEY, r#"[{"id":"1","name":"Alice","color":"bg-red-500","icon":"👤"}]"#)
            .unwrap();
        let persister = EntryPersister::new(storage.clone());

        assert!(!persister.save(&EntryList::new()).unwrap());
        assert_eq!(persister.load().names(), vec!["Alice"]);
    }

    #[test]
    fn test_save_reports_storage_failure() {
        let persister = EntryPersister::new(Rc::new(BrokenStorage));
        persister.load();
        let err = persister.save(&EntryList::new()).unwrap_err();
        assert!(matches!(err, PersistError::Storage(_)));
    }

    #[test]
    fn test_unicode_names_survive_reload() {
        let storage = memory();
        let mut rng = StdRng::seed_from_u64(3);
        let persister = EntryPersister::new(storage.clone());
        let mut entries = persister.load();
        entries.add("José", &mut rng);
        entries.add("王小明", &mut rng);
        assert!(persister.save(&entries).unwrap());

        let reloaded = EntryPersister::new(storage).load();
        assert_eq!(reloaded.names(), vec!["José", "王小明"]);
        assert_eq!(reloaded, entries);
    }

    #[test]
    fn test_add_remove_reload_scenario() {
        let storage = memory();
        let mut rng = StdRng::seed_from_u64(11);
        let persister = EntryPersister::new(storage.clone());
        let mut entries = persister.load();

        let alice = entries.add("Alice", &mut rng).unwrap().id.clone();
        persister.save(&entries).unwrap();
        entries.add("Bob", &mut rng);
        persister.save(&entries).unwrap();
        entries.add("Charlie", &mut rng);
        persister.save(&entries).unwrap();
        assert_eq!(entries.names(), vec!["Alice", "Bob", "Charlie"]);

        entries.remove(&alice);
        persister.save(&entries).unwrap();

        let reloaded = EntryPersister::new(storage).load();
        assert_eq!(reloaded.names(), vec!["Bob", "Charlie"]);
    }

    #[test]
    fn test_decode_keeps_unknown_palette_values() {
        let raw = r#"[{"id":"a","name":"Ann","color":"bg-slate-900","icon":"🦊"}]"#;
        let entries = decode_entries(raw).unwrap();
        assert_eq!(entries.as_slice()[0].color, "bg-slate-900");
        assert_eq!(entries.as_slice()[0].icon, "🦊");
    }

    #[test]
    fn test_decode_drops_blank_names() {
        let raw = r#"[
            {"id":"a","name":"  ","color":"bg-red-500","icon":"👤"},
            {"id":"b","name":"Bea","color":"bg-red-500","icon":"👤"}
        ]"#;
        assert_eq!(decode_entries(raw).unwrap().names(), vec!["Bea"]);
    }
}
