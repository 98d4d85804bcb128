//! Entry List
//!
//! Ordered collection of entries with the add/remove/pick operations.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{new_entry_id, Entry};

/// Entries in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList(Vec<Entry>);

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.0.iter().any(|entry| entry.id == id)
    }

    /// Names in display order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Append an entry for `raw_name`.
    ///
    /// Returns `None` (and leaves the list untouched) when the trimmed name is empty.
    pub fn add<R: Rng + ?Sized>(&mut self, raw_name: &str, rng: &mut R) -> Option<&Entry> {
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }
        let mut id = new_entry_id(rng);
        while self.contains_id(&id) {
            id = new_entry_id(rng);
        }
        self.0.push(Entry::new(id, name.to_string(), rng));
        self.0.last()
    }

    /// Remove the entry with `id`, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let index = self.0.iter().position(|entry| entry.id == id)?;
        Some(self.0.remove(index))
    }

    /// Merge `names` into the list by count.
    ///
    /// A name is appended only while it occurs more often in `names` than in
    /// the list, so a list rebuilt from its own names comes out unchanged and
    /// repeated names survive. Returns how many entries were created.
    pub fn seed_names<R, I, S>(&mut self, names: I, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut present: HashMap<String, usize> = HashMap::new();
        for entry in &self.0 {
            *present.entry(entry.name.clone()).or_default() += 1;
        }

        let mut requested: HashMap<String, usize> = HashMap::new();
        let mut added = 0;
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let wanted = requested.entry(name.to_string()).or_default();
            *wanted += 1;
            if *wanted <= present.get(name).copied().unwrap_or(0) {
                continue;
            }
            if self.add(name, rng).is_some() {
                added += 1;
            }
        }
        added
    }

    /// Drop entries that break the list invariants (blank names, repeated ids).
    ///
    /// Returns how many entries were dropped.
    pub fn sanitize(&mut self) -> usize {
        let before = self.0.len();
        let mut seen = HashSet::new();
        self.0.retain(|entry| !entry.name.trim().is_empty() && seen.insert(entry.id.clone()));
        before - self.0.len()
    }

    /// Random selection over the current entries, `None` when the list is empty
    pub fn shuffler(&self) -> Option<Shuffler<'_>> {
        if self.0.is_empty() {
            None
        } else {
            Some(Shuffler { entries: &self.0 })
        }
    }
}

impl From<Vec<Entry>> for EntryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for EntryList {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Uniform picker over a non-empty entry slice
#[derive(Debug, Clone, Copy)]
pub struct Shuffler<'a> {
    entries: &'a [Entry],
}

impl<'a> Shuffler<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pick one entry, every index equally likely
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a Entry {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_sync;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn entry(id: &str, name: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            color: "bg-red-500".to_string(),
            icon: "👤".to_string(),
        }
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut rng = rng();
        let mut list = EntryList::new();

        assert!(list.add("", &mut rng).is_none());
        assert!(list.add("   ", &mut rng).is_none());
        assert!(list.add("\t\n", &mut rng).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_appends_trimmed_name() {
        let mut rng = rng();
        let mut list = EntryList::new();

        let added = list.add("  Alice ", &mut rng).cloned().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(added.name, "Alice");
        assert_eq!(list.as_slice()[0], added);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = rng();
        let mut list = EntryList::new();
        for i in 0..200 {
            list.add(&format!("Name {}", i), &mut rng);
        }
        let ids: HashSet<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut rng = rng();
        let mut list = EntryList::new();
        list.add("Alice", &mut rng);

        assert!(list.remove("no-such-id").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_present_removes_exactly_that_id() {
        let mut rng = rng();
        let mut list = EntryList::new();
        list.add("Alice", &mut rng);
        let bob_id = list.add("Bob", &mut rng).unwrap().id.clone();
        list.add("Charlie", &mut rng);

        let removed = list.remove(&bob_id).unwrap();
        assert_eq!(removed.name, "Bob");
        assert_eq!(list.len(), 2);
        assert!(!list.contains_id(&bob_id));
        assert_eq!(list.names(), vec!["Alice", "Charlie"]);
    }

    #[test]
    fn test_insertion_order_scenario() {
        let mut rng = rng();
        let mut list = EntryList::new();
        let alice_id = list.add("Alice", &mut rng).unwrap().id.clone();
        list.add("Bob", &mut rng);
        list.add("Charlie", &mut rng);
        assert_eq!(list.names(), vec!["Alice", "Bob", "Charlie"]);

        list.remove(&alice_id);
        assert_eq!(list.names(), vec!["Bob", "Charlie"]);
    }

    #[test]
    fn test_shuffler_unavailable_when_empty() {
        let list = EntryList::new();
        assert!(list.shuffler().is_none());
    }

    #[test]
    fn test_pick_returns_member() {
        let mut rng = rng();
        let mut list = EntryList::new();
        for name in ["Alice", "Bob", "Charlie", "Dana"] {
            list.add(name, &mut rng);
        }
        let shuffler = list.shuffler().unwrap();
        assert_eq!(shuffler.len(), 4);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let picked = shuffler.pick(&mut rng);
            assert!(list.contains_id(&picked.id));
            seen.insert(picked.name.clone());
        }
        // 200 uniform draws over 4 entries hit every one
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_seed_names_merges_by_count() {
        let mut rng = rng();
        let mut list = EntryList::new();
        list.add("Alice", &mut rng);

        let added = list.seed_names(["Alice", " Bob ", "", "  ", "Bob", "Alice", "Zoë"], &mut rng);
        assert_eq!(added, 4);
        assert_eq!(list.names(), vec!["Alice", "Bob", "Bob", "Alice", "Zoë"]);
    }

    #[test]
    fn test_seed_names_from_own_url_changes_nothing() {
        let mut rng = rng();
        let mut list = EntryList::new();
        for name in ["Alice", "Alice", "Bob"] {
            list.add(name, &mut rng);
        }
        let before = list.clone();

        let search = url_sync::with_names("", "names", list.names().as_slice());
        let names = url_sync::parse_names(&search, "names").unwrap();
        assert_eq!(list.seed_names(&names, &mut rng), 0);
        assert_eq!(list, before);
    }

    #[test]
    fn test_seed_names_rebuilds_duplicates_from_url() {
        let mut rng = rng();
        let mut sender = EntryList::new();
        for name in ["Alice", "Alice", "Bob"] {
            sender.add(name, &mut rng);
        }

        let search = url_sync::with_names("", "names", sender.names().as_slice());
        assert_eq!(search, "?names=Alice,Alice,Bob");
        let names = url_sync::parse_names(&search, "names").unwrap();

        let mut recipient = EntryList::new();
        assert_eq!(recipient.seed_names(&names, &mut rng), 3);
        assert_eq!(recipient.names(), sender.names());
    }

    #[test]
    fn test_sanitize_drops_blank_and_duplicate_ids() {
        let mut list = EntryList::from(vec![
            entry("1", "Alice"),
            entry("2", "   "),
            entry("1", "Alice again"),
            entry("3", "Bob"),
        ]);
        assert_eq!(list.sanitize(), 2);
        assert_eq!(list.names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = EntryList::from(vec![entry("1", "Alice")]);
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        let back: EntryList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
