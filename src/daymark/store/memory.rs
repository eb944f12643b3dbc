use super::{EventStore, SaveStatus};
use crate::model::{DateKey, DayEntry};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<DateKey, DayEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryStore {
    fn get(&self, key: &DateKey) -> Option<DayEntry> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: DateKey, entry: DayEntry) -> SaveStatus {
        self.entries.insert(key, entry);
        SaveStatus::Skipped
    }

    fn remove(&mut self, key: &DateKey) -> (bool, SaveStatus) {
        (self.entries.remove(key).is_some(), SaveStatus::Skipped)
    }

    fn remove_where<P>(&mut self, mut pred: P) -> (usize, SaveStatus)
    where
        P: FnMut(&DateKey) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|key, _| !pred(key));
        (before - self.entries.len(), SaveStatus::Skipped)
    }

    fn keys(&self) -> Vec<DateKey> {
        self.entries.keys().copied().collect()
    }

    fn entries(&self) -> Vec<(DateKey, DayEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (*key, entry.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, year: i32, month: u32, day: u32, choice: &str) -> Self {
            self.store.set(
                DateKey::new(year, month, day),
                DayEntry::new(choice, ""),
            );
            self
        }

        pub fn with_noted_entry(
            mut self,
            year: i32,
            month: u32,
            day: u32,
            choice: &str,
            note: &str,
        ) -> Self {
            self.store
                .set(DateKey::new(year, month, day), DayEntry::new(choice, note));
            self
        }

        pub fn with_month_filled(mut self, year: i32, month: u32, days: &[u32]) -> Self {
            for &day in days {
                let choice = format!("Choice {}", day);
                self.store
                    .set(DateKey::new(year, month, day), DayEntry::new(choice, ""));
            }
            self
        }
    }
}
