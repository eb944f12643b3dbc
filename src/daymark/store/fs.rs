use super::{EventStore, LoadOutcome, SaveStatus};
use crate::model::{DateKey, DayEntry};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole map lives in one `events.json`, rewritten
/// after every mutation.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<DateKey, DayEntry>,
}

impl FileStore {
    /// Open a store against the given backing file, loading whatever is
    /// there. Never fails: a missing or corrupt file just means an empty
    /// store, and the returned [`LoadOutcome`] says which case applied.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        let mut store = Self {
            path: path.into(),
            entries: HashMap::new(),
        };
        let outcome = store.reload();
        (store, outcome)
    }

    /// Re-read the backing file, replacing the in-memory map.
    pub fn reload(&mut self) -> LoadOutcome {
        self.entries.clear();

        if !self.path.exists() {
            return LoadOutcome::NoFile;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => return LoadOutcome::Discarded(e.to_string()),
        };

        match serde_json::from_str::<HashMap<DateKey, DayEntry>>(&content) {
            Ok(map) => {
                let count = map.len();
                self.entries = map;
                LoadOutcome::Loaded(count)
            }
            Err(e) => LoadOutcome::Discarded(e.to_string()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> SaveStatus {
        let content = match serde_json::to_string_pretty(&self.entries) {
            Ok(content) => content,
            Err(e) => return SaveStatus::Failed(e.to_string()),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    return SaveStatus::Failed(e.to_string());
                }
            }
        }

        match fs::write(&self.path, content) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => SaveStatus::Failed(e.to_string()),
        }
    }
}

impl EventStore for FileStore {
    fn get(&self, key: &DateKey) -> Option<DayEntry> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: DateKey, entry: DayEntry) -> SaveStatus {
        self.entries.insert(key, entry);
        self.persist()
    }

    fn remove(&mut self, key: &DateKey) -> (bool, SaveStatus) {
        if self.entries.remove(key).is_none() {
            // Nothing changed, nothing to rewrite
            return (false, SaveStatus::Skipped);
        }
        (true, self.persist())
    }

    fn remove_where<P>(&mut self, mut pred: P) -> (usize, SaveStatus)
    where
        P: FnMut(&DateKey) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|key, _| !pred(key));
        let removed = before - self.entries.len();
        if removed == 0 {
            return (0, SaveStatus::Skipped);
        }
        (removed, self.persist())
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
