//! # Storage Layer
//!
//! This module defines the storage abstraction for daymark. The
//! [`EventStore`] trait holds the authoritative date → entry map for the
//! lifetime of the process.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage backed by a single `events.json`
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Persistence contract
//!
//! `FileStore` rewrites the whole map to its backing file after every
//! mutation (overwrite, not append). Persistence trouble is *contained*
//! here: it is reported, never raised.
//!
//! - Loading is best-effort. A missing file is an empty store; an
//!   unreadable or malformed file is discarded and the store starts empty.
//!   [`LoadOutcome`] tells the caller which of these happened.
//! - Every mutating operation returns a [`SaveStatus`]. On `Failed` the
//!   in-memory map keeps the mutation and remains authoritative for the
//!   session; callers decide whether to warn the user.
//!
//! ## Storage format
//!
//! ```text
//! events.json      # { "2024-3-7": { "choice": "...", "note": "..." }, ... }
//! ```
//!
//! Legacy files may hold a bare string instead of the record; see
//! [`crate::model`] for the upgrade rules.

use crate::model::{DateKey, DayEntry};

pub mod fs;
pub mod memory;

/// How a load attempt went. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed; holds the number of entries loaded.
    Loaded(usize),
    /// No backing file yet; the store starts empty.
    NoFile,
    /// File was unreadable or malformed; its content was discarded and the
    /// store starts empty.
    Discarded(String),
}

/// Result of the write that follows every mutation. A `Failed` save leaves
/// the in-memory map mutated and authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// Backend has nothing to persist (in-memory store).
    Skipped,
    Failed(String),
}

impl SaveStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveStatus::Failed(_))
    }
}

/// Abstract interface for the day-entry map.
///
/// Lookups are pure; mutations persist eagerly and report the persistence
/// outcome instead of propagating it.
pub trait EventStore {
    /// Entry for a date, if any
    fn get(&self, key: &DateKey) -> Option<DayEntry>;

    /// Insert or overwrite the entry for a date (last write wins)
    fn set(&mut self, key: DateKey, entry: DayEntry) -> SaveStatus;

    /// Remove a single date's entry; the flag says whether one existed
    fn remove(&mut self, key: &DateKey) -> (bool, SaveStatus);

    /// Remove every entry whose key matches the predicate; returns the
    /// number removed
    fn remove_where<P>(&mut self, pred: P) -> (usize, SaveStatus)
    where
        P: FnMut(&DateKey) -> bool;

    /// All keys currently assigned, in no particular order
    fn keys(&self) -> Vec<DateKey>;

    /// All (key, entry) pairs, in no particular order
    fn entries(&self) -> Vec<(DateKey, DayEntry)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
