//! # API Facade
//!
//! [`DaymarkApi`] is a thin facade over the command layer: it dispatches,
//! carries the config, and returns structured `Result<CmdResult>` values.
//! No business logic, no terminal I/O — any shell (this repo's CLI, a GUI,
//! tests) talks to the store through here.
//!
//! Generic over [`EventStore`] so tests can run against `InMemoryStore`
//! while production uses `FileStore`.

use crate::commands;
use crate::config::DaymarkConfig;
use crate::error::Result;
use crate::model::DateKey;
use crate::store::EventStore;

pub struct DaymarkApi<S: EventStore> {
    store: S,
    config: DaymarkConfig,
}

impl<S: EventStore> DaymarkApi<S> {
    pub fn new(store: S, config: DaymarkConfig) -> Self {
        Self { store, config }
    }

    /// Assign a choice and note to a day. The choice is not checked against
    /// the configured list; the enumeration is advisory.
    pub fn assign(&mut self, key: DateKey, choice: String, note: String) -> Result<commands::CmdResult> {
        commands::assign::run(&mut self.store, key, choice, note)
    }

    pub fn unassign(&mut self, key: DateKey) -> Result<commands::CmdResult> {
        commands::unassign::run(&mut self.store, key)
    }

    pub fn day(&self, key: DateKey) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, key)
    }

    pub fn month(&self, year: i32, month: u32) -> Result<commands::CmdResult> {
        commands::month::run(&self.store, year, month)
    }

    pub fn clear_month(
        &mut self,
        year: i32,
        month: u32,
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, year, month, skip_confirm)
    }

    pub fn choices(&self) -> Result<commands::CmdResult> {
        commands::choices::run(&self.config)
    }

    pub fn config(&self) -> &DaymarkConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, DayRecord, MessageLevel};
