//! # Daymark Architecture
//!
//! Daymark is a **UI-agnostic day-event store** with a CLI client. The
//! library holds the authoritative map of calendar dates to `{choice, note}`
//! entries and keeps a durable copy in a single `events.json`; the binary is
//! just one shell over it.
//!
//! ## Layers
//!
//! ```text
//! CLI Layer (main.rs + args.rs)
//!   - Parses arguments, renders the month grid, colors output
//!   - The ONLY place that knows about stdout/stderr/exit codes
//!            │
//! API Layer (api.rs)
//!   - Thin facade over commands, generic over the store backend
//!            │
//! Command Layer (commands/*.rs)
//!   - One module per operation, returns structured `CmdResult`s
//!            │
//! Storage Layer (store/)
//!   - `EventStore` trait; `FileStore` (production), `InMemoryStore` (tests)
//! ```
//!
//! ## Persistence policy
//!
//! The store favors availability over surfacing corruption: loading a
//! missing or malformed data file yields an empty store plus a
//! [`store::LoadOutcome`] the shell may report, and every mutation rewrites
//! the whole file and returns a [`store::SaveStatus`] instead of an error.
//! A failed save leaves the in-memory map authoritative for the session.
//! See the `store` module docs for the full contract.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`DateKey`, `DayEntry`) and the legacy
//!   on-disk upgrade path
//! - [`calendar`]: month-grid arithmetic and month-name parsing
//! - [`config`]: the configurable choice-label list
//! - [`error`]: error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
