//! # Phonebook Architecture
//!
//! Phonebook is a file-backed contact directory. The library holds the record
//! store and its operations; the `phonebook` binary is a thin interactive
//! client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, input retry loops, colors            │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory records and the storage backend       │
//! │  - Resolves typed record numbers into storage indexes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, search, edit, add                                  │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - CsvFileStore (production), InMemoryStore (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record numbers
//!
//! Users see and type 1-based record numbers; storage is 0-based. The two are
//! separate types, see [`index`]. The first row of the file is an ordinary
//! record, even when it holds column names.
//!
//! ## Persistence
//!
//! The whole file is read once when the store is opened and rewritten in full
//! (atomically) after every edit or append.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and record store
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record` and `Field`
//! - [`index`]: Display/storage index types
//! - [`format`]: Fixed-width table rendering
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod model;
pub mod store;
