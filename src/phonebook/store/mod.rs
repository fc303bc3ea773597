//! # Storage Layer
//!
//! This module defines the storage abstraction for the phone book. The
//! [`DataStore`] trait lets the record store work against different backends.
//!
//! ## Design Rationale
//!
//! Storage sits behind a trait so that:
//! - command logic can be **tested** with `InMemoryStore` (no filesystem needed)
//! - persistence failures can be **simulated** to exercise the error paths
//!
//! ## Implementations
//!
//! - [`fs::CsvFileStore`]: Production storage in a single delimited text file
//!   - Comma-separated, `|` as the quote character, minimal quoting
//!   - Whole-file read on load, whole-file atomic rewrite on save
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves
//!
//! ## Persistence Contract
//!
//! The store never writes incrementally. Every save receives the complete
//! record sequence and replaces whatever was persisted before. A failed save
//! leaves the previous contents intact but does NOT roll back the caller's
//! in-memory state.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Read every record, in row order.
    fn load(&mut self) -> Result<Vec<Record>>;

    /// Replace the persisted contents with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Human-readable description of where records live, for logs and messages.
    fn location(&self) -> String;
}
