//! # Record Addressing
//!
//! Records are addressed two ways, and the two are kept as distinct types so
//! they cannot be mixed up:
//!
//! - [`DisplayIndex`]: the 1-based number shown in listings and typed by the user.
//! - [`StorageIndex`]: the 0-based position in memory, which is also the row
//!   position in the backing file.
//!
//! User input is parsed into a `DisplayIndex`, converted once into a
//! `StorageIndex` by [`resolve`] (which checks bounds), and converted back once
//! with [`DisplayIndex::from`] when something is shown.

use crate::error::{PhoneBookError, Result};
use crate::model::Record;
use std::str::FromStr;

/// A user-facing, 1-based record number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

/// A 0-based position in the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageIndex(pub usize);

impl From<StorageIndex> for DisplayIndex {
    fn from(index: StorageIndex) -> Self {
        DisplayIndex(index.0 + 1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a record number typed by the user.
///
/// The input must be non-empty and consist only of ASCII digits, otherwise it
/// is an [`PhoneBookError::InvalidRecordNumber`]. A number too large to
/// represent can't address any record and is reported as
/// [`PhoneBookError::RecordNotFound`].
impl FromStr for DisplayIndex {
    type Err = PhoneBookError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneBookError::InvalidRecordNumber(s.to_string()));
        }
        s.parse::<usize>()
            .map(DisplayIndex)
            .map_err(|_| PhoneBookError::RecordNotFound(s.to_string()))
    }
}

/// Converts a display index into a storage index, checking that it addresses
/// an existing record (`1 <= index <= len`).
pub fn resolve(len: usize, index: DisplayIndex) -> Result<StorageIndex> {
    if index.0 == 0 || index.0 > len {
        return Err(PhoneBookError::RecordNotFound(index.to_string()));
    }
    Ok(StorageIndex(index.0 - 1))
}

/// A record paired with the number it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub record: Record,
}

/// Pairs every record with its display index, in storage order.
pub fn index_records(records: &[Record]) -> impl Iterator<Item = DisplayRecord> + '_ {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: StorageIndex(i).into(),
            record: record.clone(),
        })
}
