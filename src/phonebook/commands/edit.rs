use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhoneBookError, Result};
use crate::index::{self, DisplayIndex, DisplayRecord, StorageIndex};
use crate::model::{Field, Record};
use crate::store::DataStore;

/// Turns a typed record number into a storage index.
///
/// Fails with `InvalidRecordNumber` for anything that is not all digits, and
/// with `RecordNotFound` when the number is 0 or past the last record.
pub fn resolve(records: &[Record], input: &str) -> Result<StorageIndex> {
    let display: DisplayIndex = input.parse()?;
    index::resolve(records.len(), display)
}

/// Stored form of an edited value: trimmed and lowercased.
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn run<S: DataStore>(
    records: &mut [Record],
    store: &mut S,
    index: StorageIndex,
    field: Field,
    value: &str,
) -> Result<CmdResult> {
    let display = DisplayIndex::from(index);
    let record = records
        .get_mut(index.0)
        .ok_or_else(|| PhoneBookError::RecordNotFound(display.to_string()))?;
    record.set_field(field, normalize_value(value));
    let updated = DisplayRecord {
        index: display,
        record: record.clone(),
    };
    log::debug!("edited record {} field {}", display, field.selector());

    // The in-memory edit stands even if this fails
    store.save(records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record updated"));
    Ok(result.with_affected_records(vec![updated]))
}
