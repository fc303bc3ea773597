use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_records, DisplayRecord};
use crate::model::{Field, Record};

/// Case-insensitive substring search on one field, in storage order.
///
/// The query is trimmed and lowercased; field values are only lowercased.
pub fn run(records: &[Record], field: Field, query: &str) -> Result<CmdResult> {
    let needle = query.trim().to_lowercase();

    let matches: Vec<DisplayRecord> = index_records(records)
        .filter(|dr| dr.record.field(field).to_lowercase().contains(&needle))
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Records found: {}",
        matches.len()
    )));
    Ok(result.with_listed_records(matches))
}
