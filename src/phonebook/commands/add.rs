use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayRecord, StorageIndex};
use crate::model::Record;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    records: &mut Vec<Record>,
    store: &mut S,
    record: Record,
) -> Result<CmdResult> {
    let index = StorageIndex(records.len());
    records.push(record.clone());
    log::debug!("appended record at storage index {}", index.0);

    store.save(records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Record added"));
    Ok(result.with_affected_records(vec![DisplayRecord {
        index: index.into(),
        record,
    }]))
}
