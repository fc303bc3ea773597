//! # API Facade
//!
//! [`PhoneBookApi`] is the record store: it owns the ordered record sequence
//! and the storage backend, and it is the single entry point for every
//! operation regardless of the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the full record set once, at construction
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (typed record numbers → storage indexes)
//! - **Persists** the full record set after every mutation (via the commands)
//!
//! ## What the API Does NOT Do
//!
//! - **Prompting or retrying**: callers loop on input errors themselves
//! - **I/O to the terminal**: results are returned as `CmdResult`, and listing
//!   lines are handed to a caller-supplied [`Pager`]
//!
//! ## Failure Semantics
//!
//! If loading fails, no API value exists. If a save fails after an edit or
//! append, the error is returned but the in-memory change is kept, so memory
//! and disk disagree until the next successful save.

use crate::commands;
use crate::error::{PhoneBookError, Result};
use crate::index::{DisplayRecord, StorageIndex};
use crate::model::{Field, Record};
use crate::store::DataStore;

pub struct PhoneBookApi<S: DataStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: DataStore> PhoneBookApi<S> {
    /// Loads every record from `store`.
    pub fn open(mut store: S) -> Result<Self> {
        let records = store.load()?;
        log::info!("opened {} ({} records)", store.location(), records.len());
        Ok(Self { store, records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_paged<P: Pager>(&self, page_size: usize, pager: &mut P) -> Result<ListSummary> {
        commands::list::run(&self.records, page_size, pager)
    }

    pub fn search(&self, field: Field, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, field, query)
    }

    pub fn resolve_record(&self, input: &str) -> Result<StorageIndex> {
        commands::edit::resolve(&self.records, input)
    }

    pub fn display_record(&self, index: StorageIndex) -> Result<DisplayRecord> {
        let record = self
            .records
            .get(index.0)
            .ok_or_else(|| PhoneBookError::RecordNotFound((index.0 + 1).to_string()))?;
        Ok(DisplayRecord {
            index: index.into(),
            record: record.clone(),
        })
    }

    pub fn edit_record(
        &mut self,
        index: StorageIndex,
        field: Field,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.records, &mut self.store, index, field, value)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.records, &mut self.store, record)
    }
}

pub use crate::commands::list::{Continuation, ListSummary, Pager};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api(fixture: StoreFixture) -> PhoneBookApi<InMemoryStore> {
        PhoneBookApi::open(fixture.store).unwrap()
    }

    #[test]
    fn open_loads_all_records() {
        let api = api(StoreFixture::new().with_header().with_contacts(3));
        assert_eq!(api.records().len(), 4);
        assert_eq!(api.records()[0].full_name, "Full name");
    }

    #[test]
    fn add_then_edit_round_trips_through_store() {
        let mut api = api(StoreFixture::new().with_contacts(1));
        api.add_record(Record::new("New", "Co", "1", "2")).unwrap();
        assert_eq!(api.records().len(), 2);

        let index = api.resolve_record("2").unwrap();
        api.edit_record(index, Field::Company, "Other").unwrap();

        assert_eq!(api.records()[1].company, "other");
        assert_eq!(api.store().persisted(), api.records());
        assert_eq!(api.store().save_count(), 2);
    }

    #[test]
    fn resolve_rejects_len_plus_one() {
        let api = api(StoreFixture::new().with_contacts(5));
        assert!(matches!(
            api.resolve_record("6"),
            Err(PhoneBookError::RecordNotFound(_))
        ));
        assert!(api.resolve_record("5").is_ok());
    }

    #[test]
    fn display_record_uses_one_based_index() {
        let api = api(StoreFixture::new().with_contacts(2));
        let shown = api.display_record(StorageIndex(1)).unwrap();
        assert_eq!(shown.index, DisplayIndex(2));
        assert_eq!(shown.record.full_name, "Contact 2");
    }

    #[test]
    fn search_is_read_only() {
        let api = api(StoreFixture::new().with_contacts(3));
        let result = api.search(Field::FullName, "contact").unwrap();
        assert_eq!(result.listed_records.len(), 3);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn save_failure_surfaces_and_memory_diverges() {
        let mut api = api(StoreFixture::new().with_contacts(1).failing_saves());
        assert!(api.add_record(Record::new("a", "b", "c", "d")).is_err());
        assert_eq!(api.records().len(), 2);
        assert_eq!(api.store().persisted().len(), 1);
    }
}
