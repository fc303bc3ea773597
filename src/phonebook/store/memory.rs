use super::DataStore;
use crate::error::{PhoneBookError, Result};
use crate::model::Record;
use std::io;

/// Keeps records in memory. Saves replace the held snapshot, so tests can
/// compare what was "persisted" against the caller's in-memory view.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    persisted: Vec<Record>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            persisted: records,
            ..Self::default()
        }
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn persisted(&self) -> &[Record] {
        &self.persisted
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        Ok(self.persisted.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_saves {
            return Err(PhoneBookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            )));
        }
        self.persisted = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_header(mut self) -> Self {
            self.store.persisted.push(Record::new(
                "Full name",
                "Company",
                "Work phone",
                "Personal phone",
            ));
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            let start = self.store.persisted.len();
            for i in start..start + count {
                self.store.persisted.push(Record::new(
                    format!("Contact {}", i + 1),
                    format!("Company {}", i + 1),
                    format!("555-{:04}", i + 1),
                    format!("777-{:04}", i + 1),
                ));
            }
            self
        }

        pub fn with_contact(mut self, record: Record) -> Self {
            self.store.persisted.push(record);
            self
        }

        pub fn failing_saves(mut self) -> Self {
            self.store = self.store.failing_saves();
            self
        }
    }
}
