use super::print::{menu_entry, print_messages, print_records};
use super::prompt::Prompter;
use phonebook::api::{CmdMessage, PhoneBookApi};
use phonebook::error::{PhoneBookError, Result};
use phonebook::model::{Field, Record};
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Edit,
    Search,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "list" | "l" => Some(MenuCommand::List),
            "add" | "a" => Some(MenuCommand::Add),
            "edit" | "e" => Some(MenuCommand::Edit),
            "search" | "s" => Some(MenuCommand::Search),
            "exit" | "x" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

fn menu_prompt() -> String {
    [
        "Enter a command:".to_string(),
        menu_entry("list", 'l', "show records page by page"),
        menu_entry("edit", 'e', "edit a record"),
        menu_entry("add", 'a', "add a new record"),
        menu_entry("search", 's', "search records"),
        menu_entry("exit", 'x', "quit"),
        String::new(),
    ]
    .join("\n")
}

fn field_prompt(title: &str) -> String {
    let mut prompt = format!("{}\n", title);
    for field in Field::ALL {
        prompt.push_str(&format!("    {} - {}\n", field.selector(), field.label()));
    }
    prompt
}

const INVALID_SEARCH_FIELD: &str = "Invalid search field!";
const INVALID_EDIT_FIELD: &str = "Invalid field selection!";
const INVALID_RECORD_NUMBER: &str = "Invalid input!";
const NO_SUCH_RECORD: &str = "No such record";

/// The interactive menu loop over one open phone book.
pub struct Session<S: DataStore, R, W> {
    api: PhoneBookApi<S>,
    io: Prompter<R, W>,
    page_size: usize,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: PhoneBookApi<S>, io: Prompter<R, W>, page_size: usize) -> Self {
        Self { api, io, page_size }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (PhoneBookApi<S>, Prompter<R, W>) {
        (self.api, self.io)
    }

    /// Runs commands until `exit` or end of input. Unknown commands are ignored.
    pub fn run(&mut self) -> Result<()> {
        let prompt = menu_prompt();
        while let Some(input) = self.io.ask(&prompt)? {
            match MenuCommand::parse(&input) {
                Some(MenuCommand::List) => self.handle_list()?,
                Some(MenuCommand::Add) => self.handle_add()?,
                Some(MenuCommand::Edit) => self.handle_edit()?,
                Some(MenuCommand::Search) => self.handle_search()?,
                Some(MenuCommand::Exit) => break,
                None => log::debug!("ignoring unknown command {:?}", input),
            }
        }
        Ok(())
    }

    fn ask_field(&mut self, title: &str, error_message: &str) -> Result<Field> {
        let prompt = field_prompt(title);
        let field = self
            .io
            .ask_until(&prompt, error_message, |answer| answer.parse::<Field>().ok())?;
        Ok(field)
    }

    fn handle_list(&mut self) -> Result<()> {
        let summary = self.api.list_paged(self.page_size, &mut self.io)?;
        log::debug!(
            "listed {} rows ({} page breaks, stopped: {})",
            summary.rows,
            summary.page_breaks,
            summary.stopped
        );
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        let field = self.ask_field("Choose the field to search:", INVALID_SEARCH_FIELD)?;
        let query = self.io.ask_required("Enter the value to search for: ")?;

        let result = self.api.search(field, &query)?;
        print_messages(self.io.output(), &result.messages)?;
        if !result.listed_records.is_empty() {
            print_records(self.io.output(), &result.listed_records)?;
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        let api = &self.api;
        let index = self
            .io
            .ask_with("Enter the number of the record to edit: ", |input| {
                api.resolve_record(input).map_err(|e| match e {
                    PhoneBookError::InvalidRecordNumber(_) => INVALID_RECORD_NUMBER.to_string(),
                    _ => NO_SUCH_RECORD.to_string(),
                })
            })?;

        let shown = self.api.display_record(index)?;
        print_records(self.io.output(), &[shown])?;

        let field = self.ask_field("Choose the field to edit:", INVALID_EDIT_FIELD)?;
        let value = self.io.ask_required("Enter the new value: ")?;

        match self.api.edit_record(index, field, &value) {
            Ok(result) => print_messages(self.io.output(), &result.messages)?,
            Err(e) => self.report_failure(e)?,
        }
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        let full_name = self.io.ask_required("Enter full name: ")?;
        let company = self.io.ask_required("Enter company: ")?;
        let work_phone = self.io.ask_required("Enter work phone: ")?;
        let personal_phone = self.io.ask_required("Enter personal phone: ")?;

        let record = Record::new(full_name, company, work_phone, personal_phone);
        match self.api.add_record(record) {
            Ok(result) => print_messages(self.io.output(), &result.messages)?,
            Err(e) => self.report_failure(e)?,
        }
        Ok(())
    }

    /// Save failures are reported and the session goes on; the change is
    /// still held in memory.
    fn report_failure(&mut self, error: PhoneBookError) -> Result<()> {
        if error.is_input_error() {
            return Err(error);
        }
        log::error!("failed to save {}: {}", self.api.store().location(), error);
        let message = CmdMessage::error(format!(
            "Could not save changes: {}. The change is kept in memory only.",
            error
        ));
        print_messages(self.io.output(), &[message])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestSession = Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

    fn contacts(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| Record::new(format!("Contact {i}"), format!("Company {i}"), "555", "777"))
            .collect()
    }

    fn session(store: InMemoryStore, input: &str) -> TestSession {
        let api = PhoneBookApi::open(store).unwrap();
        let io = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(api, io, 20)
    }

    fn finish(session: TestSession) -> (PhoneBookApi<InMemoryStore>, String) {
        let (api, io) = session.into_parts();
        (api, String::from_utf8(io.into_output()).unwrap())
    }

    #[test]
    fn parses_long_and_short_commands() {
        assert_eq!(MenuCommand::parse("list"), Some(MenuCommand::List));
        assert_eq!(MenuCommand::parse("s"), Some(MenuCommand::Search));
        assert_eq!(MenuCommand::parse("x"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("LIST"), None);
        assert_eq!(MenuCommand::parse(" l"), None);
    }

    #[test]
    fn invalid_search_field_is_rejected_once_then_used() {
        let store = InMemoryStore::with_records(contacts(3));
        let mut s = session(store, "s\n5\n2\ncompany 2\nx\n");
        s.run().unwrap();
        let (_, out) = finish(s);

        assert_eq!(out.matches(INVALID_SEARCH_FIELD).count(), 1);
        assert!(out.contains("Records found: 1"));
        assert!(out.contains("Contact 2"));
    }

    #[test]
    fn search_without_matches_prints_only_the_count() {
        let store = InMemoryStore::with_records(contacts(3));
        let mut s = session(store, "s\n1\nnobody\nx\n");
        s.run().unwrap();
        let (_, out) = finish(s);

        assert!(out.contains("Records found: 0"));
        assert!(!out.contains("Full name  "));
    }

    #[test]
    fn list_stops_at_sentinel() {
        let store = InMemoryStore::with_records(contacts(41));
        let mut s = session(store, "l\nx\nx\n");
        s.run().unwrap();
        let (_, out) = finish(s);

        let rows = out.lines().filter(|l| l.contains("Contact ")).count();
        assert_eq!(rows, 20);
        assert!(out.contains("Contact 20 "));
        assert!(!out.contains("Contact 21 "));
    }

    #[test]
    fn list_runs_to_the_end_without_sentinel() {
        let store = InMemoryStore::with_records(contacts(41));
        let mut s = session(store, "l\n\n\nx\n");
        s.run().unwrap();
        let (_, out) = finish(s);

        let rows = out.lines().filter(|l| l.contains("Contact ")).count();
        assert_eq!(rows, 41);
        assert_eq!(out.matches("or x to stop").count(), 2);
    }

    #[test]
    fn edit_retries_bad_numbers_then_updates() {
        let store = InMemoryStore::with_records(contacts(3));
        let mut s = session(store, "e\nabc\n0\n4\n2\n9\n2\n  NEW Co \nx\n");
        s.run().unwrap();
        let (api, out) = finish(s);

        assert_eq!(out.matches(INVALID_RECORD_NUMBER).count(), 1);
        assert_eq!(out.matches(NO_SUCH_RECORD).count(), 2);
        assert_eq!(out.matches(INVALID_EDIT_FIELD).count(), 1);
        assert!(out.contains("Record updated"));
        assert_eq!(api.records()[1].company, "new co");
        assert_eq!(api.store().persisted()[1].company, "new co");
    }

    #[test]
    fn edit_rejects_len_plus_one() {
        let store = InMemoryStore::with_records(contacts(5));
        let mut s = session(store, "e\n6\n5\n1\nlast\nx\n");
        s.run().unwrap();
        let (api, out) = finish(s);

        assert_eq!(out.matches(NO_SUCH_RECORD).count(), 1);
        assert_eq!(api.records()[4].full_name, "last");
        assert_eq!(api.records().len(), 5);
    }

    #[test]
    fn add_appends_and_persists() {
        let store = InMemoryStore::with_records(contacts(2));
        let mut s = session(store, "a\nDee Dee\nAcme\n555-0\n\nx\n");
        s.run().unwrap();
        let (api, out) = finish(s);

        assert!(out.contains("Record added"));
        assert_eq!(api.records().len(), 3);
        assert_eq!(api.records()[2], Record::new("Dee Dee", "Acme", "555-0", ""));
        assert_eq!(api.store().persisted().len(), 3);
    }

    #[test]
    fn save_failure_is_reported_and_session_continues() {
        let store = InMemoryStore::with_records(contacts(1)).failing_saves();
        let mut s = session(store, "a\nA\nB\nC\nD\ns\n1\ncontact\nx\n");
        s.run().unwrap();
        let (api, out) = finish(s);

        assert!(out.contains("Could not save changes"));
        assert!(out.contains("Records found: 1"));
        assert_eq!(api.records().len(), 2);
        assert_eq!(api.store().persisted().len(), 1);
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let store = InMemoryStore::with_records(contacts(1));
        let mut s = session(store, "bogus\n\nx\n");
        s.run().unwrap();
        let (api, out) = finish(s);
        assert_eq!(api.store().save_count(), 0);
        assert_eq!(out.matches("Enter a command:").count(), 3);
    }

    #[test]
    fn end_of_input_at_menu_exits_cleanly() {
        let mut s = session(InMemoryStore::new(), "");
        assert!(s.run().is_ok());
    }

    #[test]
    fn end_of_input_mid_operation_is_an_error() {
        let mut s = session(InMemoryStore::new(), "a\nonly name\n");
        assert!(s.run().is_err());
    }
}
