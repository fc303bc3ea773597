use crate::index::DisplayRecord;

pub mod add;
pub mod edit;
pub mod list;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<DisplayRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }
}
