use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneBookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record number: {0:?}")]
    InvalidRecordNumber(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid field selector: {0:?}")]
    InvalidField(String),

    #[error("Invalid file name: {}", .0.display())]
    InvalidFile(std::path::PathBuf),
}

impl PhoneBookError {
    /// True for errors caused by bad user input, which callers re-prompt on.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PhoneBookError::InvalidRecordNumber(_)
                | PhoneBookError::RecordNotFound(_)
                | PhoneBookError::InvalidField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhoneBookError>;
