use crate::error::PhoneBookError;
use std::str::FromStr;

/// Number of positional fields in every record.
pub const FIELD_COUNT: usize = 4;

/// One of the four positional fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Company,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::FullName,
        Field::Company,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Column heading used when rendering tables.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Company => "Company",
            Field::WorkPhone => "Work phone",
            Field::PersonalPhone => "Personal phone",
        }
    }

    /// The 1-based selector the user types to pick this field.
    pub fn selector(&self) -> usize {
        match self {
            Field::FullName => 1,
            Field::Company => 2,
            Field::WorkPhone => 3,
            Field::PersonalPhone => 4,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a field selector. Only the exact strings `1` through `4` are
/// accepted; surrounding whitespace makes the selector invalid.
impl FromStr for Field {
    type Err = PhoneBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Field::FullName),
            "2" => Ok(Field::Company),
            "3" => Ok(Field::WorkPhone),
            "4" => Ok(Field::PersonalPhone),
            other => Err(PhoneBookError::InvalidField(other.to_string())),
        }
    }
}

/// A single directory entry.
///
/// Rows read from disk may not have exactly four values. Short rows are
/// padded with empty strings; surplus values are kept in `extra` so they
/// survive a save, but they are never displayed, searched or edited. An empty
/// line in the file is a blank record, written back as an empty line until
/// one of its fields is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub full_name: String,
    pub company: String,
    pub work_phone: String,
    pub personal_phone: String,
    pub extra: Vec<String>,
    blank: bool,
}

impl Record {
    pub fn new(
        full_name: impl Into<String>,
        company: impl Into<String>,
        work_phone: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            company: company.into(),
            work_phone: work_phone.into(),
            personal_phone: personal_phone.into(),
            extra: Vec::new(),
            blank: false,
        }
    }

    /// A record read from an empty line.
    pub fn blank() -> Self {
        Self {
            blank: true,
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Builds a record from a raw row of any length.
    pub fn from_row<I, T>(row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut values = row.into_iter().map(Into::<String>::into);
        let mut next = || values.next().unwrap_or_default();
        let mut record = Record::new(next(), next(), next(), next());
        record.extra = values.collect();
        record
    }

    /// The values written to disk, in positional order. Empty for a blank
    /// record.
    pub fn to_row(&self) -> Vec<&str> {
        if self.blank {
            return Vec::new();
        }
        let mut row: Vec<&str> = Field::ALL.iter().map(|f| self.field(*f)).collect();
        row.extend(self.extra.iter().map(String::as_str));
        row
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Company => &self.company,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.blank = false;
        match field {
            Field::FullName => self.full_name = value,
            Field::Company => self.company = value,
            Field::WorkPhone => self.work_phone = value,
            Field::PersonalPhone => self.personal_phone = value,
        }
    }
}
