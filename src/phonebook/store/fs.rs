use super::DataStore;
use crate::error::{PhoneBookError, Result};
use crate::model::Record;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'|';
const BOM: &str = "\u{feff}";

/// Line ending used when writing rows back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    CrLf,
    Lf,
}

impl LineEnding {
    /// The ending that opens a run of line break bytes. A lone `\r` is
    /// written back as CRLF.
    fn from_run(run: &[u8]) -> Option<Self> {
        match run {
            [b'\n', ..] => Some(LineEnding::Lf),
            [b'\r', ..] => Some(LineEnding::CrLf),
            _ => None,
        }
    }

    fn terminator(self) -> Terminator {
        match self {
            LineEnding::CrLf => Terminator::CRLF,
            LineEnding::Lf => Terminator::Any(b'\n'),
        }
    }

    fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::CrLf => b"\r\n",
            LineEnding::Lf => b"\n",
        }
    }
}

pub struct CsvFileStore {
    path: PathBuf,
    line_ending: LineEnding,
    bom: bool,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            line_ending: LineEnding::CrLf,
            bom: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "phonebook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

/// Rows read from a phone book file, plus the line ending its rows use.
#[derive(Debug)]
pub struct ParsedBook {
    pub records: Vec<Record>,
    pub line_ending: LineEnding,
}

fn is_break(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

/// The run of `\r`/`\n` bytes touching `pos`.
///
/// Row content never ends in a raw line break (a quoted value ends with the
/// quote char), so walking back from the reader's position stops at the end
/// of the row just read.
fn break_run_at(bytes: &[u8], pos: usize) -> &[u8] {
    let mut start = pos.min(bytes.len());
    while start > 0 && is_break(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = start;
    while end < bytes.len() && is_break(bytes[end]) {
        end += 1;
    }
    &bytes[start..end]
}

/// Counts line breaks in a run; `\r\n` is one break.
fn count_breaks(run: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < run.len() {
        i += if run[i..].starts_with(b"\r\n") { 2 } else { 1 };
        count += 1;
    }
    count
}

fn push_blank_rows(records: &mut Vec<Record>, count: usize) {
    records.extend(std::iter::repeat_with(Record::blank).take(count));
}

/// Parses every row of `content`.
///
/// The csv reader skips empty lines, so they are recovered from the line
/// breaks between rows and kept as blank records in file order.
pub fn parse_book(content: &str) -> Result<ParsedBook> {
    let bytes = content.as_bytes();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .flexible(true)
        .from_reader(bytes);

    let leading = break_run_at(bytes, 0);
    let mut line_ending = LineEnding::from_run(leading);
    let mut records = Vec::new();
    push_blank_rows(&mut records, count_breaks(leading));

    let mut row = StringRecord::new();
    while reader.read_record(&mut row).map_err(PhoneBookError::Csv)? {
        records.push(Record::from_row(row.iter()));

        let run = break_run_at(bytes, reader.position().byte() as usize);
        line_ending = line_ending.or_else(|| LineEnding::from_run(run));
        // the first break terminates the row itself
        push_blank_rows(&mut records, count_breaks(run).saturating_sub(1));
    }

    Ok(ParsedBook {
        records,
        line_ending: line_ending.unwrap_or(LineEnding::CrLf),
    })
}

pub fn serialize_records(records: &[Record], line_ending: LineEnding) -> Result<Vec<u8>> {
    let builder = {
        let mut builder = WriterBuilder::new();
        builder
            .has_headers(false)
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .quote_style(QuoteStyle::Necessary)
            .terminator(line_ending.terminator())
            .flexible(true);
        builder
    };

    let mut out = Vec::new();
    for record in records {
        let row = record.to_row();
        if row.is_empty() {
            out.extend_from_slice(line_ending.as_bytes());
            continue;
        }
        let mut writer = builder.from_writer(&mut out);
        writer.write_record(row).map_err(PhoneBookError::Csv)?;
        writer.flush().map_err(PhoneBookError::Io)?;
    }
    Ok(out)
}

impl DataStore for CsvFileStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(PhoneBookError::Io)?;
        self.bom = content.starts_with(BOM);
        let body = content.strip_prefix(BOM).unwrap_or(content.as_str());
        let ParsedBook {
            records,
            line_ending,
        } = parse_book(body)?;
        self.line_ending = line_ending;
        log::debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let mut bytes = Vec::new();
        if self.bom {
            bytes.extend_from_slice(BOM.as_bytes());
        }
        bytes.extend(serialize_records(records, self.line_ending)?);

        // Atomic write: never truncate the real file if the write fails midway
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PhoneBookError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PhoneBookError::Io(e));
        }

        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
