//! Fixed-width table rendering shared by listing, search and edit.
//!
//! Columns are left-aligned and padded to their terminal display width. Values
//! wider than their column are printed in full, pushing later columns right.

use crate::index::DisplayIndex;
use crate::model::{Field, Record};
use unicode_width::UnicodeWidthStr;

pub const INDEX_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 40;
pub const COMPANY_WIDTH: usize = 40;
pub const PHONE_WIDTH: usize = 20;

const INDEX_LABEL: &str = "#";

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_line(index: &str, columns: [&str; 4]) -> String {
    let [name, company, work, personal] = columns;
    format!(
        "{} {}  {}  {} {}",
        pad(index, INDEX_WIDTH),
        pad(name, NAME_WIDTH),
        pad(company, COMPANY_WIDTH),
        pad(work, PHONE_WIDTH),
        pad(personal, PHONE_WIDTH),
    )
}

/// The column heading line.
pub fn header_line() -> String {
    format_line(INDEX_LABEL, Field::ALL.map(|f| f.label()))
}

pub fn record_line(index: DisplayIndex, record: &Record) -> String {
    format_line(&index.to_string(), Field::ALL.map(|f| record.field(f)))
}
