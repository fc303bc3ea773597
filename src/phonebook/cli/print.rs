use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::format::{header_line, record_line};
use phonebook::index::DisplayRecord;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Prints the column header followed by one line per record.
pub(super) fn print_records<W: Write>(out: &mut W, records: &[DisplayRecord]) -> io::Result<()> {
    writeln!(out, "{}", header_line())?;
    for dr in records {
        writeln!(out, "{}", record_line(dr.index, &dr.record))?;
    }
    Ok(())
}

/// Menu entry with its shortcut letter underlined.
pub(super) fn menu_entry(name: &str, shortcut: char, description: &str) -> String {
    let (before, rest) = name.split_at(name.find(shortcut).unwrap_or(0));
    let mut chars = rest.chars();
    let key: String = chars.next().map(String::from).unwrap_or_default();
    format!(
        "    {}{}{:<width$} - {}",
        before,
        key.underline(),
        chars.as_str(),
        description,
        width = 6usize.saturating_sub(before.len())
    )
}
