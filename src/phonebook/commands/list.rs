//! Paginated listing.
//!
//! [`listing`] yields the header line, then one line per record, and a
//! [`ListItem::PageBreak`] after every `page_size`-th record (including when
//! that record is the last one). The iterator is lazy: nothing past a page
//! break is rendered until the caller pulls again, so dropping it at a break
//! stops the listing. A page size of 0 never breaks.

use crate::error::Result;
use crate::format::{header_line, record_line};
use crate::index::StorageIndex;
use crate::model::Record;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Reply that stops a listing at a page break. Anything else continues.
pub const STOP_SENTINEL: &str = "x";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Header(String),
    Row(String),
    PageBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Next,
    Stop,
}

impl Continuation {
    pub fn from_reply(reply: &str) -> Self {
        if reply == STOP_SENTINEL {
            Continuation::Stop
        } else {
            Continuation::Next
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub rows: usize,
    pub page_breaks: usize,
    pub stopped: bool,
}

pub struct Listing<'a> {
    records: std::iter::Enumerate<std::slice::Iter<'a, Record>>,
    page_size: usize,
    header_sent: bool,
    break_pending: bool,
    emitted: usize,
}

pub fn listing(records: &[Record], page_size: usize) -> Listing<'_> {
    Listing {
        records: records.iter().enumerate(),
        page_size,
        header_sent: false,
        break_pending: false,
        emitted: 0,
    }
}

impl Iterator for Listing<'_> {
    type Item = ListItem;

    fn next(&mut self) -> Option<ListItem> {
        if !self.header_sent {
            self.header_sent = true;
            return Some(ListItem::Header(header_line()));
        }
        if self.break_pending {
            self.break_pending = false;
            return Some(ListItem::PageBreak);
        }

        let (i, record) = self.records.next()?;
        self.emitted += 1;
        if self.page_size > 0 && self.emitted % self.page_size == 0 {
            self.break_pending = true;
        }
        Some(ListItem::Row(record_line(StorageIndex(i).into(), record)))
    }
}

/// The caller side of a listing: receives lines and answers page breaks.
pub trait Pager {
    fn emit(&mut self, line: &str) -> Result<()>;

    fn next_page(&mut self) -> Result<Continuation>;
}

/// Drives a listing through `pager`, asking it how to proceed at each page
/// break.
pub fn run<P: Pager>(records: &[Record], page_size: usize, pager: &mut P) -> Result<ListSummary> {
    let mut summary = ListSummary::default();
    for item in listing(records, page_size) {
        match item {
            ListItem::Header(line) => pager.emit(&line)?,
            ListItem::Row(line) => {
                pager.emit(&line)?;
                summary.rows += 1;
            }
            ListItem::PageBreak => {
                summary.page_breaks += 1;
                if pager.next_page()? == Continuation::Stop {
                    summary.stopped = true;
                    break;
                }
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    /// Records every line and replays scripted replies, then `Next` forever.
    #[derive(Default)]
    struct ScriptedPager {
        lines: Vec<String>,
        replies: Vec<Continuation>,
        prompts: usize,
    }

    impl Pager for ScriptedPager {
        fn emit(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }

        fn next_page(&mut self) -> Result<Continuation> {
            let reply = self
                .replies
                .get(self.prompts)
                .copied()
                .unwrap_or(Continuation::Next);
            self.prompts += 1;
            Ok(reply)
        }
    }

    fn contacts(count: usize) -> Vec<Record> {
        StoreFixture::new().with_contacts(count).store.persisted().to_vec()
    }

    #[test]
    fn emits_header_then_rows() {
        let records = contacts(2);
        let items: Vec<_> = listing(&records, DEFAULT_PAGE_SIZE).collect();
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], ListItem::Header(h) if h.starts_with("#")));
        assert!(matches!(&items[1], ListItem::Row(r) if r.starts_with("1 ")));
        assert!(matches!(&items[2], ListItem::Row(r) if r.contains("Contact 2")));
    }

    #[test]
    fn empty_store_lists_only_header() {
        let items: Vec<_> = listing(&[], DEFAULT_PAGE_SIZE).collect();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn forty_one_rows_pause_twice() {
        let records = contacts(41);
        let mut pager = ScriptedPager::default();
        let summary = run(&records, 20, &mut pager).unwrap();

        assert_eq!(summary.rows, 41);
        assert_eq!(summary.page_breaks, 2);
        assert_eq!(pager.prompts, 2);
        assert!(!summary.stopped);
        assert_eq!(pager.lines.len(), 42);
    }

    #[test]
    fn stop_after_first_page_emits_twenty_rows() {
        let records = contacts(41);
        let mut pager = ScriptedPager {
            replies: vec![Continuation::Stop],
            ..Default::default()
        };
        let summary = run(&records, 20, &mut pager).unwrap();
        assert_eq!(summary.rows, 20);
        assert_eq!(summary.page_breaks, 1);
        assert!(summary.stopped);
        assert!(pager.lines.last().unwrap().contains("Contact 20"));
    }

    #[test]
    fn stop_after_second_page_emits_forty_rows() {
        let records = contacts(41);
        let mut pager = ScriptedPager {
            replies: vec![Continuation::Next, Continuation::Stop],
            ..Default::default()
        };
        let summary = run(&records, 20, &mut pager).unwrap();
        assert_eq!(summary.rows, 40);
        assert_eq!(pager.prompts, 2);
    }

    #[test]
    fn pauses_even_after_the_last_row() {
        let records = contacts(20);
        let items: Vec<_> = listing(&records, 20).collect();
        assert_eq!(items.last(), Some(&ListItem::PageBreak));
    }

    #[test]
    fn listing_restarts_on_every_call() {
        let records = contacts(3);
        let first: Vec<_> = listing(&records, 2).collect();
        let second: Vec<_> = listing(&records, 2).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_page_size_never_pauses() {
        let records = contacts(45);
        let breaks = listing(&records, 0)
            .filter(|i| *i == ListItem::PageBreak)
            .count();
        assert_eq!(breaks, 0);
    }

    #[test]
    fn only_the_sentinel_stops() {
        assert_eq!(Continuation::from_reply("x"), Continuation::Stop);
        assert_eq!(Continuation::from_reply(""), Continuation::Next);
        assert_eq!(Continuation::from_reply("X"), Continuation::Next);
        assert_eq!(Continuation::from_reply("x "), Continuation::Next);
    }
}
