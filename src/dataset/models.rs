// Data models — the publication records everything else reads from.
//
// A collection is loaded once at startup and never modified afterwards.
// Filters and views borrow records out of it rather than copying them.

use serde::{Deserialize, Serialize};

/// One publication row from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Publication title. `None` when the cell was empty in the source.
    pub title: Option<String>,
    /// Link to the full paper (empty when the source had none)
    pub link: String,
    /// Publication year, when the dataset carries a year column
    pub year: Option<i32>,
}

impl Record {
    /// Convenience constructor for a record with a title and link but no year.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            link: link.into(),
            year: None,
        }
    }

    /// The title, or a placeholder for display when it is missing.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

/// The full set of records, in the order the source listed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Number of records whose title cell was empty.
    pub fn missing_titles(&self) -> usize {
        self.records.iter().filter(|r| r.title.is_none()).count()
    }

    /// Earliest and latest known publication year, if any record has one.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
