// Keyword and year filters over a record collection.
//
// Filters borrow from the collection and return references in their
// original order, so a result set is always a positional subset of the
// records it was computed from. Nothing here mutates or copies records.

use std::ops::RangeInclusive;

use anyhow::Result;

use crate::dataset::models::Record;

/// Does `title` contain `query`, ignoring case?
///
/// `lowered_query` must already be lowercase.
fn title_matches(title: &str, lowered_query: &str) -> bool {
    title.to_lowercase().contains(lowered_query)
}

/// Keep the records whose title contains `query` as a case-insensitive
/// substring. An empty query keeps everything. Records without a title
/// never match a non-empty query.
pub fn filter<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let lowered = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.title
                .as_deref()
                .is_some_and(|title| title_matches(title, &lowered))
        })
        .collect()
}

/// Keep the records published within `years` (inclusive). Without a range
/// every record is kept; with one, records of unknown year are dropped.
pub fn filter_by_year<'a, I>(records: I, years: Option<&RangeInclusive<i32>>) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    match years {
        None => records.into_iter().collect(),
        Some(range) => records
            .into_iter()
            .filter(|r| r.year.is_some_and(|y| range.contains(&y)))
            .collect(),
    }
}

/// Turn optional start/end years into an inclusive range.
///
/// `span` is the dataset's (earliest, latest) known year; a missing bound is
/// taken from it. No bounds at all means no year filtering.
pub fn resolve_year_range(
    span: Option<(i32, i32)>,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<Option<RangeInclusive<i32>>> {
    if from.is_none() && to.is_none() {
        return Ok(None);
    }

    let Some((first, last)) = span else {
        anyhow::bail!("This dataset has no year column, so it cannot be filtered by year");
    };

    match (from, to) {
        (Some(start), Some(end)) if start > end => {
            anyhow::bail!("Start year {start} is after end year {end}")
        }
        (Some(start), None) if start > last => anyhow::bail!(
            "Start year {start} is after the latest year in the dataset ({first}-{last})"
        ),
        (None, Some(end)) if end < first => anyhow::bail!(
            "End year {end} is before the earliest year in the dataset ({first}-{last})"
        ),
        _ => Ok(Some(from.unwrap_or(first)..=to.unwrap_or(last))),
    }
}
