// One render cycle: filter the collection, then build the audience view.
//
// The collection is passed in by reference and never modified. Every cycle
// starts from the full collection, so changing the query or the audience
// simply means running another cycle.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::info;

use crate::dataset::models::RecordCollection;
use crate::search::matcher::{filter, filter_by_year};
use crate::views::audience::AudienceMode;
use crate::views::selector::{select_view, View, ViewOptions};

/// The inputs for a single cycle.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Keyword to look for in titles; empty means "everything"
    pub query: String,
    pub audience: AudienceMode,
    /// Inclusive publication-year range, if the reader narrowed by year
    pub years: Option<RangeInclusive<i32>>,
}

/// Everything a renderer needs to show the outcome of a cycle.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub audience: AudienceMode,
    pub years: Option<RangeInclusive<i32>>,
    /// How many records matched the filters
    pub total_matches: usize,
    pub view: View,
}

/// Run one cycle over `collection`.
pub fn run_cycle(
    collection: &RecordCollection,
    request: &SearchRequest,
    options: &ViewOptions,
) -> SearchReport {
    let in_years = filter_by_year(collection, request.years.as_ref());
    let results = filter(in_years, &request.query);

    info!(
        query = %request.query,
        audience = %request.audience,
        matches = results.len(),
        total = collection.len(),
        "Search cycle complete"
    );

    let view = select_view(request.audience, &results, options);

    SearchReport {
        query: request.query.clone(),
        audience: request.audience,
        years: request.years.clone(),
        total_matches: results.len(),
        view,
    }
}
