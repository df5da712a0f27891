// View selector — maps an audience mode to the view computed for it.
//
// A view is plain data: the renderer (terminal, markdown, JSON) decides how
// to show it. Views are rebuilt from scratch every cycle; nothing is cached.

use serde::Serialize;
use tracing::debug;

use super::audience::AudienceMode;
use crate::dataset::models::Record;
use crate::text::frequency::{top_k, FrequencyEntry, DEFAULT_TOP_K};
use crate::text::highlight::RiskHighlighter;
use crate::text::stopwords::filter_stopwords;
use crate::text::summarize::summarize;
use crate::text::tokenize::tokenize;

/// A line of text derived from one record, with the record's link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewEntry {
    pub text: String,
    pub link: String,
}

/// The output of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// The filter matched nothing; no view logic ran.
    NoResults,
    /// Scientist: one summary per matching record.
    Summaries { entries: Vec<ViewEntry> },
    /// Manager: (keyword, count) pairs for a bar chart, most frequent first.
    KeywordChart { entries: Vec<FrequencyEntry> },
    /// Manager, when no keywords survived stopword removal.
    InsufficientData,
    /// Mission Architect: each matching title with risk terms emphasized.
    RiskHighlights { entries: Vec<ViewEntry> },
}

/// Tunables for view construction.
pub struct ViewOptions {
    /// Keywords kept in the Manager chart
    pub top_k: usize,
    pub highlighter: RiskHighlighter,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            highlighter: RiskHighlighter::default(),
        }
    }
}

/// Build the view for `mode` over an already-filtered result set.
pub fn select_view(mode: AudienceMode, results: &[&Record], options: &ViewOptions) -> View {
    if results.is_empty() {
        return View::NoResults;
    }

    debug!(mode = %mode, results = results.len(), "Building view");

    match mode {
        AudienceMode::Scientist => summaries(results),
        AudienceMode::Manager => keyword_chart(results, options.top_k),
        AudienceMode::MissionArchitect => risk_highlights(results, &options.highlighter),
    }
}

fn summaries(results: &[&Record]) -> View {
    let entries = results
        .iter()
        .map(|r| ViewEntry {
            text: summarize(r.display_title()),
            link: r.link.clone(),
        })
        .collect();
    View::Summaries { entries }
}

fn keyword_chart(results: &[&Record], k: usize) -> View {
    // Untitled records contribute no words
    let text = results
        .iter()
        .filter_map(|r| r.title.as_deref())
        .collect::<Vec<_>>()
        .join(" ");

    let entries = top_k(filter_stopwords(tokenize(&text)), k);
    if entries.is_empty() {
        View::InsufficientData
    } else {
        View::KeywordChart { entries }
    }
}

fn risk_highlights(results: &[&Record], highlighter: &RiskHighlighter) -> View {
    let entries = results
        .iter()
        .map(|r| ViewEntry {
            text: r
                .title
                .as_deref()
                .map(|t| highlighter.highlight(t))
                .unwrap_or_else(|| r.display_title().to_string()),
            link: r.link.clone(),
        })
        .collect();
    View::RiskHighlights { entries }
}
