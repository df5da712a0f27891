// Risk-term highlighting for the Mission Architect view.
//
// All terms are compiled into one case-insensitive alternation and applied in
// a single pass. Matches never overlap, so a term can never be wrapped twice
// even if it occurs inside another term. At a given position the term listed
// first wins.

use regex_lite::Regex;
use tracing::warn;

/// Health and mission risk terms flagged in titles, in priority order.
pub const RISK_TERMS: [&str; 7] = [
    "radiation",
    "immune",
    "bone",
    "muscle",
    "microgravity",
    "health",
    "stress",
];

/// Marker placed on both sides of a highlighted term (markdown bold).
pub const EMPHASIS: &str = "**";

/// A compiled set of risk terms.
pub struct RiskHighlighter {
    /// `None` when there are no non-empty terms to look for
    pattern: Option<Regex>,
}

impl RiskHighlighter {
    /// Compile a highlighter for `terms`. Terms are matched literally;
    /// empty terms are ignored.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, regex_lite::Error> {
        let alternatives: Vec<String> = terms
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !t.is_empty())
            .map(regex_lite::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Wrap every risk term occurrence in `text` with [`EMPHASIS`], keeping
    /// the casing of the matched text.
    ///
    /// Backslashes and asterisks already in `text` are backslash-escaped so
    /// the only unescaped `**` in the result are the emphasis markers.
    pub fn highlight(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;

        if let Some(pattern) = &self.pattern {
            for m in pattern.find_iter(text) {
                push_escaped(&mut out, &text[last..m.start()]);
                out.push_str(EMPHASIS);
                push_escaped(&mut out, m.as_str());
                out.push_str(EMPHASIS);
                last = m.end();
            }
        }

        push_escaped(&mut out, &text[last..]);
        out
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '\\' || c == '*' {
            out.push('\\');
        }
        out.push(c);
    }
}

impl Default for RiskHighlighter {
    fn default() -> Self {
        Self::new(&RISK_TERMS).expect("built-in risk terms compile")
    }
}

/// One-off highlighting of `text` against `risk_terms`.
///
/// Prefer building a [`RiskHighlighter`] once when highlighting many titles.
pub fn highlight<S: AsRef<str>>(text: &str, risk_terms: &[S]) -> String {
    match RiskHighlighter::new(risk_terms) {
        Ok(highlighter) => highlighter.highlight(text),
        Err(e) => {
            warn!(error = %e, "Risk terms did not compile, leaving text unhighlighted");
            text.to_string()
        }
    }
}
