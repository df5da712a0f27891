// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

/// How many entries each list view prints. The views themselves always
/// cover every match; only the display is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub summaries: usize,
    pub highlights: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            summaries: 15,
            highlights: 20,
        }
    }
}

impl From<&crate::config::Config> for DisplayLimits {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            summaries: config.summary_limit,
            highlights: config.highlight_limit,
        }
    }
}

/// Split `text` on `marker` pairs into (segment, emphasized) runs.
///
/// A backslash makes the next character literal, so `\*\*` never opens or
/// closes emphasis. An unmatched trailing marker is kept as literal text.
pub fn emphasis_runs(text: &str, marker: &str) -> Vec<(String, bool)> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut emphasized = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            match rest[1..].chars().next() {
                Some(escaped) => {
                    current.push(escaped);
                    rest = &rest[1 + escaped.len_utf8()..];
                }
                None => {
                    current.push(c);
                    rest = "";
                }
            }
        } else if !marker.is_empty() && rest.starts_with(marker) {
            if !current.is_empty() {
                runs.push((std::mem::take(&mut current), emphasized));
            }
            emphasized = !emphasized;
            rest = &rest[marker.len()..];
        } else {
            current.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    if emphasized {
        current.insert_str(0, marker);
    }
    if !current.is_empty() {
        runs.push((current, false));
    }
    runs
}
