// Markdown report for a search cycle.
//
// The report mirrors what the terminal shows, but unbounded: every entry of
// the view is written, each with a link to the paper.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::SearchReport;
use crate::views::selector::{View, ViewEntry};

/// File name used inside the configured report directory.
pub const REPORT_FILE: &str = "spacebio-report.md";

/// Render `report` as a markdown document.
pub fn render_report(report: &SearchReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Space Biology Publication Search\n");
    let _ = writeln!(
        md,
        "_Generated {}_\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let query = if report.query.is_empty() {
        "(all publications)".to_string()
    } else {
        code_span(&report.query)
    };
    let _ = writeln!(md, "- **Query:** {query}");
    let _ = writeln!(md, "- **Audience:** {}", report.audience);
    if let Some(years) = &report.years {
        let _ = writeln!(md, "- **Years:** {}-{}", years.start(), years.end());
    }
    let _ = writeln!(md, "- **Matches:** {}\n", report.total_matches);

    match &report.view {
        View::NoResults => {
            let _ = writeln!(md, "No results found.");
        }
        View::Summaries { entries } => {
            let _ = writeln!(md, "## Summaries\n");
            write_entries(&mut md, entries, |text| {
                format!("**{}**", escape_chars(text, MARKDOWN_SPECIAL))
            });
        }
        View::KeywordChart { entries } => {
            let _ = writeln!(md, "## Top Keywords\n");
            let _ = writeln!(md, "| Keyword | Frequency |");
            let _ = writeln!(md, "|---|---:|");
            for entry in entries {
                let _ = writeln!(md, "| {} | {} |", entry.token, entry.count);
            }
        }
        View::InsufficientData => {
            let _ = writeln!(md, "Not enough words to generate keyword chart.");
        }
        View::RiskHighlights { entries } => {
            let _ = writeln!(md, "## Risk Highlights\n");
            // Highlighted text already carries emphasis with `\` and `*` escaped
            write_entries(&mut md, entries, |text| escape_chars(text, &MARKDOWN_SPECIAL[2..]));
        }
    }

    md
}

fn write_entries(md: &mut String, entries: &[ViewEntry], format_text: impl Fn(&str) -> String) {
    for entry in entries {
        let text = format_text(&entry.text);
        if entry.link.is_empty() {
            let _ = writeln!(md, "- {text}");
        } else {
            let _ = writeln!(
                md,
                "- {text}  \n  [Read Paper]({})",
                link_destination(&entry.link)
            );
        }
    }
}

/// Characters with inline meaning in markdown. `\\` and `*` come first so
/// text that already escapes them can skip them.
const MARKDOWN_SPECIAL: &[char] = &['\\', '*', '_', '`', '[', ']', '<', '>'];

/// Backslash-escape every char of `text` found in `special`, plus a leading
/// `#` that would otherwise start a heading.
fn escape_chars(text: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if special.contains(&c) || (i == 0 && c == '#') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wrap `text` in a code span whose fence is longer than any backtick run
/// inside it.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{text}{pad}{fence}")
}

/// Links with spaces, parentheses or angle brackets go inside `<...>`.
fn link_destination(link: &str) -> String {
    if link
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>'))
    {
        format!("<{}>", escape_chars(link, &['\\', '<', '>']))
    } else {
        link.to_string()
    }
}

/// Write the report into `dir`, creating it if needed. Returns the path.
pub fn generate_report(report: &SearchReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let path = dir.join(REPORT_FILE);
    std::fs::write(&path, render_report(report))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(path = %path.display(), "Wrote markdown report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_span_fences_backticks() {
        assert_eq!(code_span("bone"), "`bone`");
        assert_eq!(code_span("a`b"), "``a`b``");
        assert_eq!(code_span("`x"), "`` `x ``");
    }

    #[test]
    fn test_escape_chars() {
        assert_eq!(
            escape_chars("C_2 [draft] *rev*", MARKDOWN_SPECIAL),
            r"C\_2 \[draft\] \*rev\*"
        );
        assert_eq!(escape_chars("#1 bone", MARKDOWN_SPECIAL), r"\#1 bone");
        assert_eq!(escape_chars("a#b", MARKDOWN_SPECIAL), "a#b");
    }

    #[test]
    fn test_link_destination() {
        assert_eq!(link_destination("https://example.org/1"), "https://example.org/1");
        assert_eq!(
            link_destination("https://example.org/a (1)"),
            "<https://example.org/a (1)>"
        );
    }
}
