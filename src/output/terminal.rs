// Colored terminal output for search results and keyword charts.
//
// This module handles all terminal-specific formatting: colors, bars and
// list bounds. Nothing here changes what a view contains.

use colored::Colorize;

use super::{emphasis_runs, DisplayLimits};
use crate::pipeline::SearchReport;
use crate::text::frequency::FrequencyEntry;
use crate::text::highlight::EMPHASIS;
use crate::views::selector::{View, ViewEntry};

/// Width of a full-length bar in the keyword chart.
const BAR_WIDTH: usize = 30;

/// Display the outcome of one search cycle.
pub fn display_report(report: &SearchReport, limits: &DisplayLimits) {
    let heading = if report.query.is_empty() {
        format!("=== All publications ({}) ===", report.total_matches)
    } else {
        format!(
            "=== Results for '{}' ({}) ===",
            report.query, report.total_matches
        )
    };
    println!("\n{}", heading.bold());

    if let Some(years) = &report.years {
        println!("  {}", format!("Years {}-{}", years.start(), years.end()).dimmed());
    }

    if report.view == View::NoResults {
        println!("  {}", "No results found.".yellow());
        return;
    }

    println!(
        "  {} {}",
        format!("Mode: {} →", report.audience).cyan(),
        report.audience.description().dimmed()
    );
    println!();

    match &report.view {
        View::NoResults => {}
        View::Summaries { entries } => display_entries(entries, limits.summaries, false),
        View::KeywordChart { entries } => display_keyword_chart(entries),
        View::InsufficientData => {
            println!(
                "  {}",
                "Not enough words to generate keyword chart.".yellow()
            );
        }
        View::RiskHighlights { entries } => display_entries(entries, limits.highlights, true),
    }
}

/// Print a bounded list of entries with their links.
fn display_entries(entries: &[ViewEntry], limit: usize, highlighted: bool) {
    for (i, entry) in entries.iter().take(limit).enumerate() {
        let text = if highlighted {
            render_emphasis(&entry.text)
        } else {
            entry.text.bold().to_string()
        };
        println!("  {:>3}. {}", i + 1, text);
        if !entry.link.is_empty() {
            println!("       {} {}", "Read Paper:".dimmed(), entry.link.dimmed());
        }
    }

    let hidden = entries.len().saturating_sub(limit);
    if hidden > 0 {
        println!("\n  {}", format!("... and {hidden} more").dimmed());
    }
}

/// Horizontal bar chart of keyword counts, most frequent on top.
fn display_keyword_chart(entries: &[FrequencyEntry]) {
    println!("  {}", "Top Keywords in Selected Papers".bold());
    println!();

    let max = entries.iter().map(|e| e.count).max().unwrap_or(1).max(1);
    let label_width = entries
        .iter()
        .map(|e| e.token.chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let filled = ((entry.count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled.max(1));
        println!(
            "  {:>width$} {} {}",
            entry.token,
            bar.truecolor(255, 165, 0),
            entry.count,
            width = label_width
        );
    }
}

/// Turn emphasis markers into bold red terminal text.
fn render_emphasis(text: &str) -> String {
    emphasis_runs(text, EMPHASIS)
        .into_iter()
        .map(|(run, emphasized)| {
            if emphasized {
                run.red().bold().to_string()
            } else {
                run
            }
        })
        .collect()
}
