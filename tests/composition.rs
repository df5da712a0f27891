// Composition tests — verifying that the stages chain together correctly.
//
// These tests exercise the data flow of a full cycle:
//   RecordCollection -> filters -> view selector -> renderers
// without any network access (the markdown report writes to the temp dir).

use spacebio::dataset::models::{Record, RecordCollection};
use spacebio::output::emphasis_runs;
use spacebio::output::markdown::{generate_report, render_report, REPORT_FILE};
use spacebio::pipeline::{run_cycle, SearchRequest};
use spacebio::text::frequency::FrequencyEntry;
use spacebio::text::highlight::EMPHASIS;
use spacebio::views::audience::AudienceMode;
use spacebio::views::selector::{View, ViewEntry, ViewOptions};

fn three_records() -> RecordCollection {
    RecordCollection::new(vec![
        Record::new("Radiation effects on bone", "https://example.org/1"),
        Record::new("Plant growth in microgravity", "https://example.org/2"),
        Record::new("Unrelated topic", "https://example.org/3"),
    ])
}

fn request(query: &str, audience: AudienceMode) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        audience,
        years: None,
    }
}

// ============================================================
// One query, three audiences
// ============================================================

#[test]
fn scientist_view_summarizes_the_match() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::Scientist),
        &ViewOptions::default(),
    );

    assert_eq!(report.total_matches, 1);
    assert_eq!(
        report.view,
        View::Summaries {
            entries: vec![ViewEntry {
                text: "Radiation effects on bone".to_string(),
                link: "https://example.org/1".to_string(),
            }]
        }
    );
}

#[test]
fn manager_view_counts_keywords_without_stopwords() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::Manager),
        &ViewOptions::default(),
    );

    assert_eq!(
        report.view,
        View::KeywordChart {
            entries: vec![
                FrequencyEntry {
                    token: "radiation".to_string(),
                    count: 1
                },
                FrequencyEntry {
                    token: "bone".to_string(),
                    count: 1
                },
            ]
        }
    );
}

#[test]
fn mission_architect_view_highlights_risk_terms() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::MissionArchitect),
        &ViewOptions::default(),
    );

    match report.view {
        View::RiskHighlights { entries } => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].text, "**Radiation** effects on **bone**");
            assert_eq!(entries[0].link, "https://example.org/1");
        }
        other => panic!("expected risk highlights, got {other:?}"),
    }
}

#[test]
fn no_match_skips_every_view() {
    let collection = three_records();
    for mode in AudienceMode::ALL {
        let report = run_cycle(
            &collection,
            &request("zebrafish", mode),
            &ViewOptions::default(),
        );
        assert_eq!(report.total_matches, 0);
        assert_eq!(report.view, View::NoResults);
    }
}

// ============================================================
// Cycles are independent
// ============================================================

#[test]
fn repeated_cycles_leave_collection_untouched() {
    let collection = three_records();
    let before = collection.clone();
    let options = ViewOptions::default();

    for query in ["bone", "", "growth"] {
        for mode in AudienceMode::ALL {
            let _ = run_cycle(&collection, &request(query, mode), &options);
        }
    }

    assert_eq!(collection.as_slice(), before.as_slice());
}

#[test]
fn empty_query_manager_covers_all_titles() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("", AudienceMode::Manager),
        &ViewOptions::default(),
    );

    assert_eq!(report.total_matches, 3);
    match report.view {
        View::KeywordChart { entries } => {
            let tokens: Vec<&str> = entries.iter().map(|e| e.token.as_str()).collect();
            assert_eq!(
                tokens,
                vec!["radiation", "bone", "plant", "growth", "microgravity", "unrelated", "topic"]
            );
        }
        other => panic!("expected keyword chart, got {other:?}"),
    }
}

#[test]
fn top_k_option_limits_chart() {
    let collection = three_records();
    let options = ViewOptions {
        top_k: 2,
        ..ViewOptions::default()
    };
    let report = run_cycle(&collection, &request("", AudienceMode::Manager), &options);
    match report.view {
        View::KeywordChart { entries } => assert_eq!(entries.len(), 2),
        other => panic!("expected keyword chart, got {other:?}"),
    }
}

#[test]
fn year_range_applies_before_keyword() {
    let mut old = Record::new("Bone density in rats", "old");
    old.year = Some(2005);
    let mut recent = Record::new("Bone density in mice", "recent");
    recent.year = Some(2021);
    let collection = RecordCollection::new(vec![old, recent]);

    let request = SearchRequest {
        query: "bone".to_string(),
        audience: AudienceMode::Scientist,
        years: Some(2020..=2024),
    };
    let report = run_cycle(&collection, &request, &ViewOptions::default());
    assert_eq!(report.total_matches, 1);
}

// ============================================================
// Renderers
// ============================================================

#[test]
fn json_output_is_tagged() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::Manager),
        &ViewOptions::default(),
    );

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["audience"], "manager");
    assert_eq!(json["total_matches"], 1);
    assert_eq!(json["view"]["kind"], "keyword_chart");
    assert_eq!(json["view"]["entries"][0]["token"], "radiation");
    assert_eq!(json["view"]["entries"][0]["count"], 1);
}

#[test]
fn markdown_report_contains_links_and_highlights() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::MissionArchitect),
        &ViewOptions::default(),
    );

    let md = render_report(&report);
    assert!(md.contains("- **Query:** `bone`"));
    assert!(md.contains("- **Audience:** Mission Architect"));
    assert!(md.contains("**Radiation** effects on **bone**"));
    assert!(md.contains("[Read Paper](https://example.org/1)"));
}

#[test]
fn markdown_report_for_no_results() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("zebrafish", AudienceMode::Scientist),
        &ViewOptions::default(),
    );
    assert!(render_report(&report).contains("No results found."));
}

#[test]
fn generate_report_writes_file() {
    let collection = three_records();
    let report = run_cycle(
        &collection,
        &request("", AudienceMode::Manager),
        &ViewOptions::default(),
    );

    let dir = std::env::temp_dir().join(format!("spacebio-report-{}", std::process::id()));
    let path = generate_report(&report, &dir).unwrap();

    assert_eq!(path, dir.join(REPORT_FILE));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("| radiation | 1 |"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn manager_chart_has_no_accent_fragments() {
    let collection = RecordCollection::new(vec![
        Record::new("Müller glia in spaceflight", "https://example.org/1"),
        Record::new("Naïve T cells after spaceflight", "https://example.org/2"),
    ]);
    let report = run_cycle(
        &collection,
        &request("", AudienceMode::Manager),
        &ViewOptions::default(),
    );

    match report.view {
        View::KeywordChart { entries } => {
            let tokens: Vec<&str> = entries.iter().map(|e| e.token.as_str()).collect();
            assert_eq!(tokens, vec!["spaceflight", "glia", "t", "cells"]);
        }
        other => panic!("expected keyword chart, got {other:?}"),
    }
}

#[test]
fn highlighted_title_with_asterisks_renders_correctly() {
    let collection = RecordCollection::new(vec![Record::new("5**2 bone", "https://example.org/1")]);
    let report = run_cycle(
        &collection,
        &request("bone", AudienceMode::MissionArchitect),
        &ViewOptions::default(),
    );

    let View::RiskHighlights { entries } = &report.view else {
        panic!("expected risk highlights, got {:?}", report.view);
    };
    assert_eq!(
        emphasis_runs(&entries[0].text, EMPHASIS),
        vec![("5**2 ".to_string(), false), ("bone".to_string(), true)]
    );

    let md = render_report(&report);
    assert!(md.contains(r"- 5\*\*2 **bone**"), "got:\n{md}");
}

#[test]
fn markdown_report_escapes_query_and_titles() {
    let collection = RecordCollection::new(vec![Record::new(
        "Gene_x `expression` [preprint]",
        "https://example.org/1",
    )]);
    let report = run_cycle(
        &collection,
        &request("`expression`", AudienceMode::Scientist),
        &ViewOptions::default(),
    );

    let md = render_report(&report);
    assert!(md.contains("- **Query:** `` `expression` ``"), "got:\n{md}");
    assert!(
        md.contains(r"- **Gene\_x \`expression\` \[preprint\]**"),
        "got:\n{md}"
    );
}
