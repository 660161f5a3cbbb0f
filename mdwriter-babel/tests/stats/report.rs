use crate::common::load_fixture;
use chrono::{TimeZone, Utc};
use mdwriter_babel::formats::json::JsonReportDocument;
use mdwriter_babel::{analyze, generate_report, generate_report_at, FormatError, ReportRegistry};

#[test]
fn test_console_report_lists_guide_headings() {
    let stats = analyze(&load_fixture("guide.md"));
    let report = generate_report(&stats, "console").expect("console report");

    let overview = report.find("Content Overview:").unwrap();
    let structure = report.find("Structure Analysis:").unwrap();
    let media = report.find("Links & Media:").unwrap();
    let analysis = report.find("Content Analysis:").unwrap();
    assert!(overview < structure && structure < media && media < analysis);

    assert!(report.contains("   H1 Headings: 1"));
    assert!(report.contains("   H3 Headings: 1"));
    assert!(!report.contains("H4 Headings"));
    assert!(report.contains("   Total Headings: 3"));
    assert!(report.contains("   Avg Words/Paragraph: 4.5"));
}

#[test]
fn test_json_report_matches_stats() {
    let stats = analyze(&load_fixture("guide.md"));
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let json = generate_report_at(&stats, "json", timestamp).expect("json report");

    let document: JsonReportDocument = serde_json::from_str(&json).expect("valid json");
    assert_eq!(document.analysis, stats);
    assert_eq!(document.timestamp, "2025-01-02T03:04:05.000Z");
}

#[test]
fn test_unknown_report_format() {
    let stats = analyze("text");
    assert_eq!(
        generate_report(&stats, "xml"),
        Err(FormatError::FormatNotFound("xml".to_string()))
    );
}

#[test]
fn test_registry_detects_json_output() {
    let registry = ReportRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("guide-stats.json"),
        Some("json".to_string())
    );
}
