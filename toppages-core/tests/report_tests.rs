// Tests for report building and rendering

use toppages_core::report::{
    build_reports, build_variant_report, format_probability, generate_csv_report,
    generate_json_report, generate_markdown_report, generate_text_report, render_report,
    save_report,
};
use toppages_core::{RankedPage, ReportError, ReportFormat, Variant, VariantReport};

fn urls(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample_variants() -> Vec<Variant> {
    vec![
        Variant::new("naive", vec![0.5, 0.25, 0.25]),
        Variant::new("optimized", vec![0.1, 0.1, 0.8]),
    ]
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("json"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("csv"), Some(ReportFormat::Csv));
    assert_eq!(ReportFormat::from_str("markdown"), Some(ReportFormat::Markdown));
    assert_eq!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown));
}

#[test]
fn test_report_format_from_str_case_insensitive() {
    assert_eq!(ReportFormat::from_str("TEXT"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("Json"), Some(ReportFormat::Json));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert!(ReportFormat::from_str("html").is_none());
    assert!(ReportFormat::from_str("").is_none());
}

// ============================================================================
// Percentage Formatting Tests
// ============================================================================

#[test]
fn test_format_probability() {
    assert_eq!(format_probability(0.123456), "12.34560%");
    assert_eq!(format_probability(0.5), "50.00000%");
    assert_eq!(format_probability(0.1), "10.00000%");
    assert_eq!(format_probability(0.0), "0.00000%");
    assert_eq!(format_probability(1.0), "100.00000%");
}

#[test]
fn test_format_probability_small_value() {
    assert_eq!(format_probability(0.0000123), "0.00123%");
}

// ============================================================================
// Report Building Tests
// ============================================================================

#[test]
fn test_build_variant_report_resolves_urls() {
    let variant = Variant::new("naive", vec![0.2, 0.5, 0.3]);
    let report = build_variant_report(&variant, &urls(&["a.com", "b.com", "c.com"]), 10).unwrap();

    assert_eq!(report.variant, "naive");
    let got: Vec<(usize, usize, &str)> = report
        .pages
        .iter()
        .map(|p| (p.rank, p.index, p.url.as_str()))
        .collect();
    assert_eq!(got, vec![(1, 1, "b.com"), (2, 2, "c.com"), (3, 0, "a.com")]);
}

#[test]
fn test_build_variant_report_limits_rows() {
    let probabilities: Vec<f64> = (0..25).map(|i| i as f64 / 300.0).collect();
    let names: Vec<String> = (0..25).map(|i| format!("page{}.com", i)).collect();
    let variant = Variant::new("naive", probabilities);

    let report = build_variant_report(&variant, &names, 10).unwrap();
    assert_eq!(report.pages.len(), 10);
    assert_eq!(report.pages[0].url, "page24.com");
    assert_eq!(report.pages[9].url, "page15.com");
}

#[test]
fn test_build_variant_report_guards_url_lookup() {
    let variant = Variant::new("naive", vec![0.1, 0.9]);
    let err = build_variant_report(&variant, &urls(&["a.com"]), 10).unwrap_err();
    assert!(matches!(
        err,
        ReportError::IndexOutOfRange {
            index: 1,
            url_count: 1,
            ..
        }
    ));
}

#[test]
fn test_build_reports_end_to_end_ordering() {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 10).unwrap();

    let naive: Vec<&str> = reports[0].pages.iter().map(|p| p.url.as_str()).collect();
    let optimized: Vec<&str> = reports[1].pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(naive, vec!["a.com", "b.com", "c.com"]);
    assert_eq!(optimized, vec!["c.com", "a.com", "b.com"]);
}

#[test]
fn test_build_reports_checks_every_variant_first() {
    let variants = vec![
        Variant::new("naive", vec![0.5, 0.5]),
        Variant::new("optimized", vec![0.2, 0.3, 0.5]),
    ];
    let err = build_reports(&variants, &urls(&["a.com", "b.com"]), 10).unwrap_err();
    match err {
        ReportError::IndexOutOfRange { variant, .. } => assert_eq!(variant, "optimized"),
        other => panic!("expected index error, got {:?}", other),
    }
}

#[test]
fn test_build_reports_empty_variant() {
    let variants = vec![Variant::new("naive", vec![])];
    let reports = build_reports(&variants, &urls(&["a.com"]), 10).unwrap();
    assert!(reports[0].pages.is_empty());
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_generate_text_report_layout() {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 10).unwrap();
    let text = generate_text_report(&reports);

    let expected = "Top web pages (naive algorithm)\n\
                    Probability\tURL\n\
                    50.00000%\ta.com\n\
                    25.00000%\tb.com\n\
                    25.00000%\tc.com\n\
                    Top web pages (optimized algorithm)\n\
                    Probability\tURL\n\
                    80.00000%\tc.com\n\
                    10.00000%\ta.com\n\
                    10.00000%\tb.com\n";
    assert_eq!(text, expected);
}

#[test]
fn test_generate_text_report_headers_without_rows() {
    let reports = vec![VariantReport {
        variant: "naive".to_string(),
        pages: vec![],
    }];
    assert_eq!(
        generate_text_report(&reports),
        "Top web pages (naive algorithm)\nProbability\tURL\n"
    );
}

#[test]
fn test_generate_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 2)?;
    let json = generate_json_report(&reports)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["report"]["metadata"]["generator"], "toppages");
    let variants = value["report"]["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[1]["variant"], "optimized");
    assert_eq!(variants[1]["pages"][0]["url"], "c.com");
    assert_eq!(variants[1]["pages"][0]["index"], 2);
    assert_eq!(variants[1]["pages"][0]["probability"], 0.8);
    assert_eq!(variants[1]["pages"].as_array().unwrap().len(), 2);

    let pages: Vec<RankedPage> = serde_json::from_value(variants[0]["pages"].clone())?;
    assert_eq!(pages[0].url, "a.com");
    Ok(())
}

#[test]
fn test_generate_json_report_rejects_infinity() {
    let variants = vec![Variant::new("naive", vec![0.5, f64::INFINITY])];
    let reports = build_reports(&variants, &urls(&["a.com", "b.com"]), 10).unwrap();

    let err = generate_json_report(&reports).unwrap_err();
    match &err {
        ReportError::NonFiniteJson { variant, index, .. } => {
            assert_eq!(variant, "naive");
            assert_eq!(*index, 1);
        }
        other => panic!("expected non-finite error, got {:?}", other),
    }
    assert!(render_report(&reports, ReportFormat::Json).is_err());
    assert!(render_report(&reports, ReportFormat::Text).unwrap().contains("inf%\tb.com"));
}

#[test]
fn test_generate_csv_report() {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 1).unwrap();
    let csv = generate_csv_report(&reports);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "variant,rank,index,probability,url");
    assert_eq!(lines[1], "naive,1,0,0.5,a.com");
    assert_eq!(lines[2], "optimized,1,2,0.8,c.com");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_generate_csv_report_quotes_fields() {
    let reports = vec![VariantReport {
        variant: "naive".to_string(),
        pages: vec![RankedPage {
            rank: 1,
            index: 0,
            probability: 1.0,
            url: "http://a.com/?q=\"x\",y".to_string(),
        }],
    }];
    let csv = generate_csv_report(&reports);
    assert!(csv.contains("\"http://a.com/?q=\"\"x\"\",y\""));
}

#[test]
fn test_generate_markdown_report() {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 10).unwrap();
    let md = generate_markdown_report(&reports);

    assert!(md.contains("## Top web pages (naive algorithm)"));
    assert!(md.contains("## Top web pages (optimized algorithm)"));
    assert!(md.contains("| 1 | 80.00000% | c.com |"));
    assert!(md.contains("| 3 | 25.00000% | c.com |"));
}

#[test]
fn test_render_report_matches_generators() {
    let reports = build_reports(&sample_variants(), &urls(&["a.com", "b.com", "c.com"]), 10).unwrap();
    assert_eq!(
        render_report(&reports, ReportFormat::Text).unwrap(),
        generate_text_report(&reports)
    );
    assert_eq!(
        render_report(&reports, ReportFormat::Csv).unwrap(),
        generate_csv_report(&reports)
    );
    assert_eq!(
        render_report(&reports, ReportFormat::Markdown).unwrap(),
        generate_markdown_report(&reports)
    );
}

#[test]
fn test_save_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("report.txt");
    save_report("Top web pages (naive algorithm)\n", &path)?;
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "Top web pages (naive algorithm)\n"
    );
    Ok(())
}
