use unhdash::{
    analysis_summaries, investigation_events, metrics, overview_rows, parse_chart_response, read_snapshot,
    revenue_series, satisfaction_series, write_snapshot, DateWindow, MarketDataError, MarketDataSource, Section,
    SectionSync, SelectionOrigin, SeriesSource, SnapshotSource, SyntheticSource,
};
use anyhow::Result;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn may_2025() -> DateWindow {
    DateWindow::new(date(2025, 5, 1), date(2025, 5, 31))
}

#[test]
fn test_every_section_reconciles_from_either_control() {
    for section in Section::ALL {
        let mut sync = SectionSync::new();
        sync.on_dropdown_changed(section);
        assert_eq!(sync.tab_strip(), section);

        let mut sync = SectionSync::new();
        sync.on_tab_changed(section);
        assert_eq!(sync.dropdown(), section);
    }
}

#[test]
fn test_walking_all_sections_keeps_controls_equal() {
    for origin in [SelectionOrigin::Dropdown, SelectionOrigin::TabStrip] {
        let mut sync = SectionSync::new();
        for section in Section::ALL {
            sync.apply(origin, section);
            assert!(sync.is_consistent());
            assert_eq!(sync.active(), section);
        }
    }

    // Interleave the two controls
    let mut sync = SectionSync::new();
    for (i, section) in Section::ALL.iter().rev().enumerate() {
        let origin = if i % 2 == 0 { SelectionOrigin::Dropdown } else { SelectionOrigin::TabStrip };
        sync.apply(origin, *section);
        assert_eq!(sync.dropdown(), sync.tab_strip());
    }
}

#[test]
fn test_section_labels_parse_back() -> Result<()> {
    for section in Section::ALL {
        let parsed: Section = section.label().to_lowercase().parse().map_err(anyhow::Error::msg)?;
        assert_eq!(parsed, section);
    }
    assert!("Portfolio".parse::<Section>().is_err());
    Ok(())
}

#[test]
fn test_literal_datasets() {
    let table: Vec<(u32, &str, f64)> = metrics().iter().map(|m| (m.id, m.label, m.value)).collect();
    assert_eq!(
        table,
        vec![
            (1, "Revenue", 324.2),
            (2, "Profit", 22.4),
            (3, "Market Share", 15.0),
            (4, "Patient Satisfaction", 92.0),
            (5, "Membership Growth", 5.2),
        ]
    );

    let revenue: Vec<(i32, f64)> = revenue_series().iter().map(|p| (p.year, p.value)).collect();
    assert_eq!(
        revenue,
        vec![(2018, 226.2), (2019, 240.1), (2020, 255.6), (2021, 287.6), (2022, 324.2), (2023, 360.0)]
    );

    let satisfaction: Vec<f64> = satisfaction_series().iter().map(|p| p.value).collect();
    assert_eq!(satisfaction, vec![88.0, 89.0, 90.0, 91.0, 92.0]);

    let dates: Vec<NaiveDate> = investigation_events().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2025, 2, 13), date(2025, 4, 16), date(2025, 4, 17)]);

    let values: Vec<&str> = analysis_summaries().iter().map(|s| s.value).collect();
    assert_eq!(values, vec!["7.2%", "$1.8B"]);
}

#[test]
fn test_overview_rows_join_on_year() {
    let rows = overview_rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].year, 2018);
    assert_eq!(rows[0].satisfaction, None);
    assert_eq!(rows[5].satisfaction, Some(92.0));
}

#[test]
fn test_chart_response_to_series() -> Result<()> {
    let body = r#"{"chart":{"result":[{
        "meta":{"gmtoffset":-14400},
        "timestamp":[1744810200,1744723800],
        "indicators":{
            "quote":[{"open":[580.0,590.0],"high":[585.0,595.0],"low":[570.0,580.0],
                      "close":[575.0,585.0],"volume":[1200000,900000]}],
            "adjclose":[{"adjclose":[574.1,584.2]}]
        }}],"error":null}}"#;
    let window = DateWindow::new(date(2025, 4, 1), date(2025, 4, 30));

    let series = parse_chart_response(body, "UNH", window, "http://localhost")?;

    // Sorted by date regardless of input order
    assert_eq!(series.len(), 2);
    assert_eq!(series.first().date, date(2025, 4, 15));
    assert_eq!(series.last().date, date(2025, 4, 16));
    assert_eq!(series.last().adjusted_close, 574.1);
    assert!(series.percent_change() < 0.0);
    Ok(())
}

#[test]
fn test_chart_response_outside_window_is_no_data() {
    let body = r#"{"chart":{"result":[{"timestamp":[1744723800],
        "indicators":{"quote":[{"open":[1.0],"high":[1.0],"low":[1.0],"close":[1.0],"volume":[1]}]}}],
        "error":null}}"#;

    let err = parse_chart_response(body, "UNH", may_2025(), "http://localhost").unwrap_err();
    assert!(matches!(err, MarketDataError::NoData { .. }));
}

#[test]
fn test_synthetic_source_is_deterministic() -> Result<()> {
    let a = SyntheticSource::with_config(7, 500.0).fetch("UNH", may_2025())?;
    let b = SyntheticSource::with_config(7, 500.0).fetch("UNH", may_2025())?;
    let c = SyntheticSource::with_config(8, 500.0).fetch("UNH", may_2025())?;

    assert_eq!(a.points(), b.points());
    assert_ne!(a.points(), c.points());
    assert!(a.points().windows(2).all(|w| w[0].date < w[1].date));
    assert!(matches!(a.source, SeriesSource::Synthetic { seed: 7 }));
    Ok(())
}

#[test]
fn test_snapshot_round_trip_plain_and_brotli() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let series = SyntheticSource::new().fetch("UNH", may_2025())?;

    for name in ["unh.json", "unh.json.br"] {
        let path = dir.path().join(name);
        write_snapshot(&path, &series)?;

        let loaded = read_snapshot(&path)?;
        assert_eq!(loaded.ticker, "UNH");
        assert_eq!(loaded.window, series.window);
        assert_eq!(loaded.points(), series.points());
        assert!(matches!(loaded.source, SeriesSource::Snapshot { .. }));
    }

    // The compressed file really is compressed
    let plain = std::fs::metadata(dir.path().join("unh.json"))?.len();
    let packed = std::fs::metadata(dir.path().join("unh.json.br"))?.len();
    assert!(packed < plain);
    Ok(())
}

#[test]
fn test_snapshot_source_serves_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("saved.json");
    let series = SyntheticSource::new().fetch("UNH", may_2025())?;
    write_snapshot(&path, &series)?;

    let source = SnapshotSource::new(&path);
    let other_window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 31));
    let loaded = source.fetch("UNH", other_window)?;
    assert_eq!(loaded.len(), series.len());

    let missing = SnapshotSource::new(dir.path().join("missing.json"));
    assert!(matches!(missing.fetch("UNH", may_2025()), Err(MarketDataError::Io(_))));
    Ok(())
}
