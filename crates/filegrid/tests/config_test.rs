//! Integration tests for loading `AppConfig` from TOML.

use filegrid::{
    FileGridError, GridBuilder,
    config::AppConfig,
    file::RawFileEntry,
    source::EntryOrder,
};

#[test]
fn test_empty_document_yields_defaults() {
    let config: AppConfig = toml::from_str("").expect("empty config is valid");

    assert_eq!(config.grid().columns(), 3);
    assert_eq!(config.source().order(), EntryOrder::Name);
    assert!(config.style().vertex_style().is_ok());
    assert!(config.label().date_format().is_ok());
    assert!(!config.style().html_labels());
}

#[test]
fn test_full_document() {
    let config: AppConfig = toml::from_str(
        r##"
        [grid]
        origin_x = 0.0
        origin_y = 10.0
        cell_width = 120.0
        cell_height = 80.0
        horizontal_gap = 5.0
        vertical_gap = 15.0
        columns = 2

        [style]
        fill_color = "lightblue"
        stroke_color = "#003366"
        stroke_width = 2.0
        rounded = false
        font_family = "Helvetica"
        font_size = 10.0
        background_color = "white"
        html_labels = true

        [label]
        date_format = "%Y-%m-%d"
        time_zone = "+02:00"

        [source]
        order = "enumeration"
        "##,
    )
    .expect("valid config");

    assert_eq!(config.grid().columns(), 2);
    assert_eq!(config.grid().cell_width(), 120.0);
    assert_eq!(config.source().order(), EntryOrder::Enumeration);

    let style = config.style().vertex_style().expect("valid colors");
    assert!(!style.rounded());
    assert_eq!(style.font_family(), "Helvetica");
    assert_eq!(style.stroke_color().to_hex(), "#003366");
    assert!(config.style().background_color().unwrap().is_some());
    assert!(config.style().html_labels());

    // 2024-03-07T23:00:00Z is already March 8th at +02:00.
    let grid = GridBuilder::new(config)
        .prepare_entries(&[RawFileEntry::new("a.txt", 1, 1_709_852_400_000)])
        .expect("valid configuration");
    assert_eq!(grid.placed()[0].descriptor().modified_label(), "2024-03-08");
    assert_eq!(grid.placed()[0].placement().y(), 10.0);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: AppConfig = toml::from_str("[grid]\ncolumns = 5\n").unwrap();

    assert_eq!(config.grid().columns(), 5);
    assert_eq!(config.grid().cell_width(), 200.0);
    assert_eq!(config.grid().origin_x(), 50.0);
}

#[test]
fn test_invalid_time_zone_rejected() {
    let result: Result<AppConfig, _> = toml::from_str("[label]\ntime_zone = \"mars\"\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_color_surfaces_on_prepare() {
    let config: AppConfig = toml::from_str("[style]\nfill_color = \"not-a-color\"\n").unwrap();

    let err = GridBuilder::new(config).prepare_entries(&[]).unwrap_err();
    assert!(matches!(err, FileGridError::Config(_)));
}
