//! Integration tests for the GridBuilder API
//!
//! These tests drive both phases through the public API with in-memory and
//! filesystem collaborators.

use std::{cell::Cell, fs};

use float_cmp::assert_approx_eq;
use tempfile::tempdir;

use filegrid::{
    FileGridError, GridBuilder,
    config::{AppConfig, GridConfig, LabelConfig, SourceConfig, StyleConfig},
    export::svg::SvgCanvas,
    file::{RawFileEntry, TimeZoneSetting},
    geometry::Bounds,
    label::Vertex,
    layout::LayoutError,
    render::{DiagramRenderer, RenderError},
    source::{DirectorySource, EntryOrder, FsDirectory},
};

/// Serves a fixed list of entries and counts how often it was read.
struct MemorySource {
    entries: Vec<RawFileEntry>,
    reads: Cell<usize>,
}

impl MemorySource {
    fn new(names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| RawFileEntry::new(*name, 1536, 1_709_812_800_000))
            .collect();
        Self {
            entries,
            reads: Cell::new(0),
        }
    }
}

impl DirectorySource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn read_entries(&self) -> Result<Vec<RawFileEntry>, FileGridError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.entries.clone())
    }
}

/// Counts every renderer call.
#[derive(Default)]
struct CallCounter {
    calls: usize,
}

impl DiagramRenderer for CallCounter {
    fn begin_update(&mut self) -> Result<(), RenderError> {
        self.calls += 1;
        Ok(())
    }

    fn end_update(&mut self) -> Result<(), RenderError> {
        self.calls += 1;
        Ok(())
    }

    fn rollback_update(&mut self) {
        self.calls += 1;
    }

    fn insert_vertex(&mut self, _vertex: Vertex) -> Result<(), RenderError> {
        self.calls += 1;
        Ok(())
    }

    fn fit(&mut self) -> Result<Option<Bounds>, RenderError> {
        self.calls += 1;
        Ok(None)
    }
}

/// An [`SvgCanvas`] that rejects the insert after `accept` successful ones.
struct FlakyCanvas {
    inner: SvgCanvas,
    accept: usize,
}

impl DiagramRenderer for FlakyCanvas {
    fn begin_update(&mut self) -> Result<(), RenderError> {
        self.inner.begin_update()
    }

    fn end_update(&mut self) -> Result<(), RenderError> {
        self.inner.end_update()
    }

    fn rollback_update(&mut self) {
        self.inner.rollback_update();
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> Result<(), RenderError> {
        if self.accept == 0 {
            return Err(RenderError::Rejected("canvas full".to_string()));
        }
        self.accept -= 1;
        self.inner.insert_vertex(vertex)
    }

    fn fit(&mut self) -> Result<Option<Bounds>, RenderError> {
        self.inner.fit()
    }
}

fn utc_config(columns: usize) -> AppConfig {
    AppConfig::new(
        GridConfig::default(),
        StyleConfig::default(),
        LabelConfig::new("%Y-%m-%d", TimeZoneSetting::Utc),
        SourceConfig::default(),
    )
    .with_columns(columns)
}

#[test]
fn test_four_files_fill_one_row_and_start_another() {
    let source = MemorySource::new(&["a.txt", "b.pdf", "c.rs", "d"]);
    let builder = GridBuilder::new(utc_config(3));

    let grid = builder.prepare(&source).expect("valid configuration");
    assert_eq!(grid.len(), 4);

    let rows: Vec<_> = grid.placed().iter().map(|p| p.placement().row()).collect();
    assert_eq!(rows, [0, 0, 0, 1]);

    let names: Vec<_> = grid.placed().iter().map(|p| p.descriptor().name()).collect();
    assert_eq!(names, ["a.txt", "b.pdf", "c.rs", "d"]);

    let last = grid.placed()[3].placement();
    assert_eq!(last.column(), 0);
    assert_approx_eq!(f32, last.x(), 50.0);
    assert_approx_eq!(f32, last.y(), 50.0 + 100.0 + 30.0);

    let mut canvas = SvgCanvas::new();
    let report = builder.apply(&grid, &mut canvas).expect("canvas accepts vertices");

    assert_eq!(report.vertices(), 4);
    assert_eq!(canvas.vertices().len(), 4);
    assert_eq!(canvas.vertices()[1].label().extension(), "pdf");
    assert_eq!(canvas.vertices()[3].label().extension(), "d");
    assert_eq!(canvas.vertices()[0].label().modified(), "2024-03-07");
    assert_eq!(report.view(), canvas.view());
}

#[test]
fn test_empty_source_makes_no_renderer_calls() {
    let source = MemorySource::new(&[]);
    let mut renderer = CallCounter::default();

    let report = GridBuilder::default()
        .run(&source, &mut renderer)
        .expect("empty directory is not an error");

    assert_eq!(report.vertices(), 0);
    assert_eq!(report.view(), None);
    assert_eq!(renderer.calls, 0);
}

#[test]
fn test_zero_columns_rejected_before_reading() {
    let source = MemorySource::new(&["a.txt"]);
    let builder = GridBuilder::new(utc_config(0));

    let err = builder.prepare(&source).unwrap_err();

    assert!(matches!(err, FileGridError::InvalidGrid(LayoutError::ZeroColumns)));
    assert_eq!(source.reads.get(), 0);
}

#[test]
fn test_invalid_date_pattern_is_config_error() {
    let config = AppConfig::new(
        GridConfig::default(),
        StyleConfig::default(),
        LabelConfig::new("%J", TimeZoneSetting::Utc),
        SourceConfig::default(),
    );
    let source = MemorySource::new(&["a.txt"]);

    let err = GridBuilder::new(config).prepare(&source).unwrap_err();

    assert!(matches!(err, FileGridError::Config(_)));
    assert_eq!(source.reads.get(), 0);
}

#[test]
fn test_render_error_rolls_back_whole_batch() {
    let source = MemorySource::new(&["a", "b", "c", "d", "e"]);
    let mut canvas = FlakyCanvas {
        inner: SvgCanvas::new(),
        accept: 2,
    };

    let err = GridBuilder::default().run(&source, &mut canvas).unwrap_err();

    assert!(matches!(err, FileGridError::Render(RenderError::Rejected(_))));
    assert!(err.user_message().starts_with("Error creating file grid: Render error"));
    assert!(canvas.inner.vertices().is_empty());
    assert!(!canvas.inner.is_updating());
    assert_eq!(canvas.inner.view(), None);
}

#[test]
fn test_renderer_with_open_transaction_is_left_untouched() {
    let source = MemorySource::new(&["a"]);
    let mut canvas = SvgCanvas::new();
    canvas.begin_update().unwrap();

    let err = GridBuilder::default().run(&source, &mut canvas).unwrap_err();

    assert!(matches!(err, FileGridError::Render(RenderError::TransactionOpen)));
    assert!(canvas.is_updating());
}

#[test]
fn test_filesystem_directory_to_svg() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    fs::write(dir.path().join("archive.tar.gz"), vec![0u8; 1536]).unwrap();
    fs::write(dir.path().join("Makefile"), "all:").unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    let source = FsDirectory::new(dir.path(), EntryOrder::Name);
    let mut canvas = SvgCanvas::new();
    let report = GridBuilder::default()
        .run(&source, &mut canvas)
        .expect("Failed to build grid");

    assert_eq!(report.vertices(), 3);

    let names: Vec<_> = canvas.vertices().iter().map(|v| v.label().name()).collect();
    assert_eq!(names, ["Makefile", "archive.tar.gz", "notes.txt"]);
    assert_eq!(canvas.vertices()[1].label().size(), "1.5 KB");
    assert_eq!(canvas.vertices()[2].label().size(), "5 Bytes");

    let output = dir.path().join("grid.svg");
    canvas.write_to(&output).expect("Failed to write SVG");
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("Extension: gz"));
    assert!(svg.contains("Extension: Makefile"));
}

#[test]
fn test_missing_directory_reports_access_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let source = FsDirectory::new(dir.path().join("gone"), EntryOrder::Name);
    let mut canvas = SvgCanvas::new();

    let err = GridBuilder::default().run(&source, &mut canvas).unwrap_err();

    assert!(matches!(err, FileGridError::DirectoryAccess(_)));
    assert!(canvas.vertices().is_empty());
}
