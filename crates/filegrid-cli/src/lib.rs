//! CLI logic for the FileGrid tool.
//!
//! The binary stands in for a diagram host: it composes a menu registry,
//! registers the "create file grid" command on it, invokes the command
//! against an SVG canvas and writes the canvas to disk.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use filegrid::{
    FileGridError, GridBuilder, GridReport,
    command::{self, CreateFileGrid, MenuRegistry},
    export::svg::{LabelMode, SvgCanvas},
    source::FsDirectory,
};

/// Run the FileGrid CLI application
///
/// Draws every file of `args.directory` and writes the resulting SVG to
/// `args.output`. Nothing is written if the grid cannot be built.
///
/// # Errors
///
/// Returns `FileGridError` for:
/// - Configuration loading errors
/// - Directory and file metadata errors
/// - Invalid grid settings
/// - Rendering errors
/// - Output I/O errors
pub fn run(args: &Args) -> Result<GridReport, FileGridError> {
    info!(
        directory = args.directory,
        output_path = args.output;
        "Creating file grid"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(columns) = args.columns {
        app_config = app_config.with_columns(columns);
    }

    let background = app_config
        .style()
        .background_color()
        .map_err(FileGridError::Config)?;
    let label_mode = if app_config.style().html_labels() {
        LabelMode::Html
    } else {
        LabelMode::Text
    };
    let source = FsDirectory::new(&args.directory, app_config.source().order());

    let mut registry = MenuRegistry::new();
    command::register_file_grid(&mut registry, source, GridBuilder::new(app_config))?;

    let mut canvas = SvgCanvas::new()
        .with_background(background)
        .with_label_mode(label_mode);
    let report = registry.invoke(CreateFileGrid::<FsDirectory>::ID, &mut canvas)?;

    canvas.write_to(&args.output)?;

    info!(output_file = args.output, vertices = report.vertices(); "SVG exported successfully");

    Ok(report)
}
