//! FileGrid - lay out the files of a directory as a grid of labeled vertices.
//!
//! The work happens in two phases:
//!
//! 1. [`GridBuilder::prepare`] reads the directory through a
//!    [`DirectorySource`](source::DirectorySource), normalizes every entry into a
//!    [`FileDescriptor`](filegrid_core::file::FileDescriptor) and assigns it a grid
//!    cell. Nothing is mutated.
//! 2. [`GridBuilder::apply`] inserts one vertex per file into a
//!    [`DiagramRenderer`](render::DiagramRenderer) inside a single edit
//!    transaction and fits the view. Any failure rolls the transaction back.
//!
//! [`GridBuilder::run`] does both.

pub mod command;
pub mod config;
pub mod export;
pub mod label;
pub mod layout;
pub mod render;
pub mod source;

mod error;

pub use filegrid_core::{color, file, geometry};

pub use error::FileGridError;

use log::{debug, info, trace};

use filegrid_core::{
    file::{FileDescriptorBuilder, RawFileEntry},
    geometry::Bounds,
};

use config::AppConfig;
use label::{FileLabel, Vertex, VertexStyle};
use layout::{GridLayout, PlacedFile};
use render::{DiagramRenderer, EditScope};
use source::DirectorySource;

/// The outcome of a successful grid operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridReport {
    vertices: usize,
    view: Option<Bounds>,
}

impl GridReport {
    /// Number of vertices inserted.
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// The area the view was fitted to, `None` if nothing was inserted.
    pub fn view(&self) -> Option<Bounds> {
        self.view
    }
}

/// Descriptors with their placements, ready to be applied to a diagram.
#[derive(Debug, Clone)]
pub struct PreparedGrid {
    placed: Vec<PlacedFile>,
    style: VertexStyle,
}

impl PreparedGrid {
    pub fn placed(&self) -> &[PlacedFile] {
        &self.placed
    }

    pub fn style(&self) -> &VertexStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Union of all cell rectangles.
    pub fn bounds(&self) -> Option<Bounds> {
        layout::bounds(&self.placed)
    }

    /// Builds the vertex insertion requests, in grid order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.placed.iter().map(|placed| {
            Vertex::new(
                placed.placement().bounds(),
                FileLabel::from(placed.descriptor()),
                self.style.clone(),
            )
        })
    }
}

/// Builder for creating file grids.
///
/// # Examples
///
/// ```rust
/// use filegrid::{GridBuilder, export::svg::SvgCanvas, file::RawFileEntry};
///
/// let entries = vec![
///     RawFileEntry::new("a.txt", 10, 0),
///     RawFileEntry::new("b.txt", 20, 0),
/// ];
///
/// let builder = GridBuilder::default();
/// let grid = builder.prepare_entries(&entries).expect("valid default config");
///
/// let mut canvas = SvgCanvas::new();
/// let report = builder.apply(&grid, &mut canvas).expect("canvas accepts vertices");
/// assert_eq!(report.vertices(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GridBuilder {
    config: AppConfig,
}

impl GridBuilder {
    /// Create a new grid builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Phase 1: reads `source` and computes descriptors and placements.
    ///
    /// The configuration is validated before the directory is read, so an
    /// invalid grid never triggers any I/O.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::InvalidGrid`] or [`FileGridError::Config`] for
    /// an unusable configuration, and whatever the source reports if the
    /// directory cannot be read.
    pub fn prepare(&self, source: &dyn DirectorySource) -> Result<PreparedGrid, FileGridError> {
        let stage = self.stage()?;

        info!(source = source.describe(); "Collecting file entries");
        let entries = source.read_entries()?;

        Ok(stage.place(&entries))
    }

    /// Phase 1 over entries that have already been read.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::InvalidGrid`] or [`FileGridError::Config`] for
    /// an unusable configuration.
    pub fn prepare_entries(&self, entries: &[RawFileEntry]) -> Result<PreparedGrid, FileGridError> {
        Ok(self.stage()?.place(entries))
    }

    /// Phase 2: inserts the prepared grid into `renderer` as one transaction.
    ///
    /// An empty grid makes no renderer calls at all. On any error the
    /// transaction is rolled back and nothing remains in the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::Render`] if the renderer rejects a call.
    pub fn apply<R>(&self, grid: &PreparedGrid, renderer: &mut R) -> Result<GridReport, FileGridError>
    where
        R: DiagramRenderer + ?Sized,
    {
        if grid.is_empty() {
            info!("No files to place");
            return Ok(GridReport {
                vertices: 0,
                view: None,
            });
        }

        let mut scope = EditScope::begin(renderer)?;
        let mut inserted = 0;
        for vertex in grid.vertices() {
            trace!(name = vertex.label().name(); "Inserting vertex");
            scope.insert_vertex(vertex)?;
            inserted += 1;
        }
        let view = scope.fit()?;
        scope.commit()?;

        info!(vertices = inserted; "File grid created");
        Ok(GridReport {
            vertices: inserted,
            view,
        })
    }

    /// Runs both phases.
    ///
    /// # Errors
    ///
    /// See [`prepare`](Self::prepare) and [`apply`](Self::apply).
    pub fn run<R>(
        &self,
        source: &dyn DirectorySource,
        renderer: &mut R,
    ) -> Result<GridReport, FileGridError>
    where
        R: DiagramRenderer + ?Sized,
    {
        let grid = self.prepare(source)?;
        self.apply(&grid, renderer)
    }

    /// Validates the configuration into the pieces phase 1 needs.
    fn stage(&self) -> Result<Stage, FileGridError> {
        let layout = GridLayout::new(self.config.grid())?;
        let date_format = self
            .config
            .label()
            .date_format()
            .map_err(|err| FileGridError::Config(err.to_string()))?;
        let style = self
            .config
            .style()
            .vertex_style()
            .map_err(FileGridError::Config)?;

        debug!(
            columns = layout.columns(),
            date_pattern = date_format.pattern();
            "Grid configuration validated"
        );

        Ok(Stage {
            layout,
            descriptors: FileDescriptorBuilder::new(date_format),
            style,
        })
    }
}

/// Validated configuration for phase 1.
struct Stage {
    layout: GridLayout,
    descriptors: FileDescriptorBuilder,
    style: VertexStyle,
}

impl Stage {
    fn place(self, entries: &[RawFileEntry]) -> PreparedGrid {
        let descriptors = self.descriptors.build_all(entries);
        PreparedGrid {
            placed: self.layout.layout(descriptors),
            style: self.style,
        }
    }
}
