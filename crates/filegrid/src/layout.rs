//! Grid layout engine.
//!
//! Assigns every descriptor a cell in a fixed-column grid, filling rows left
//! to right and top to bottom in input order.
//!
//! ```text
//!  origin
//!    ┌──────┐ h_gap ┌──────┐ h_gap ┌──────┐
//!    │  0   │       │  1   │       │  2   │
//!    └──────┘       └──────┘       └──────┘
//!     v_gap
//!    ┌──────┐
//!    │  3   │   ...
//!    └──────┘
//! ```
//!
//! Placement is pure arithmetic on the index, so the layout carries no state
//! between cells. Input order is preserved exactly; whatever order the
//! directory source produced is the order of the cells.

use log::debug;
use thiserror::Error;

use filegrid_core::{
    file::FileDescriptor,
    geometry::{Bounds, Point, Size},
};

use crate::config::GridConfig;

/// Errors raised when a [`GridConfig`] cannot describe a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("origin must be finite")]
    InvalidOrigin,

    #[error("{axis} step is zero; cell size plus gap must be positive")]
    ZeroStep { axis: &'static str },
}

/// The computed grid position and size of one descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    index: usize,
    row: usize,
    column: usize,
    bounds: Bounds,
}

impl Placement {
    /// Position of the descriptor in the input sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Left edge of the cell.
    pub fn x(&self) -> f32 {
        self.bounds.min_x()
    }

    /// Top edge of the cell.
    pub fn y(&self) -> f32 {
        self.bounds.min_y()
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A descriptor together with its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFile {
    descriptor: FileDescriptor,
    placement: Placement,
}

impl PlacedFile {
    pub fn descriptor(&self) -> &FileDescriptor {
        &self.descriptor
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// A validated fixed-column grid.
///
/// Construction is the only place a [`GridConfig`] is checked, so a zero
/// column count never reaches the index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    origin: Point,
    cell: Size,
    step: Point,
    columns: usize,
}

impl GridLayout {
    /// Validates a grid configuration.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::ZeroColumns`] if `columns` is 0.
    /// - [`LayoutError::InvalidDimension`] if a cell size or gap is negative or not finite.
    /// - [`LayoutError::ZeroStep`] if a cell size and its gap are both 0.
    /// - [`LayoutError::InvalidOrigin`] if the origin is not finite.
    pub fn new(config: &GridConfig) -> Result<Self, LayoutError> {
        if config.columns() == 0 {
            return Err(LayoutError::ZeroColumns);
        }

        let dimensions = [
            ("cell_width", config.cell_width()),
            ("cell_height", config.cell_height()),
            ("horizontal_gap", config.horizontal_gap()),
            ("vertical_gap", config.vertical_gap()),
        ];
        if let Some((field, value)) = dimensions
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(LayoutError::InvalidDimension { field, value });
        }

        // Distinct cells need distinct corners on both axes.
        let step = Point::new(
            config.cell_width() + config.horizontal_gap(),
            config.cell_height() + config.vertical_gap(),
        );
        if step.x() <= 0.0 {
            return Err(LayoutError::ZeroStep { axis: "horizontal" });
        }
        if step.y() <= 0.0 {
            return Err(LayoutError::ZeroStep { axis: "vertical" });
        }

        let origin = Point::new(config.origin_x(), config.origin_y());
        if !origin.is_finite() {
            return Err(LayoutError::InvalidOrigin);
        }

        Ok(Self {
            origin,
            cell: Size::new(config.cell_width(), config.cell_height()),
            step,
            columns: config.columns(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Computes the placement of the cell at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use filegrid::{config::GridConfig, layout::GridLayout};
    /// let grid = GridLayout::new(&GridConfig::default()).unwrap();
    ///
    /// let fourth = grid.placement(3);
    /// assert_eq!((fourth.row(), fourth.column()), (1, 0));
    /// assert_eq!((fourth.x(), fourth.y()), (50.0, 180.0));
    /// ```
    pub fn placement(&self, index: usize) -> Placement {
        let column = index % self.columns;
        let row = index / self.columns;

        let offset = Point::new(
            column as f32 * self.step.x(),
            row as f32 * self.step.y(),
        );
        let top_left = self.origin.add_point(offset);

        Placement {
            index,
            row,
            column,
            bounds: Bounds::new_from_top_left(top_left, self.cell),
        }
    }

    /// Places every descriptor, preserving input order.
    pub fn layout(&self, descriptors: Vec<FileDescriptor>) -> Vec<PlacedFile> {
        let placed: Vec<PlacedFile> = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| PlacedFile {
                descriptor,
                placement: self.placement(index),
            })
            .collect();

        debug!(
            cells = placed.len(),
            rows = placed.len().div_ceil(self.columns);
            "Grid laid out"
        );
        placed
    }
}

/// Returns the union of all placement rectangles, or `None` for an empty grid.
pub fn bounds<'a>(placed: impl IntoIterator<Item = &'a PlacedFile>) -> Option<Bounds> {
    placed
        .into_iter()
        .map(|p| p.placement.bounds())
        .reduce(|acc, b| acc.merge(&b))
}
