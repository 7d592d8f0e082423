//! Configuration types for FileGrid.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so an empty TOML document yields the classic 3-column grid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`GridConfig`] - Origin, cell size, gaps and column count.
//! - [`StyleConfig`] - Vertex colors, corners and font.
//! - [`LabelConfig`] - How modification dates are rendered.
//! - [`SourceConfig`] - How directory entries are ordered.
//!
//! # Example
//!
//! ```
//! # use filegrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.grid().columns(), 3);
//! assert!(config.style().vertex_style().is_ok());
//! ```

use serde::Deserialize;

use filegrid_core::{
    color::Color,
    file::{DEFAULT_DATE_PATTERN, DateFormat, DateFormatError, TimeZoneSetting},
};

use crate::{label::VertexStyle, source::EntryOrder};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    grid: GridConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    label: LabelConfig,

    #[serde(default)]
    source: SourceConfig,
}

impl AppConfig {
    pub fn new(
        grid: GridConfig,
        style: StyleConfig,
        label: LabelConfig,
        source: SourceConfig,
    ) -> Self {
        Self {
            grid,
            style,
            label,
            source,
        }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the label configuration.
    pub fn label(&self) -> &LabelConfig {
        &self.label
    }

    /// Returns the source configuration.
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Returns a copy of this configuration with a different column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.grid.columns = columns;
        self
    }
}

/// Grid geometry. Values are not validated here; see
/// [`GridLayout::new`](crate::layout::GridLayout::new).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    origin_x: f32,
    origin_y: f32,
    cell_width: f32,
    cell_height: f32,
    horizontal_gap: f32,
    vertical_gap: f32,
    columns: usize,
}

impl GridConfig {
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        cell_width: f32,
        cell_height: f32,
        horizontal_gap: f32,
        vertical_gap: f32,
        columns: usize,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
            horizontal_gap,
            vertical_gap,
            columns,
        }
    }

    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            cell_width: 200.0,
            cell_height: 100.0,
            horizontal_gap: 30.0,
            vertical_gap: 30.0,
            columns: 3,
        }
    }
}

/// Visual styling for generated vertices and the canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    fill_color: String,
    stroke_color: String,
    stroke_width: f32,
    rounded: bool,
    font_family: String,
    font_size: f32,

    /// Canvas background, transparent when unset.
    background_color: Option<String>,

    /// Draw labels as embedded HTML instead of SVG text.
    html_labels: bool,
}

impl StyleConfig {
    /// Builds the [`VertexStyle`] described by this section.
    ///
    /// # Errors
    ///
    /// Returns an error if a color string cannot be parsed.
    pub fn vertex_style(&self) -> Result<VertexStyle, String> {
        let fill = Color::new(&self.fill_color)
            .map_err(|err| format!("Invalid fill color in config: {err}"))?;
        let stroke = Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))?;

        Ok(VertexStyle::new(fill, stroke)
            .with_stroke_width(self.stroke_width)
            .with_rounded(self.rounded)
            .with_font(self.font_family.clone(), self.font_size))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn html_labels(&self) -> bool {
        self.html_labels
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color: "#f5f5f5".to_string(),
            stroke_color: "#666666".to_string(),
            stroke_width: 1.0,
            rounded: true,
            font_family: "Arial".to_string(),
            font_size: 12.0,
            background_color: None,
            html_labels: false,
        }
    }
}

/// Label rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// `strftime` pattern for the modification date.
    date_format: String,

    /// `local`, `utc` or a fixed offset such as `+02:00`.
    time_zone: TimeZoneSetting,
}

impl LabelConfig {
    pub fn new(date_format: impl Into<String>, time_zone: TimeZoneSetting) -> Self {
        Self {
            date_format: date_format.into(),
            time_zone,
        }
    }

    /// Returns the validated [`DateFormat`].
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError::InvalidPattern`] for an unusable pattern.
    pub fn date_format(&self) -> Result<DateFormat, DateFormatError> {
        DateFormat::new(self.date_format.clone(), self.time_zone)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_PATTERN.to_string(),
            time_zone: TimeZoneSetting::Local,
        }
    }
}

/// Directory source settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    order: EntryOrder,
}

impl SourceConfig {
    pub fn new(order: EntryOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> EntryOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_matches_classic_layout() {
        let grid = GridConfig::default();
        assert_eq!(grid.origin_x(), 50.0);
        assert_eq!(grid.origin_y(), 50.0);
        assert_eq!(grid.cell_width(), 200.0);
        assert_eq!(grid.cell_height(), 100.0);
        assert_eq!(grid.horizontal_gap(), 30.0);
        assert_eq!(grid.vertical_gap(), 30.0);
        assert_eq!(grid.columns(), 3);
    }

    #[test]
    fn test_with_columns() {
        let config = AppConfig::default().with_columns(5);
        assert_eq!(config.grid().columns(), 5);
    }

    #[test]
    fn test_default_label_uses_short_date() {
        let format = LabelConfig::default().date_format().unwrap();
        assert_eq!(format.pattern(), DEFAULT_DATE_PATTERN);
        assert_eq!(format.zone(), TimeZoneSetting::Local);
    }

    #[test]
    fn test_invalid_fill_color() {
        let style = StyleConfig {
            fill_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.vertex_style().unwrap_err();
        assert!(err.contains("fill color"));
    }

    #[test]
    fn test_background_color_unset_by_default() {
        assert_eq!(StyleConfig::default().background_color(), Ok(None));
    }
}
