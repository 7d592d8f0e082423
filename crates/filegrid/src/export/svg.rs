//! An in-memory diagram canvas that renders to SVG.
//!
//! [`SvgCanvas`] implements [`DiagramRenderer`] with real transaction
//! semantics: vertices inserted inside an update are staged, become visible
//! on commit and vanish on rollback. Nested updates and mutations outside an
//! update are rejected.
//!
//! Labels are drawn as SVG text by default. With [`LabelMode::Html`] each
//! label is the block from [`FileLabel::to_html`] inside a `foreignObject`,
//! which browsers and diagram hosts render like an HTML label. Every vertex
//! group also carries its [`VertexStyle::to_style_string`] in a `data-style`
//! attribute so hosts can restore the cell style on import.
//!
//! [`FileLabel::to_html`]: crate::label::FileLabel::to_html
//! [`VertexStyle::to_style_string`]: crate::label::VertexStyle::to_style_string

use std::{fs, io, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::{Blob, Text as SvgText, element as svg_element},
};

use filegrid_core::{
    color::Color,
    geometry::{Bounds, Insets},
};

use crate::{
    label::Vertex,
    render::{DiagramRenderer, RenderError},
};

/// Space between the cell border and its text.
const TEXT_PADDING: f32 = 5.0;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.4;

/// Corner radius of rounded cells, as a fraction of the shorter side.
const CORNER_RADIUS_RATIO: f32 = 0.1;

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// How vertex labels are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// One `tspan` per label line.
    #[default]
    Text,
    /// An XHTML block embedded in a `foreignObject`.
    Html,
}

#[derive(Debug, Default)]
struct Transaction {
    vertices: Vec<Vertex>,
    view: Option<Bounds>,
}

/// A diagram canvas holding committed vertices and at most one open update.
#[derive(Debug)]
pub struct SvgCanvas {
    vertices: Vec<Vertex>,
    view: Option<Bounds>,
    pending: Option<Transaction>,
    margin: Insets,
    background: Option<Color>,
    label_mode: LabelMode,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            view: None,
            pending: None,
            margin: Insets::uniform(20.0),
            background: None,
            label_mode: LabelMode::default(),
        }
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the space kept around the contents when fitting the view.
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn with_label_mode(mut self, label_mode: LabelMode) -> Self {
        self.label_mode = label_mode;
        self
    }

    /// Committed vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The committed view area, if the view has been fitted.
    pub fn view(&self) -> Option<Bounds> {
        self.view
    }

    /// Returns true while an update is open.
    pub fn is_updating(&self) -> bool {
        self.pending.is_some()
    }

    /// Union of committed and staged vertex bounds.
    fn content_bounds(&self) -> Option<Bounds> {
        let staged = self.pending.iter().flat_map(|tx| tx.vertices.iter());
        self.vertices
            .iter()
            .chain(staged)
            .map(Vertex::bounds)
            .reduce(|acc, b| acc.merge(&b))
    }

    /// Renders the committed diagram.
    ///
    /// The view box is the fitted view if there is one, otherwise the
    /// contents plus margin.
    pub fn render_document(&self) -> Document {
        let view = self
            .view
            .or_else(|| {
                self.vertices
                    .iter()
                    .map(Vertex::bounds)
                    .reduce(|acc, b| acc.merge(&b))
                    .map(|b| b.add_padding(self.margin))
            })
            .unwrap_or_default();

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width())
            .set("height", view.height());

        if let Some(background) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", view.min_x())
                    .set("y", view.min_y())
                    .set("width", view.width())
                    .set("height", view.height())
                    .set("fill", background.to_hex())
                    .set("fill-opacity", background.alpha()),
            );
        }

        for vertex in &self.vertices {
            doc = doc.add(render_vertex(vertex, self.label_mode));
        }

        debug!(
            vertices = self.vertices.len(),
            label_mode:? = self.label_mode;
            "SVG document rendered"
        );
        doc
    }

    /// Renders the committed diagram to an SVG string.
    pub fn to_svg_string(&self) -> String {
        self.render_document().to_string()
    }

    /// Writes the committed diagram to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), io::Error> {
        let path = path.as_ref();
        info!(file_name = path.display().to_string(); "Writing SVG file");

        fs::write(path, self.to_svg_string()).inspect_err(|err| {
            error!(file_name = path.display().to_string(), err:%; "Failed to write SVG file");
        })
    }
}

impl DiagramRenderer for SvgCanvas {
    fn begin_update(&mut self) -> Result<(), RenderError> {
        if self.pending.is_some() {
            return Err(RenderError::TransactionOpen);
        }
        self.pending = Some(Transaction::default());
        Ok(())
    }

    fn end_update(&mut self) -> Result<(), RenderError> {
        let tx = self.pending.take().ok_or(RenderError::NoTransaction)?;
        debug!(vertices = tx.vertices.len(); "Committing staged vertices");

        self.vertices.extend(tx.vertices);
        if tx.view.is_some() {
            self.view = tx.view;
        }
        Ok(())
    }

    fn rollback_update(&mut self) {
        if let Some(tx) = self.pending.take() {
            debug!(vertices = tx.vertices.len(); "Discarding staged vertices");
        }
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> Result<(), RenderError> {
        if !vertex.bounds().is_well_formed() {
            return Err(RenderError::Rejected(format!(
                "invalid bounds for `{}`",
                vertex.label().name()
            )));
        }

        let tx = self.pending.as_mut().ok_or(RenderError::NoTransaction)?;
        tx.vertices.push(vertex);
        Ok(())
    }

    fn fit(&mut self) -> Result<Option<Bounds>, RenderError> {
        let fitted = self.content_bounds().map(|b| b.add_padding(self.margin));
        match self.pending.as_mut() {
            Some(tx) => tx.view = fitted,
            None => self.view = fitted,
        }
        Ok(fitted)
    }
}

fn corner_radius(bounds: Bounds) -> f32 {
    bounds.width().min(bounds.height()) * CORNER_RADIUS_RATIO
}

/// Renders one vertex as a rectangle with its label in the top-left corner.
fn render_vertex(vertex: &Vertex, label_mode: LabelMode) -> svg_element::Group {
    let bounds = vertex.bounds();
    let style = vertex.style();

    let mut rect = svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("fill", style.fill_color().to_hex())
        .set("fill-opacity", style.fill_color().alpha())
        .set("stroke", style.stroke_color().to_hex())
        .set("stroke-opacity", style.stroke_color().alpha())
        .set("stroke-width", style.stroke_width());
    if style.rounded() {
        rect = rect.set("rx", corner_radius(bounds));
    }

    let group = svg_element::Group::new()
        .set("class", "file-vertex")
        .set("data-style", style.to_style_string())
        .add(rect);

    match label_mode {
        LabelMode::Text => group.add(render_text_label(vertex)),
        LabelMode::Html => group.add(render_html_label(vertex)),
    }
}

fn render_text_label(vertex: &Vertex) -> svg_element::Text {
    let bounds = vertex.bounds();
    let style = vertex.style();
    let text_x = bounds.min_x() + TEXT_PADDING;
    let line_height = style.font_size() * LINE_HEIGHT;

    let mut text = svg_element::Text::new("")
        .set("x", text_x)
        .set("y", bounds.min_y() + TEXT_PADDING)
        .set("font-family", style.font_family())
        .set("font-size", style.font_size());

    for (i, line) in vertex.label().lines().into_iter().enumerate() {
        let mut tspan = svg_element::TSpan::new("")
            .set("x", text_x)
            .set("dy", line_height)
            .add(SvgText::new(line));
        if i == 0 {
            tspan = tspan.set("font-weight", "bold");
        }
        text = text.add(tspan);
    }
    text
}

/// The label's HTML block, clipped to the cell.
fn render_html_label(vertex: &Vertex) -> svg_element::ForeignObject {
    let bounds = vertex.bounds();
    let style = vertex.style();
    let html = vertex
        .label()
        .to_html(style.font_family(), style.font_size());

    svg_element::ForeignObject::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .add(Blob::new(format!(
            r#"<div xmlns="{XHTML_NAMESPACE}">{html}</div>"#
        )))
}
