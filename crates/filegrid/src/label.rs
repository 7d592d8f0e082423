//! Vertex payloads handed to the diagram renderer.
//!
//! A [`Vertex`] bundles the cell bounds with a structured [`FileLabel`] and a
//! [`VertexStyle`]. Renderers pick whichever label rendering they support:
//! [`FileLabel::to_html`] for hosts with HTML labels, [`FileLabel::lines`] for
//! plain text. [`SvgCanvas`] uses either, depending on its [`LabelMode`], and
//! records [`VertexStyle::to_style_string`] on every vertex it draws.
//!
//! [`SvgCanvas`]: crate::export::svg::SvgCanvas
//! [`LabelMode`]: crate::export::svg::LabelMode

use std::fmt::Write;

use filegrid_core::{color::Color, file::FileDescriptor, geometry::Bounds};

/// The structured label of one file vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLabel {
    name: String,
    extension: String,
    size: String,
    modified: String,
}

impl FileLabel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn modified(&self) -> &str {
        &self.modified
    }

    /// Detail lines shown under the title.
    pub fn details(&self) -> [String; 3] {
        [
            format!("Extension: {}", self.extension),
            format!("Size: {}", self.size),
            format!("Modified: {}", self.modified),
        ]
    }

    /// Title followed by the detail lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        lines.push(self.name.clone());
        lines.extend(self.details());
        lines
    }

    /// Renders the label as an HTML block with escaped text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use filegrid::label::FileLabel;
    /// # use filegrid_core::file::{FileDescriptorBuilder, RawFileEntry};
    /// let descriptor = FileDescriptorBuilder::default().build(&RawFileEntry::new("a<b>.txt", 10, 0));
    /// let html = FileLabel::from(&descriptor).to_html("Arial", 12.0);
    ///
    /// assert!(html.contains("a&lt;b&gt;.txt"));
    /// assert!(html.contains("<div>Size: 10 Bytes</div>"));
    /// ```
    pub fn to_html(&self, font_family: &str, font_size: f32) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div style="font-family: {}; font-size: {}px; padding: 5px;">"#,
            escape_html(font_family),
            font_size
        );
        let _ = write!(
            html,
            r#"<div style="font-weight: bold; margin-bottom: 5px;">{}</div>"#,
            escape_html(&self.name)
        );
        for detail in self.details() {
            let _ = write!(html, "<div>{}</div>", escape_html(&detail));
        }
        html.push_str("</div>");
        html
    }
}

impl From<&FileDescriptor> for FileLabel {
    fn from(descriptor: &FileDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            extension: descriptor.extension().to_string(),
            size: descriptor.size_label().to_string(),
            modified: descriptor.modified_label().to_string(),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fixed visual style shared by every file vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStyle {
    fill_color: Color,
    stroke_color: Color,
    stroke_width: f32,
    rounded: bool,
    font_family: String,
    font_size: f32,
}

impl VertexStyle {
    /// Create a style with the given colors and default stroke, corners and font.
    pub fn new(fill_color: Color, stroke_color: Color) -> Self {
        Self {
            fill_color,
            stroke_color,
            stroke_width: 1.0,
            rounded: true,
            font_family: "Arial".to_string(),
            font_size: 12.0,
        }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn rounded(&self) -> bool {
        self.rounded
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Renders the style in the `key=value;` form used by mxGraph-based hosts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use filegrid::label::VertexStyle;
    /// # use filegrid_core::color::Color;
    /// let style = VertexStyle::new(Color::new("#f5f5f5").unwrap(), Color::new("#666666").unwrap());
    /// assert_eq!(
    ///     style.to_style_string(),
    ///     "rounded=1;whiteSpace=wrap;html=1;fillColor=#f5f5f5;strokeColor=#666666;"
    /// );
    /// ```
    pub fn to_style_string(&self) -> String {
        format!(
            "rounded={};whiteSpace=wrap;html=1;fillColor={};strokeColor={};",
            u8::from(self.rounded),
            self.fill_color.to_hex(),
            self.stroke_color.to_hex()
        )
    }
}

/// A request to create one rectangular vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    bounds: Bounds,
    label: FileLabel,
    style: VertexStyle,
}

impl Vertex {
    pub fn new(bounds: Bounds, label: FileLabel, style: VertexStyle) -> Self {
        Self {
            bounds,
            label,
            style,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> &FileLabel {
        &self.label
    }

    pub fn style(&self) -> &VertexStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use filegrid_core::file::{DateFormat, FileDescriptorBuilder, RawFileEntry, TimeZoneSetting};

    use super::*;

    fn label(name: &str, bytes: u64) -> FileLabel {
        let builder =
            FileDescriptorBuilder::new(DateFormat::new("%Y-%m-%d", TimeZoneSetting::Utc).unwrap());
        FileLabel::from(&builder.build(&RawFileEntry::new(name, bytes, 0)))
    }

    #[test]
    fn test_label_lines() {
        let lines = label("report.pdf", 2048).lines();
        assert_eq!(
            lines,
            [
                "report.pdf",
                "Extension: pdf",
                "Size: 2 KB",
                "Modified: 1970-01-01"
            ]
        );
    }

    #[test]
    fn test_label_html_structure() {
        let html = label("report.pdf", 2048).to_html("Arial", 12.0);
        assert!(html.starts_with(r#"<div style="font-family: Arial; font-size: 12px; padding: 5px;">"#));
        assert!(html.contains(r#"<div style="font-weight: bold; margin-bottom: 5px;">report.pdf</div>"#));
        assert!(html.contains("<div>Extension: pdf</div>"));
        assert!(html.contains("<div>Modified: 1970-01-01</div>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_style_string_square_corners() {
        let style = VertexStyle::new(Color::new("white").unwrap(), Color::new("black").unwrap())
            .with_rounded(false);
        assert_eq!(
            style.to_style_string(),
            "rounded=0;whiteSpace=wrap;html=1;fillColor=#ffffff;strokeColor=#000000;"
        );
    }
}
