//! Raw file metadata and normalized, display-ready descriptors.
//!
//! # Pipeline Position
//!
//! ```text
//! Directory source
//!     ↓ RawFileEntry (name, byte size, modified millis)
//! FileDescriptorBuilder (this module)
//!     ↓ FileDescriptor (name, extension, size label, modified label)
//! Grid layout
//! ```

mod date;
mod size;

pub use date::{DEFAULT_DATE_PATTERN, DateFormat, DateFormatError, TimeZoneSetting};
pub use size::humanize_size;

use log::trace;

/// Unprocessed per-file metadata as reported by a directory source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFileEntry {
    name: String,
    byte_size: u64,
    modified_millis: i64,
}

impl RawFileEntry {
    /// Creates a raw entry.
    ///
    /// # Arguments
    ///
    /// * `name` - File name without any directory component.
    /// * `byte_size` - File length in bytes.
    /// * `modified_millis` - Last modification time in milliseconds since the Unix epoch.
    pub fn new(name: impl Into<String>, byte_size: u64, modified_millis: i64) -> Self {
        Self {
            name: name.into(),
            byte_size,
            modified_millis,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn modified_millis(&self) -> i64 {
        self.modified_millis
    }
}

/// A normalized, display-ready representation of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    name: String,
    extension: String,
    size_label: String,
    modified_label: String,
}

impl FileDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text after the last `.` of the name.
    ///
    /// See [`extract_extension`] for names without a dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn size_label(&self) -> &str {
        &self.size_label
    }

    pub fn modified_label(&self) -> &str {
        &self.modified_label
    }
}

/// Returns the last `.`-separated segment of a file name.
///
/// A name without any dot is returned whole, so `README` has the "extension"
/// `README`. A trailing dot yields an empty extension.
///
/// # Examples
///
/// ```
/// use filegrid_core::file::extract_extension;
///
/// assert_eq!(extract_extension("report.final.pdf"), "pdf");
/// assert_eq!(extract_extension("README"), "README");
/// assert_eq!(extract_extension("archive."), "");
/// ```
pub fn extract_extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Builds [`FileDescriptor`]s from [`RawFileEntry`] values.
///
/// Building is total and deterministic for a fixed [`DateFormat`].
#[derive(Debug, Clone, Default)]
pub struct FileDescriptorBuilder {
    date_format: DateFormat,
}

impl FileDescriptorBuilder {
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Normalizes a single raw entry.
    pub fn build(&self, entry: &RawFileEntry) -> FileDescriptor {
        let descriptor = FileDescriptor {
            name: entry.name.clone(),
            extension: extract_extension(&entry.name).to_string(),
            size_label: humanize_size(entry.byte_size),
            modified_label: self.date_format.format_millis(entry.modified_millis),
        };
        trace!(descriptor:?; "Built file descriptor");
        descriptor
    }

    /// Normalizes a sequence of entries, preserving their order.
    pub fn build_all<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a RawFileEntry>,
    ) -> Vec<FileDescriptor> {
        entries.into_iter().map(|entry| self.build(entry)).collect()
    }
}
