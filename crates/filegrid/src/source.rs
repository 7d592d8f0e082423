//! Directory sources: where raw file entries come from.
//!
//! A [`DirectorySource`] reads one directory in a single pass and returns
//! either every regular file it contains or one error. Subdirectories are
//! never descended into.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, info, trace};
use serde::Deserialize;

use filegrid_core::file::RawFileEntry;

use crate::FileGridError;

/// The order in which entries are handed to the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// Sorted by file name, byte-wise.
    #[default]
    Name,
    /// Whatever order the operating system enumerates. Varies across filesystems.
    Enumeration,
}

/// A one-shot supplier of [`RawFileEntry`] values.
pub trait DirectorySource {
    /// Human-readable description of the source, used in logs.
    fn describe(&self) -> String;

    /// Reads every regular file of the directory.
    ///
    /// # Errors
    ///
    /// Returns [`FileGridError::DirectoryAccess`] if the directory cannot be
    /// opened or enumerated, and [`FileGridError::FileRead`] if metadata for
    /// one of its files cannot be read. No partial listing is returned.
    fn read_entries(&self) -> Result<Vec<RawFileEntry>, FileGridError>;
}

/// A [`DirectorySource`] over a directory of the local filesystem.
#[derive(Debug, Clone)]
pub struct FsDirectory {
    path: PathBuf,
    order: EntryOrder,
}

impl FsDirectory {
    pub fn new(path: impl Into<PathBuf>, order: EntryOrder) -> Self {
        Self {
            path: path.into(),
            order,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entry(&self, entry: fs::DirEntry) -> Result<Option<RawFileEntry>, FileGridError> {
        let name = entry_name(&entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(|err| FileGridError::file_read(&name, err))?;
        if !file_type.is_file() {
            trace!(name; "Skipping non-file entry");
            return Ok(None);
        }

        let metadata = entry
            .metadata()
            .map_err(|err| FileGridError::file_read(&name, err))?;
        let modified = metadata
            .modified()
            .map_err(|err| FileGridError::file_read(&name, err))?;

        Ok(Some(RawFileEntry::new(
            name,
            metadata.len(),
            epoch_millis(modified),
        )))
    }
}

impl DirectorySource for FsDirectory {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_entries(&self) -> Result<Vec<RawFileEntry>, FileGridError> {
        info!(path = self.describe(); "Reading directory");

        let dir_access =
            |err: std::io::Error| FileGridError::DirectoryAccess(format!("{}: {err}", self.path.display()));

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(dir_access)? {
            if let Some(raw) = self.read_entry(entry.map_err(dir_access)?)? {
                entries.push(raw);
            }
        }

        if self.order == EntryOrder::Name {
            entries.sort_by(|a, b| a.name().cmp(b.name()));
        }

        debug!(files = entries.len(), order:? = self.order; "Directory read");
        Ok(entries)
    }
}

/// The display name of an entry. Bytes that are not valid UTF-8 become U+FFFD.
fn entry_name(raw: &OsStr) -> String {
    let name = raw.to_string_lossy().into_owned();
    if raw.to_str().is_none() {
        debug!(name = name.as_str(), raw:?; "File name is not valid UTF-8, replaced invalid bytes");
    }
    name
}

/// Milliseconds since the Unix epoch, negative for earlier times.
fn epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|millis| -millis)
            .unwrap_or(i64::MIN),
    }
}
