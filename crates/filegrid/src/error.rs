//! Error types for FileGrid operations.
//!
//! This module provides the main error type [`FileGridError`]. Every failure
//! aborts the whole grid operation, so a single value describes what went
//! wrong; its `Display` output combines the error kind with the underlying
//! message.

use std::io;

use thiserror::Error;

use crate::{layout::LayoutError, render::RenderError};

/// The main error type for FileGrid operations.
#[derive(Debug, Error)]
pub enum FileGridError {
    /// The directory could not be opened or enumerated (cancelled picker,
    /// missing directory, permission denied).
    #[error("Directory access error: {0}")]
    DirectoryAccess(String),

    /// Metadata for a single file could not be read.
    #[error("File read error: {name}: {message}")]
    FileRead { name: String, message: String },

    /// The diagram renderer rejected a mutation.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),
}

impl FileGridError {
    /// Create a new `FileRead` error for the named file.
    pub fn file_read(name: impl Into<String>, message: impl ToString) -> Self {
        Self::FileRead {
            name: name.into(),
            message: message.to_string(),
        }
    }

    /// The single message shown to the user when the grid command fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use filegrid::FileGridError;
    ///
    /// let err = FileGridError::DirectoryAccess("picker cancelled".to_string());
    /// assert_eq!(
    ///     err.user_message(),
    ///     "Error creating file grid: Directory access error: picker cancelled"
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        format!("Error creating file grid: {self}")
    }
}
