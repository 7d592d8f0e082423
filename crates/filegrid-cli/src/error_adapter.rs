//! Error adapter for converting FileGridError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use filegrid::FileGridError;

/// Adapter rendering a [`FileGridError`] through miette.
///
/// The displayed message is the single user-facing message of the error.
pub struct ErrorAdapter<'a>(pub &'a FileGridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.user_message())
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FileGridError::DirectoryAccess(_) => "filegrid::directory",
            FileGridError::FileRead { .. } => "filegrid::file",
            FileGridError::Render(_) => "filegrid::render",
            FileGridError::InvalidGrid(_) => "filegrid::grid",
            FileGridError::Config(_) => "filegrid::config",
            FileGridError::Io(_) => "filegrid::io",
            FileGridError::UnknownCommand(_) | FileGridError::DuplicateCommand(_) => {
                "filegrid::command"
            }
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FileGridError::DirectoryAccess(_) => "check that the directory exists and is readable",
            FileGridError::InvalidGrid(_) => {
                "columns must be at least 1, cell sizes and gaps must be finite and non-negative, \
                 and each cell size plus its gap must be positive"
            }
            FileGridError::Config(_) => {
                "see the `[grid]`, `[style]`, `[label]` and `[source]` configuration sections"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use filegrid::{layout::LayoutError, render::RenderError};

    use super::*;

    #[test]
    fn test_display_is_user_message() {
        let err = FileGridError::DirectoryAccess("picker cancelled".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Error creating file grid: Directory access error: picker cancelled"
        );
    }

    #[test]
    fn test_codes() {
        let cases = [
            (
                FileGridError::DirectoryAccess("x".to_string()),
                "filegrid::directory",
            ),
            (FileGridError::file_read("a", "b"), "filegrid::file"),
            (
                FileGridError::Render(RenderError::NoTransaction),
                "filegrid::render",
            ),
            (
                FileGridError::InvalidGrid(LayoutError::ZeroColumns),
                "filegrid::grid",
            ),
            (FileGridError::Config("x".to_string()), "filegrid::config"),
            (
                FileGridError::UnknownCommand("x".to_string()),
                "filegrid::command",
            ),
        ];

        for (err, expected) in &cases {
            let code = ErrorAdapter(err).code().map(|c| c.to_string());
            assert_eq!(code.as_deref(), Some(*expected));
        }
    }

    #[test]
    fn test_help_only_for_actionable_errors() {
        let grid = FileGridError::InvalidGrid(LayoutError::ZeroColumns);
        assert!(ErrorAdapter(&grid).help().is_some());

        let render = FileGridError::Render(RenderError::TransactionOpen);
        assert!(ErrorAdapter(&render).help().is_none());
    }

    #[test]
    fn test_zero_step_help_names_gap() {
        let err = FileGridError::InvalidGrid(LayoutError::ZeroStep { axis: "horizontal" });
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().map(|c| c.to_string()).as_deref(), Some("filegrid::grid"));
        let help = adapter.help().map(|h| h.to_string()).unwrap();
        assert!(help.contains("cell size plus its gap must be positive"));
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = FileGridError::InvalidGrid(LayoutError::ZeroColumns);
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("filegrid::grid"));
        assert!(out.contains("Error creating file grid"));
    }
}
