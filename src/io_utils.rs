//! Error reporting for the `shapify` binary.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ShapyterError;

/// Failure of a CLI run, rendered as one actionable line.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}", format_io_error(.operation, .path, .source))]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{context}: {}", cli_hint(.source))]
    Shapyter {
        context: &'static str,
        #[source]
        source: ShapyterError,
    },

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        CliError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<ShapyterError> for CliError {
    fn from(source: ShapyterError) -> Self {
        CliError::Shapyter {
            context: "shapify",
            source,
        }
    }
}

/// Attach a short description of the failing step to a library error.
pub trait CliContext<T> {
    fn cli_context(self, context: &'static str) -> Result<T, CliError>;
}

impl<T> CliContext<T> for Result<T, ShapyterError> {
    fn cli_context(self, context: &'static str) -> Result<T, CliError> {
        self.map_err(|source| CliError::Shapyter { context, source })
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    let suggestion = match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
        io::ErrorKind::InvalidData => "The file is not valid UTF-8 text.",
        _ => "Check the path and permissions.",
    };
    format!("Error {operation} '{}': {err}. {suggestion}", path.display())
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &ShapyterError) -> String {
    use ShapyterError::*;
    match err {
        Range { value, bits } => {
            format!("{value} does not fit in {bits} bits. Use a wider --bits or check the input.")
        }
        InvalidValue(text) => {
            format!("'{text}' is not an integer. Use decimal or 0x-prefixed hex.")
        }
        Exhausted { capacity } => format!(
            "only {capacity} distinct values can be shaped. Use a palette with more colors or durations."
        ),
        WidthMismatch { left, right } => {
            format!("cannot compare {left}-bit and {right}-bit matrices.")
        }
        EmptyWidth => "zero-width matrices have no similarity.".to_string(),
        Config(msg) => format!("{msg}. Invalid palette."),
        Io(io) => format!("{io}"),
        Json(e) => format!("{e}. Palette must be a JSON object with forms, colors and durations."),
    }
}
