use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an export run.
///
/// Each variant renders as the single line printed to the console.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The input file could not be opened or read.
    #[error("Error: File '{}' not found.", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed JSON.
    #[error("Error: File '{}' is not valid JSON. {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top level is not a list.
    #[error("Error: The JSON file must contain a list of conversations.")]
    InvalidShape,

    /// Anything else, e.g. a failed write halfway through the archive.
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl ExportError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl From<eyre::Report> for ExportError {
    fn from(report: eyre::Report) -> Self {
        Self::Unexpected(format!("{report:#}"))
    }
}
