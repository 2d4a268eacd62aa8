use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing failures at the I/O boundary.
///
/// The classification pipeline itself never fails; only reading input,
/// validating arguments and writing output can.
#[derive(Debug, Error)]
pub enum BriefError {
    /// Bad argument, missing/wrong file, or empty content
    #[error("{0}")]
    InputValidation(String),

    /// Input file or archive could not be opened or parsed
    #[error("{message}")]
    FileRead {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output directory or file could not be written
    #[error("Failed to write output file in: {}", .dir.display())]
    OutputWrite {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BriefError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::InputValidation(message.into())
    }

    pub(crate) fn read_failed(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::FileRead {
            message: format!("Failed to read input file: {}", path.display()),
            source: source.into(),
        }
    }

    pub(crate) fn docx_invalid(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::FileRead {
            message: format!("Failed to parse .docx file: {}", path.display()),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BriefError>;
