//! Error types for rendering and splicing generated code.

use std::path::PathBuf;

use thiserror::Error;
use unc_common::config::ConfigError;

/// Errors that can occur while rendering or splicing the generated region.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Arity ceiling below one
    #[error("Invalid arity ceiling: {0} (must be at least 1)")]
    InvalidArity(usize),

    /// A marker line is absent from the source
    #[error("Generated region marker not found: {0}")]
    MissingMarker(&'static str),

    /// End marker precedes the begin marker
    #[error("End marker appears before the begin marker")]
    MarkersOutOfOrder,

    /// Second begin marker before the region was closed
    #[error("Begin marker repeated at line {line} before the region was closed")]
    DuplicateMarker {
        /// 1-based line number of the repeated marker
        line: usize,
    },

    /// Writing into the output buffer failed
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),

    /// IO error
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Source IO error
        source: std::io::Error,
    },

    /// Configuration could not be loaded or validated
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CodegenError {
    /// Wrap an IO error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
