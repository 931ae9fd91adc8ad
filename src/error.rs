//! Error types for listing operations

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can stop a listing.
///
/// Usage errors come from argument parsing. The remaining variants are fatal
/// filesystem or output failures; in strict mode the first one ends the run.
#[derive(Error, Debug)]
pub enum LsError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("cannot open directory '{}': {source}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl LsError {
    pub fn open_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenDir {
            path: path.into(),
            source,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// True for bad command-line input, false for runtime failures.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::OpenDir { path, .. } | Self::Stat { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}
