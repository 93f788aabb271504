// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("syntax error in {path} at {line}:{column}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("directory walk failed: {0}")]
    Walk(String),

    #[error("failed to load grammar: {0}")]
    Grammar(String),

    #[error("invalid import query: {0}")]
    Query(String),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            source,
            path: path.into(),
        }
    }
}

// Keep the offending path when walkdir can tell us which one failed.
impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from);
        match (path, e.into_io_error()) {
            (Some(path), Some(source)) => Error::Io { source, path },
            (None, Some(source)) => Error::Io {
                source,
                path: PathBuf::from("<unknown>"),
            },
            (_, None) => Error::Walk("filesystem loop detected".to_string()),
        }
    }
}
