use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the vocabulary file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("vocabulary file not found: {}", .0.display())]
    DataSourceMissing(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
