//! Archive extraction interface

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Unsupported archive type: {}", path.display())]
    UnsupportedArchiveType { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Unpacks an archive into a directory.
///
/// Extracting the same archive into the same directory twice must leave the
/// directory in the same state.
pub trait ArchiveExtractor: Send + Sync {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), ArchiveError>;
}
