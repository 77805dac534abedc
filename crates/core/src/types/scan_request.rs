use std::path::{Path, PathBuf};

use super::coordinate::ArtifactCoordinate;

/// A unit of documentation work: source roots plus the classpath they need
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    /// Unpacked sources of one external artifact
    Artifact {
        artifact: ArtifactCoordinate,
        source_directory: PathBuf,
        classpath: Vec<PathBuf>,
    },
    /// Source roots of one project in the current build
    Project {
        project_id: String,
        source_directories: Vec<PathBuf>,
        classpath: Vec<PathBuf>,
    },
}

impl ScanRequest {
    pub fn source_directories(&self) -> &[PathBuf] {
        match self {
            ScanRequest::Artifact {
                source_directory, ..
            } => std::slice::from_ref(source_directory),
            ScanRequest::Project {
                source_directories, ..
            } => source_directories,
        }
    }

    pub fn classpath(&self) -> &[PathBuf] {
        match self {
            ScanRequest::Artifact { classpath, .. } | ScanRequest::Project { classpath, .. } => {
                classpath
            }
        }
    }

    /// Short label for logs
    pub fn label(&self) -> String {
        match self {
            ScanRequest::Artifact { artifact, .. } => artifact.id(),
            ScanRequest::Project { project_id, .. } => project_id.clone(),
        }
    }

    pub fn contains_source_root(&self, path: &Path) -> bool {
        self.source_directories().iter().any(|dir| dir == path)
    }
}
