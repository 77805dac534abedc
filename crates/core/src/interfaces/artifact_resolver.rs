//! Artifact resolution interface

use crate::types::{ArtifactCoordinate, RemoteRepository};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("Artifact not found: {coordinate}")]
    NotFound { coordinate: String },

    #[error("Unable to resolve {coordinate}: {message}")]
    Transport { coordinate: String, message: String },
}

/// Locates artifacts in a repository
pub trait ArtifactResolver: Send + Sync {
    /// Build the coordinate of a classified variant of an artifact
    fn create_coordinate_with_classifier(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        kind: &str,
        classifier: &str,
    ) -> ArtifactCoordinate {
        ArtifactCoordinate::new(group_id, artifact_id, version, kind).with_classifier(classifier)
    }

    /// Resolve a coordinate to a local file
    fn resolve(
        &self,
        coordinate: &ArtifactCoordinate,
        local_repository: &Path,
        remote_repositories: &[RemoteRepository],
    ) -> Result<PathBuf, ResolutionError>;
}
