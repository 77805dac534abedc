//! Resolver for artifacts already present in a Maven-layout local repository

use crate::interfaces::{ArtifactResolver, ResolutionError};
use crate::types::{ArtifactCoordinate, RemoteRepository};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looks artifacts up under
/// `<repo>/<group path>/<artifact>/<version>/<artifact>-<version>[-<classifier>].<ext>`.
///
/// Nothing is downloaded; remote repositories are only reported in logs.
#[derive(Debug, Default)]
pub struct LocalRepositoryResolver;

impl LocalRepositoryResolver {
    pub fn new() -> Self {
        Self
    }

    /// Path of an artifact inside a local repository
    pub fn artifact_path(local_repository: &Path, coordinate: &ArtifactCoordinate) -> PathBuf {
        let mut path = local_repository.to_path_buf();
        for segment in coordinate.group_id.split('.') {
            path.push(segment);
        }
        path.push(&coordinate.artifact_id);
        path.push(&coordinate.version);

        let file_name = match coordinate.classifier.as_deref().filter(|c| !c.is_empty()) {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                coordinate.artifact_id,
                coordinate.version,
                classifier,
                coordinate.extension()
            ),
            None => format!(
                "{}-{}.{}",
                coordinate.artifact_id,
                coordinate.version,
                coordinate.extension()
            ),
        };
        path.push(file_name);
        path
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(
        &self,
        coordinate: &ArtifactCoordinate,
        local_repository: &Path,
        remote_repositories: &[RemoteRepository],
    ) -> Result<PathBuf, ResolutionError> {
        let path = Self::artifact_path(local_repository, coordinate);
        debug!("Resolving {} at {:?}", coordinate.id(), path);

        if !path.exists() {
            if !remote_repositories.is_empty() {
                let ids: Vec<&str> = remote_repositories.iter().map(|r| r.id.as_str()).collect();
                debug!(
                    "{} not in local repository; remote repositories [{}] are not consulted",
                    coordinate.id(),
                    ids.join(", ")
                );
            }
            return Err(ResolutionError::NotFound {
                coordinate: coordinate.id(),
            });
        }

        if !path.is_file() {
            return Err(ResolutionError::Transport {
                coordinate: coordinate.id(),
                message: format!("{} is not a regular file", path.display()),
            });
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sources_coordinate() -> ArtifactCoordinate {
        ArtifactCoordinate::new("org.example.tools", "base", "2.1", "jar").with_classifier("sources")
    }

    #[test]
    fn test_artifact_path_follows_repository_layout() {
        let path = LocalRepositoryResolver::artifact_path(Path::new("/repo"), &sources_coordinate());
        assert_eq!(
            path,
            PathBuf::from("/repo/org/example/tools/base/2.1/base-2.1-sources.jar")
        );
    }

    #[test]
    fn test_missing_artifact_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = LocalRepositoryResolver::new();

        let err = resolver
            .resolve(&sources_coordinate(), temp_dir.path(), &[])
            .unwrap_err();
        assert!(matches!(err, ResolutionError::NotFound { .. }));
    }

    #[test]
    fn test_directory_in_place_of_file_is_transport_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = LocalRepositoryResolver::artifact_path(temp_dir.path(), &sources_coordinate());
        std::fs::create_dir_all(&path).unwrap();

        let err = LocalRepositoryResolver::new()
            .resolve(&sources_coordinate(), temp_dir.path(), &[])
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Transport { .. }));
    }

    #[test]
    fn test_resolves_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = LocalRepositoryResolver::artifact_path(temp_dir.path(), &sources_coordinate());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"archive").unwrap();

        let resolved = LocalRepositoryResolver::new()
            .resolve(&sources_coordinate(), temp_dir.path(), &[])
            .unwrap();
        assert_eq!(resolved, path);
    }
}
