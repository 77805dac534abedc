use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::coordinate::{ArtifactCoordinate, Dependency};

/// A project taking part in the build, either the one being processed or a
/// sibling module built in the same run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub coordinate: ArtifactCoordinate,
    pub basedir: PathBuf,
    /// Build output root (`target`)
    pub build_directory: PathBuf,
    /// Compiled classes directory (`target/classes`)
    pub output_directory: PathBuf,
    #[serde(default)]
    pub compile_source_roots: Vec<PathBuf>,
    /// Resolved dependency artifacts of this project
    #[serde(default)]
    pub artifacts: Vec<Dependency>,
}

impl ProjectRef {
    pub fn id(&self) -> String {
        self.coordinate.id()
    }

    pub fn artifact_id(&self) -> &str {
        &self.coordinate.artifact_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
}

/// Reference to the plugin descriptor the goals belong to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_prefix: Option<String>,
}

/// Everything one extraction run needs to know about the build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub project: ProjectRef,
    /// Other projects of the current build
    #[serde(default)]
    pub siblings: Vec<ProjectRef>,
    /// Plugin dependencies, used as classpath for external sources
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    pub local_repository: PathBuf,
    #[serde(default)]
    pub remote_repositories: Vec<RemoteRepository>,
    #[serde(default)]
    pub plugin: PluginRef,
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}
