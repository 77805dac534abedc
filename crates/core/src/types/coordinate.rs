use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identity of a build artifact in a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Artifact type (packaging), e.g. `jar`
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

fn default_kind() -> String {
    "jar".to_string()
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            kind: kind.into(),
            classifier: None,
        }
    }

    /// Copy of this coordinate carrying the given classifier
    pub fn with_classifier(&self, classifier: impl Into<String>) -> Self {
        Self {
            classifier: Some(classifier.into()),
            ..self.clone()
        }
    }

    /// `group:artifact:type[:classifier]:version`
    pub fn id(&self) -> String {
        match self.classifier.as_deref().filter(|c| !c.is_empty()) {
            Some(classifier) => format!(
                "{}:{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.kind, classifier, self.version
            ),
            None => format!(
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.kind, self.version
            ),
        }
    }

    /// Whether the artifact holds test classes (classifier `tests`)
    pub fn is_test_artifact(&self) -> bool {
        self.classifier
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("tests"))
    }

    /// Classifier of the matching human-readable sources artifact
    pub fn sources_classifier(&self) -> &'static str {
        if self.is_test_artifact() {
            "test-sources"
        } else {
            "sources"
        }
    }

    /// File extension used for the artifact type
    pub fn extension(&self) -> &str {
        match self.kind.as_str() {
            "maven-plugin" | "test-jar" | "ejb" | "ejb-client" | "java-source" | "javadoc" => "jar",
            other => other,
        }
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A resolved classpath entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub coordinate: ArtifactCoordinate,
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_includes_classifier_only_when_present() {
        let coordinate = ArtifactCoordinate::new("org.example", "lib", "1.0", "jar");
        assert_eq!(coordinate.id(), "org.example:lib:jar:1.0");

        let sources = coordinate.with_classifier("sources");
        assert_eq!(sources.id(), "org.example:lib:jar:sources:1.0");
        assert_eq!(sources.to_string(), "org.example:lib:1.0");
    }

    #[test]
    fn test_sources_classifier_for_test_artifacts() {
        let main = ArtifactCoordinate::new("g", "a", "1", "jar");
        assert_eq!(main.sources_classifier(), "sources");

        let tests = main.with_classifier("TESTS");
        assert!(tests.is_test_artifact());
        assert_eq!(tests.sources_classifier(), "test-sources");
    }

    #[test]
    fn test_extension_maps_jar_like_types() {
        assert_eq!(ArtifactCoordinate::new("g", "a", "1", "maven-plugin").extension(), "jar");
        assert_eq!(ArtifactCoordinate::new("g", "a", "1", "tar.gz").extension(), "tar.gz");
    }
}
