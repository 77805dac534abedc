//! Annotation scanner reading a pre-built JSON index
//!
//! The index is a JSON array of annotated-class records written next to the
//! compiled classes by whatever tool processed the annotations.

use crate::error::{Error, Result};
use crate::interfaces::AnnotationScanner;
use crate::types::{AnnotatedClass, AnnotatedClasses, Dependency, ProjectRef};
use std::path::Path;
use tracing::debug;

pub struct AnnotationIndexScanner {
    index_file_name: String,
}

impl AnnotationIndexScanner {
    pub fn new(index_file_name: impl Into<String>) -> Self {
        Self {
            index_file_name: index_file_name.into(),
        }
    }
}

impl AnnotationScanner for AnnotationIndexScanner {
    fn scan(
        &self,
        classes_directory: &Path,
        _dependencies: &[Dependency],
        project: &ProjectRef,
    ) -> Result<AnnotatedClasses> {
        let index_path = classes_directory.join(&self.index_file_name);
        if !index_path.is_file() {
            debug!(
                "No annotation index at {:?} for {}, nothing to extract",
                index_path,
                project.id()
            );
            return Ok(AnnotatedClasses::new());
        }

        let contents = std::fs::read_to_string(&index_path)?;
        let classes: Vec<AnnotatedClass> = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to parse annotation index {}: {e}",
                index_path.display()
            ))
        })?;

        debug!("Read {} annotated classes from {:?}", classes.len(), index_path);

        Ok(classes
            .into_iter()
            .map(|class| (class.class_name.clone(), class))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtifactCoordinate;
    use tempfile::TempDir;

    fn project(dir: &Path) -> ProjectRef {
        ProjectRef {
            coordinate: ArtifactCoordinate::new("org.example", "plugin", "1.0", "maven-plugin"),
            basedir: dir.to_path_buf(),
            build_directory: dir.join("target"),
            output_directory: dir.join("target").join("classes"),
            compile_source_roots: vec![],
            artifacts: vec![],
        }
    }

    #[test]
    fn test_missing_index_yields_no_classes() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = AnnotationIndexScanner::new("mojo-annotations.json");

        let classes = scanner
            .scan(temp_dir.path(), &[], &project(temp_dir.path()))
            .unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn test_reads_index_keyed_by_class_name() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("mojo-annotations.json"),
            r#"[
                {
                    "class_name": "org.example.EchoMojo",
                    "artifact": { "group_id": "org.example", "artifact_id": "plugin", "version": "1.0" },
                    "mojo": { "goal": "echo" }
                }
            ]"#,
        )
        .unwrap();

        let scanner = AnnotationIndexScanner::new("mojo-annotations.json");
        let classes = scanner
            .scan(temp_dir.path(), &[], &project(temp_dir.path()))
            .unwrap();

        assert_eq!(classes.len(), 1);
        assert_eq!(classes["org.example.EchoMojo"].mojo.as_ref().unwrap().goal, "echo");
    }

    #[test]
    fn test_malformed_index_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("mojo-annotations.json"), "{ not json").unwrap();

        let scanner = AnnotationIndexScanner::new("mojo-annotations.json");
        let result = scanner.scan(temp_dir.path(), &[], &project(temp_dir.path()));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
