//! Documentation back-end reading JSON documentation snapshots
//!
//! A snapshot file holds a JSON array of [`RawClassDoc`] records, written by
//! a dialect-specific documentation tool next to the sources it describes.
//! Each back-end instance picks up the files ending in its own suffix, so a
//! source tree can carry one snapshot per dialect.

use crate::error::{Error, Result};
use crate::interfaces::DocBackend;
use crate::types::{link_class_docs, ClassDocMap, RawClassDoc, ScanRequest};
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use walkdir::WalkDir;

pub struct SnapshotDocBackend {
    name: String,
    suffix: String,
}

impl SnapshotDocBackend {
    pub fn new(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
        }
    }

    fn read_snapshots(&self, source_directory: &Path, records: &mut Vec<RawClassDoc>) -> Result<()> {
        if !source_directory.is_dir() {
            debug!("[{}] source root {:?} does not exist", self.name, source_directory);
            return Ok(());
        }

        for entry in WalkDir::new(source_directory).sort_by_file_name() {
            let entry = entry.map_err(|e| self.failure(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&self.suffix));
            if !matches {
                continue;
            }

            let contents = std::fs::read_to_string(entry.path())?;
            let mut snapshot: Vec<RawClassDoc> = serde_json::from_str(&contents)
                .map_err(|e| self.failure(format!("{}: {e}", entry.path().display())))?;
            records.append(&mut snapshot);
        }

        Ok(())
    }

    fn failure(&self, message: String) -> Error {
        Error::Backend {
            backend: self.name.clone(),
            message,
        }
    }
}

impl DocBackend for SnapshotDocBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self, requests: &[ScanRequest]) -> Result<ClassDocMap> {
        let mut records = Vec::new();

        for request in requests {
            let started = Instant::now();
            debug!("[{}] scanning {}", self.name, request.label());
            debug!("Sources: {:?}", request.source_directories());
            debug!("Classpath: {:?}", request.classpath());

            for source_directory in request.source_directories() {
                self.read_snapshots(source_directory, &mut records)?;
            }

            debug!("done in {} ms", started.elapsed().as_millis());
        }

        // Link once over every request: a superclass often comes from a different one
        Ok(link_class_docs(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArtifactCoordinate, PropertyDoc};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_snapshot(dir: &Path, file: &str, records: &[RawClassDoc]) {
        let path = dir.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_string(records).unwrap()).unwrap();
    }

    #[test]
    fn test_links_super_classes_across_scan_requests() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("local");
        let external = temp_dir.path().join("external");

        write_snapshot(
            &local,
            "org/example/ChildMojo.javadoc.json",
            &[RawClassDoc::new("org.example.ChildMojo").with_super_class("org.base.BaseMojo")],
        );
        write_snapshot(
            &external,
            "org/base/BaseMojo.javadoc.json",
            &[RawClassDoc::new("org.base.BaseMojo")
                .with_property(PropertyDoc::new("skip").with_comment("Skip execution."))],
        );

        let requests = vec![
            ScanRequest::Project {
                project_id: "org.example:plugin:jar:1.0".to_string(),
                source_directories: vec![local],
                classpath: vec![],
            },
            ScanRequest::Artifact {
                artifact: ArtifactCoordinate::new("org.base", "base", "1.0", "jar"),
                source_directory: external,
                classpath: vec![],
            },
        ];

        let docs = SnapshotDocBackend::new("java", ".javadoc.json")
            .scan(&requests)
            .unwrap();

        let parent = docs["org.example.ChildMojo"].super_class_doc().unwrap();
        assert_eq!(parent.fully_qualified_name, "org.base.BaseMojo");
        assert_eq!(parent.properties.len(), 1);
    }

    #[test]
    fn test_only_reads_own_suffix() {
        let temp_dir = TempDir::new().unwrap();
        write_snapshot(temp_dir.path(), "A.javadoc.json", &[RawClassDoc::new("org.example.A")]);
        write_snapshot(temp_dir.path(), "B.kdoc.json", &[RawClassDoc::new("org.example.B")]);

        let requests = vec![ScanRequest::Project {
            project_id: "p".to_string(),
            source_directories: vec![temp_dir.path().to_path_buf(), PathBuf::from("/does/not/exist")],
            classpath: vec![],
        }];

        let docs = SnapshotDocBackend::new("kotlin", ".kdoc.json").scan(&requests).unwrap();
        assert_eq!(docs.keys().collect::<Vec<_>>(), vec!["org.example.B"]);
    }

    #[test]
    fn test_malformed_snapshot_fails_the_backend() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Broken.javadoc.json"), "[{").unwrap();

        let requests = vec![ScanRequest::Project {
            project_id: "p".to_string(),
            source_directories: vec![temp_dir.path().to_path_buf()],
            classpath: vec![],
        }];

        let err = SnapshotDocBackend::new("java", ".javadoc.json")
            .scan(&requests)
            .unwrap_err();
        assert!(matches!(err, Error::Backend { ref backend, .. } if backend == "java"));
    }
}
