//! Turns located sources into scan requests and merges back-end output

use super::locator::LocatedSources;
use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::interfaces::{ArchiveError, ArchiveExtractor, ArtifactResolver, DocBackend, ResolutionError};
use crate::types::{ArtifactCoordinate, ClassDocMap, ExtractionRequest, ProjectRef, ScanRequest};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Scan requests built for one extraction run
#[derive(Debug, Default)]
pub struct SourcePlan {
    pub scan_requests: Vec<ScanRequest>,
    /// External artifacts for which no sources artifact exists
    pub missing_sources: Vec<ArtifactCoordinate>,
}

/// Gathers source documentation for every class that needs it
pub struct DocumentationAggregator<'a> {
    resolver: &'a dyn ArtifactResolver,
    archive_extractor: &'a dyn ArchiveExtractor,
    backends: &'a [Box<dyn DocBackend>],
    config: &'a ExtractorConfig,
}

impl<'a> DocumentationAggregator<'a> {
    pub fn new(
        resolver: &'a dyn ArtifactResolver,
        archive_extractor: &'a dyn ArchiveExtractor,
        backends: &'a [Box<dyn DocBackend>],
        config: &'a ExtractorConfig,
    ) -> Self {
        Self {
            resolver,
            archive_extractor,
            backends,
            config,
        }
    }

    /// Build scan requests in order: external artifacts, sibling projects,
    /// then the current project
    pub fn plan(&self, request: &ExtractionRequest, located: &LocatedSources<'_>) -> Result<SourcePlan> {
        let mut plan = SourcePlan::default();

        for artifact in &located.external_artifacts {
            match self.artifact_scan_request(request, artifact)? {
                Some(scan_request) => plan.scan_requests.push(scan_request),
                None => plan.missing_sources.push(artifact.clone()),
            }
        }

        for project in &located.sibling_projects {
            plan.scan_requests.push(self.project_scan_request(project));
        }

        plan.scan_requests.push(self.project_scan_request(&request.project));

        debug!("Planned {} scan requests", plan.scan_requests.len());
        Ok(plan)
    }

    /// Fetch and unpack the sources of an external artifact.
    ///
    /// Returns `None` when the repository has no sources artifact for it.
    pub fn artifact_scan_request(
        &self,
        request: &ExtractionRequest,
        artifact: &ArtifactCoordinate,
    ) -> Result<Option<ScanRequest>> {
        let classifier = artifact.sources_classifier();
        let sources = self.resolver.create_coordinate_with_classifier(
            &artifact.group_id,
            &artifact.artifact_id,
            &artifact.version,
            &artifact.kind,
            classifier,
        );

        let archive = match self.resolver.resolve(
            &sources,
            &request.local_repository,
            &request.remote_repositories,
        ) {
            Ok(path) => path,
            Err(ResolutionError::NotFound { .. }) => {
                warn!(
                    "Unable to get sources artifact for {}; javadoc tags (@since, @deprecated and comments) won't be available.",
                    artifact
                );
                return Ok(None);
            }
            Err(err) => {
                return Err(Error::extraction(
                    format!("Error while fetching sources of {artifact}"),
                    err,
                ));
            }
        };

        if !archive.exists() {
            debug!("Resolved sources {} does not exist, skipping", archive.display());
            return Ok(None);
        }

        let destination = self.extraction_directory(request, artifact, classifier);
        fs::create_dir_all(&destination)?;

        match self.archive_extractor.extract(&archive, &destination) {
            Ok(()) => {}
            Err(err @ ArchiveError::UnsupportedArchiveType { .. }) => {
                return Err(Error::extraction(
                    format!("Unsupported sources archive for {artifact}"),
                    err,
                ));
            }
            Err(ArchiveError::Io(err)) => {
                return Err(Error::extraction(
                    format!("Error while unpacking sources of {artifact}"),
                    err,
                ));
            }
        }

        info!("Unpacked sources of {} into {}", artifact, destination.display());

        Ok(Some(ScanRequest::Artifact {
            artifact: artifact.clone(),
            source_directory: destination,
            classpath: request.dependencies.iter().map(|dep| dep.file.clone()).collect(),
        }))
    }

    /// `<build dir>/<sources dir>/<group>/<artifact>/<version>/<classifier>`
    fn extraction_directory(
        &self,
        request: &ExtractionRequest,
        artifact: &ArtifactCoordinate,
        classifier: &str,
    ) -> PathBuf {
        request
            .project
            .build_directory
            .join(&self.config.sources_directory)
            .join(&artifact.group_id)
            .join(&artifact.artifact_id)
            .join(&artifact.version)
            .join(classifier)
    }

    /// Scan request over a project's compile source roots.
    ///
    /// The project's generated-sources directory is added when it exists.
    pub fn project_scan_request(&self, project: &ProjectRef) -> ScanRequest {
        let mut source_directories = project.compile_source_roots.clone();

        let generated = project.build_directory.join(&self.config.generated_sources);
        if generated.exists() && !source_directories.contains(&generated) {
            debug!("Adding generated sources {}", generated.display());
            source_directories.push(generated);
        }

        ScanRequest::Project {
            project_id: project.id(),
            source_directories,
            classpath: project.artifacts.iter().map(|dep| dep.file.clone()).collect(),
        }
    }

    /// Run every back-end over the scan requests and merge the results
    pub fn aggregate(&self, scan_requests: &[ScanRequest]) -> Result<ClassDocMap> {
        let mut outputs = Vec::with_capacity(self.backends.len());
        for backend in self.backends {
            let docs = backend.scan(scan_requests)?;
            debug!("Backend '{}' documented {} classes", backend.name(), docs.len());
            outputs.push(docs);
        }
        Ok(merge_backend_outputs(outputs))
    }
}

/// Overlay back-end outputs; for a class documented by several back-ends
/// the later one wins
pub fn merge_backend_outputs(outputs: impl IntoIterator<Item = ClassDocMap>) -> ClassDocMap {
    let mut merged = ClassDocMap::new();
    for output in outputs {
        merged.extend(output);
    }
    merged
}
