//! The extraction pipeline
//!
//! Locator → Aggregator → Resolver → Assembler, each stage completing before
//! the next starts.

pub mod aggregator;
pub mod assembler;
pub mod hierarchy;
pub mod locator;
pub mod report;

pub use aggregator::{merge_backend_outputs, DocumentationAggregator, SourcePlan};
pub use assembler::{Assembly, DescriptorAssembler, INJECTED_COMPONENTS};
pub use hierarchy::{ancestry, find_execute, gather_components, gather_parameters, resolve, Inherited};
pub use locator::{locate, LocatedSources};
pub use report::{ExtractionReport, ExtractionWarning};

use crate::{
    config::ExtractorConfig,
    error::Result,
    interfaces::{AnnotationScanner, ArchiveExtractor, ArtifactResolver, DocBackend},
    services::{AnnotationIndexScanner, LocalRepositoryResolver, SnapshotDocBackend, SourcesArchiveExtractor},
    types::{AnnotatedClasses, ClassDocMap, ExtractionRequest, MojoDescriptor},
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Output of one extraction run
#[derive(Debug)]
pub struct Extraction {
    /// Descriptors ordered by implementation class name
    pub descriptors: Vec<MojoDescriptor>,
    /// Merged documentation of every scanned class
    pub class_docs: ClassDocMap,
    pub report: ExtractionReport,
}

/// Documentation gathered without assembling descriptors
#[derive(Debug)]
pub struct Documentation {
    pub classes: AnnotatedClasses,
    pub class_docs: ClassDocMap,
    pub report: ExtractionReport,
}

/// Runs the extraction pipeline against a set of collaborators
pub struct DescriptorExtractor {
    annotation_scanner: Box<dyn AnnotationScanner>,
    resolver: Box<dyn ArtifactResolver>,
    archive_extractor: Box<dyn ArchiveExtractor>,
    backends: Vec<Box<dyn DocBackend>>,
    config: ExtractorConfig,
}

impl DescriptorExtractor {
    /// Create an extractor backed by the file-based collaborators
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor backed by the file-based collaborators using `config`
    pub fn with_config(config: ExtractorConfig) -> Self {
        let backends = config
            .backends
            .iter()
            .map(|backend| {
                Box::new(SnapshotDocBackend::new(&backend.name, &backend.suffix)) as Box<dyn DocBackend>
            })
            .collect();

        Self {
            annotation_scanner: Box::new(AnnotationIndexScanner::new(&config.annotation_index)),
            resolver: Box::new(LocalRepositoryResolver::new()),
            archive_extractor: Box::new(SourcesArchiveExtractor::new()),
            backends,
            config,
        }
    }

    /// Create an extractor with explicit collaborators.
    ///
    /// Back-ends run in the given order; a later back-end wins for a class
    /// several of them document.
    pub fn with_collaborators(
        annotation_scanner: Box<dyn AnnotationScanner>,
        resolver: Box<dyn ArtifactResolver>,
        archive_extractor: Box<dyn ArchiveExtractor>,
        backends: Vec<Box<dyn DocBackend>>,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            annotation_scanner,
            resolver,
            archive_extractor,
            backends,
            config,
        }
    }

    /// Run the full pipeline and assemble descriptors
    pub fn execute(&self, request: &ExtractionRequest) -> Result<Extraction> {
        let start = Instant::now();
        info!("Extracting goal descriptors for {}", request.project.id());

        let Documentation {
            mut classes,
            class_docs,
            mut report,
        } = self.document(request)?;

        resolve(&mut classes, &class_docs);

        let assembler = DescriptorAssembler::new().with_injected_components(&self.config.injected_components);
        let assembly = assembler.assemble(&classes, &request.plugin)?;
        report.warnings.extend(assembly.warnings);

        info!(
            "Extracted {} goal descriptors in {}ms",
            assembly.descriptors.len(),
            start.elapsed().as_millis()
        );

        Ok(Extraction {
            descriptors: assembly.descriptors,
            class_docs,
            report,
        })
    }

    /// Scan annotations, locate sources and aggregate documentation
    pub fn document(&self, request: &ExtractionRequest) -> Result<Documentation> {
        let classes = self.annotation_scanner.scan(
            &request.project.output_directory,
            &request.dependencies,
            &request.project,
        )?;
        debug!("Found {} annotated classes", classes.len());

        let located = locate(request.project.artifact_id(), &request.siblings, classes.values());
        debug!(
            "Located {} sibling projects and {} external artifacts",
            located.sibling_projects.len(),
            located.external_artifacts.len()
        );

        let aggregator = DocumentationAggregator::new(
            self.resolver.as_ref(),
            self.archive_extractor.as_ref(),
            &self.backends,
            &self.config,
        );
        let plan = aggregator.plan(request, &located)?;
        let class_docs = aggregator.aggregate(&plan.scan_requests)?;

        let warnings = plan
            .missing_sources
            .iter()
            .map(|artifact| ExtractionWarning::MissingSources {
                artifact: artifact.clone(),
            })
            .collect();

        if self.backends.is_empty() {
            warn!("No documentation backends configured, descriptors will carry no documentation");
        }

        Ok(Documentation {
            classes,
            class_docs,
            report: ExtractionReport {
                scan_requests: plan.scan_requests,
                missing_sources: plan.missing_sources,
                warnings,
            },
        })
    }
}

impl Default for DescriptorExtractor {
    fn default() -> Self {
        Self::new()
    }
}
