//! Collaborator interfaces
//!
//! The extraction engine talks to annotation scanning, artifact resolution,
//! archive extraction and documentation scanning only through these traits,
//! so each collaborator can be swapped or faked in tests.

pub mod annotation_scanner;
pub mod archive_extractor;
pub mod artifact_resolver;
pub mod doc_backend;

pub use annotation_scanner::AnnotationScanner;
pub use archive_extractor::{ArchiveError, ArchiveExtractor};
pub use artifact_resolver::{ArtifactResolver, ResolutionError};
pub use doc_backend::DocBackend;
