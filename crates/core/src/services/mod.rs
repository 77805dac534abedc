//! Default collaborator implementations
//!
//! These adapters back the interface traits with plain files: a JSON
//! annotation index, a Maven-layout local repository, jar and tar archives and
//! JSON documentation snapshots.

pub mod annotation_index_scanner;
pub mod local_repository_resolver;
pub mod snapshot_doc_backend;
pub mod sources_archive_extractor;

pub use annotation_index_scanner::AnnotationIndexScanner;
pub use local_repository_resolver::LocalRepositoryResolver;
pub use snapshot_doc_backend::SnapshotDocBackend;
pub use sources_archive_extractor::SourcesArchiveExtractor;
