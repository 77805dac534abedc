pub mod annotated;
pub mod class_doc;
pub mod coordinate;
pub mod descriptor;
pub mod project;
pub mod scan_request;

// Re-export commonly used types
pub use annotated::{
    AnnotatedClass, AnnotatedClasses, ComponentSpec, DocText, ExecuteSpec, InstantiationStrategy,
    MojoSpec, ParameterSpec, ResolutionScope,
};
pub use class_doc::{
    link_class_docs, ClassDoc, ClassDocMap, PropertyDoc, RawClassDoc, DEPRECATED_TAG, SINCE_TAG,
};
pub use coordinate::{ArtifactCoordinate, Dependency};
pub use descriptor::{DescriptorParameter, MojoDescriptor, Requirement};
pub use project::{ExtractionRequest, PluginRef, ProjectRef, RemoteRepository};
pub use scan_request::ScanRequest;
