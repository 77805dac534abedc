//! Annotation scanning interface

use crate::error::Result;
use crate::types::{AnnotatedClasses, Dependency, ProjectRef};
use std::path::Path;

/// Produces the annotated-class records of a compiled project
pub trait AnnotationScanner: Send + Sync {
    fn scan(
        &self,
        classes_directory: &Path,
        dependencies: &[Dependency],
        project: &ProjectRef,
    ) -> Result<AnnotatedClasses>;
}
