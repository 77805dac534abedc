use crate::types::{ArtifactCoordinate, ScanRequest};
use std::fmt;

/// A non-fatal problem worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionWarning {
    /// No sources artifact exists for an external artifact
    MissingSources { artifact: ArtifactCoordinate },
    /// A component declaration of a build-tool-injected type was turned into a parameter
    ComponentAsParameter {
        class_name: String,
        field_name: String,
        expression: String,
    },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::MissingSources { artifact } => write!(
                f,
                "Unable to get sources artifact for {artifact}; javadoc tags (@since, @deprecated and comments) won't be available."
            ),
            ExtractionWarning::ComponentAsParameter {
                class_name,
                field_name,
                expression,
            } => write!(
                f,
                "Deprecated @Component annotation for '{field_name}' property in {class_name}: replace with @Parameter( defaultValue = \"{expression}\", readonly = true )"
            ),
        }
    }
}

/// What an extraction run did besides producing descriptors
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Scan requests handed to the documentation back-ends, in order
    pub scan_requests: Vec<ScanRequest>,
    /// External artifacts whose sources could not be found
    pub missing_sources: Vec<ArtifactCoordinate>,
    pub warnings: Vec<ExtractionWarning>,
}
