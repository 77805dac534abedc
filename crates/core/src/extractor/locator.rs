//! Partitions the artifacts owning annotated classes by where their sources live

use crate::types::{AnnotatedClass, ArtifactCoordinate, ProjectRef};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Result of source location
#[derive(Debug, Default)]
pub struct LocatedSources<'a> {
    /// Sibling projects of the current build, ordered by project id
    pub sibling_projects: Vec<&'a ProjectRef>,
    /// Artifacts whose sources must be fetched
    pub external_artifacts: BTreeSet<ArtifactCoordinate>,
}

/// Split the owning artifacts of `classes` into sibling projects and external
/// artifacts.
///
/// Classes of the current project (same artifact id) and classes without any
/// recognized annotation are skipped.
pub fn locate<'a, 'c>(
    own_artifact_id: &str,
    siblings: &'a [ProjectRef],
    classes: impl IntoIterator<Item = &'c AnnotatedClass>,
) -> LocatedSources<'a> {
    let mut sibling_projects: BTreeMap<String, &'a ProjectRef> = BTreeMap::new();
    let mut external_artifacts = BTreeSet::new();

    for class in classes {
        if class.artifact.artifact_id == own_artifact_id {
            continue;
        }

        if !class.has_annotations() {
            // no annotations, so it cannot be a documentation target
            continue;
        }

        let artifact_id = class.artifact.id();
        match siblings.iter().find(|project| project.id() == artifact_id) {
            Some(project) => {
                debug!("{} comes from sibling project {}", class.class_name, artifact_id);
                sibling_projects.insert(artifact_id, project);
            }
            None => {
                debug!("{} comes from external artifact {}", class.class_name, artifact_id);
                external_artifacts.insert(class.artifact.clone());
            }
        }
    }

    LocatedSources {
        sibling_projects: sibling_projects.into_values().collect(),
        external_artifacts,
    }
}
